//! Run workspace bookkeeping.
//!
//! Every generation run owns one directory under which all scoring
//! artifacts accumulate. The workspace is append-only: artifacts from
//! earlier candidates are never removed or overwritten.

use chrono::Local;
use std::cell::Cell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const RUNS_ROOT: &str = "runs";

/// Directory scoping all artifacts of one generation run.
#[derive(Debug)]
pub struct RunWorkspace {
    root: PathBuf,
    next_candidate: Cell<usize>,
}

impl RunWorkspace {
    /// Creates (or reuses) the workspace rooted at `root`.
    pub fn create(root: impl Into<PathBuf>) -> io::Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self {
            root,
            next_candidate: Cell::new(0),
        })
    }

    /// Creates a timestamped workspace under the `runs` root.
    pub fn create_default() -> io::Result<Self> {
        let stamp = Local::now().format("%Y%m%d_%H%M%S");
        Self::create(PathBuf::from(RUNS_ROOT).join(format!("run_{stamp}")))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Cache directory for downloaded reference structures.
    pub fn structure_cache(&self) -> PathBuf {
        self.root.join("structures")
    }

    /// Allocates a fresh numbered directory for one scoring call.
    pub fn next_candidate_dir(&self) -> io::Result<PathBuf> {
        let n = self.next_candidate.get();
        self.next_candidate.set(n + 1);
        let dir = self.root.join(format!("candidate_{n:04}"));
        fs::create_dir_all(&dir)?;
        Ok(dir)
    }
}
