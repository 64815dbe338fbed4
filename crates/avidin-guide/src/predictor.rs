//! Adapter around the external structure/affinity predictor.
//!
//! The predictor is invoked synchronously once per candidate:
//! `boltz predict <spec> --out_dir <dir> --use_msa_server`, with the remote
//! MSA service supplying whatever alignment evidence it needs. Results land
//! below the output directory as `affinity_*.json`; the most recently
//! modified match carries the prediction.

use crate::error::PredictorError;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::SystemTime;
use tracing::debug;

const PREDICTOR_EXE: &str = "boltz";
const PREDICTOR_EXE_ENV: &str = "BOLTZ_EXE";

const AFFINITY_PREFIX: &str = "affinity_";
const AFFINITY_SUFFIX: &str = ".json";

/// The slice of the predictor's result file this tool cares about.
#[derive(Debug, Deserialize)]
struct AffinityOutput {
    affinity_pred_value: f64,
}

/// Runs the external predictor and extracts its affinity estimate.
#[derive(Debug, Clone)]
pub struct BoltzRunner {
    executable: PathBuf,
    use_msa_server: bool,
}

impl BoltzRunner {
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
            use_msa_server: true,
        }
    }

    /// Resolves the executable from an explicit path, the `BOLTZ_EXE`
    /// environment variable, or `PATH`, in that order.
    pub fn discover(explicit: Option<PathBuf>) -> Result<Self, PredictorError> {
        if let Some(path) = explicit {
            return Ok(Self::new(path));
        }
        if let Ok(path) = env::var(PREDICTOR_EXE_ENV) {
            return Ok(Self::new(path));
        }
        which_in_path(PREDICTOR_EXE)
            .map(Self::new)
            .ok_or(PredictorError::ExecutableNotFound)
    }

    pub fn without_msa_server(mut self) -> Self {
        self.use_msa_server = false;
        self
    }

    /// Blocks until the predictor exits, then returns the affinity value
    /// parsed from its most recent output below `out_dir`.
    pub fn predict(&self, spec_path: &Path, out_dir: &Path) -> Result<f64, PredictorError> {
        let mut cmd = Command::new(&self.executable);
        cmd.arg("predict")
            .arg(spec_path)
            .arg("--out_dir")
            .arg(out_dir);
        if self.use_msa_server {
            cmd.arg("--use_msa_server");
        }
        debug!(command = ?cmd, "invoking affinity predictor");

        let output = cmd.output()?;
        if !output.status.success() {
            return Err(PredictorError::Execution {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        let result_path = latest_affinity_output(out_dir)?
            .ok_or_else(|| PredictorError::OutputMissing(out_dir.to_path_buf()))?;
        parse_affinity(&result_path)
    }
}

fn which_in_path(name: &str) -> Option<PathBuf> {
    let paths = env::var_os("PATH")?;
    env::split_paths(&paths)
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}

/// Most recently modified `affinity_*.json` anywhere below `root`.
fn latest_affinity_output(root: &Path) -> Result<Option<PathBuf>, PredictorError> {
    let mut found: Vec<(SystemTime, PathBuf)> = Vec::new();
    collect_affinity_outputs(root, &mut found)?;
    Ok(found
        .into_iter()
        .max_by_key(|(mtime, _)| *mtime)
        .map(|(_, path)| path))
}

fn collect_affinity_outputs(
    dir: &Path,
    found: &mut Vec<(SystemTime, PathBuf)>,
) -> Result<(), PredictorError> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            collect_affinity_outputs(&path, found)?;
        } else if is_affinity_output(&path) {
            found.push((entry.metadata()?.modified()?, path));
        }
    }
    Ok(())
}

fn is_affinity_output(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.starts_with(AFFINITY_PREFIX) && name.ends_with(AFFINITY_SUFFIX))
        .unwrap_or(false)
}

fn parse_affinity(path: &Path) -> Result<f64, PredictorError> {
    let raw = fs::read_to_string(path)?;
    let parsed: AffinityOutput =
        serde_json::from_str(&raw).map_err(|e| PredictorError::OutputMalformed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    Ok(parsed.affinity_pred_value)
}
