use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Failures of one scoring call against the external affinity predictor.
///
/// These are per-candidate errors: the scorer converts every variant into
/// the neutral fallback score so the surrounding search keeps running.
#[derive(Debug, Error)]
pub enum PredictorError {
    #[error("predictor executable not found; install boltz or pass --boltz-path")]
    ExecutableNotFound,

    #[error("predictor exited with {status}: {stderr}")]
    Execution { status: ExitStatus, stderr: String },

    #[error("no affinity output found under {0}")]
    OutputMissing(PathBuf),

    #[error("affinity output {path} is malformed: {reason}", path = path.display())]
    OutputMalformed { path: PathBuf, reason: String },

    #[error("candidate still contains mask symbols")]
    MaskedCandidate,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize prediction spec: {0}")]
    Spec(#[from] serde_yaml::Error),
}

/// Failures talking to the remote sequence model.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("sequence server request failed: {0}")]
    Http(#[from] ureq::Error),

    #[error("sequence server returned an unusable response: {0}")]
    BadResponse(String),
}

/// Failures of the guided search itself. Scoring failures never show up
/// here; they collapse to the fallback score inside the scorer.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Core(#[from] avidin_core::CoreError),

    #[error("model produced no usable candidate at step {step}")]
    NoCandidates { step: usize },

    #[error("decoding finished with {remaining} unresolved positions")]
    Unresolved { remaining: usize },
}
