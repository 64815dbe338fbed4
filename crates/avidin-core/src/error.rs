use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("reference structure {id} chain {chain} not found: {reason}")]
    ReferenceNotFound {
        id: String,
        chain: String,
        reason: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
