use thiserror::Error;

/// Errors raised while loading configuration or input records.
///
/// The status resolution itself never fails: absent or unrecognised records
/// degrade to the primary proposal status.
#[derive(Debug, Error)]
pub enum MetagovError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Proposal not found: {0}")]
    ProposalNotFound(u64),
}

pub type Result<T> = std::result::Result<T, MetagovError>;
