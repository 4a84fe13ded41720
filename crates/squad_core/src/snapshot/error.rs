use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Version mismatch: found {found}, expected {expected}")]
    VersionMismatch { found: u32, expected: u32 },
}

impl SnapshotError {
    /// Whether a retry (or regeneration) can reasonably succeed.
    pub fn is_recoverable(&self) -> bool {
        match self {
            SnapshotError::Io(_) => true,
            SnapshotError::Serialization(_) => false,
            SnapshotError::VersionMismatch { .. } => false,
        }
    }
}
