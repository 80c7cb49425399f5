use thiserror::Error;

use super::store::DeckKey;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Binary encoding error: {0}")]
    Binary(#[from] bincode::Error),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Backend unavailable for {key}: {reason}")]
    Backend { key: DeckKey, reason: String },
}

impl StorageError {
    /// Decode failures mean the stored blob is unusable; backend failures
    /// may succeed on retry.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, StorageError::Backend { .. })
    }
}
