use thiserror::Error;

/// Errors that may occur while interacting with indexer storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A lock guarding the store was poisoned by a panicking writer.
    #[error("storage lock poisoned")]
    LockPoisoned,

    /// The stored entities could not be serialized.
    #[error("failed to serialize store contents: {0}")]
    Serialization(#[from] serde_json::Error),
}
