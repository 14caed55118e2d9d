use bridge_indexer_storage::StorageError;
use bridge_protocol::DecodeError;
use thiserror::Error;

/// Errors that abort the processing of a single event.
#[derive(Debug, Error)]
pub enum IndexerError {
    /// The transaction call data did not match the expected layout.
    #[error("failed to decode call data: {0}")]
    Decode(#[from] DecodeError),

    /// The log did not decode as the event its first topic names.
    #[error("failed to decode log: {0}")]
    Log(#[from] alloy_sol_types::Error),

    /// The entity store failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}
