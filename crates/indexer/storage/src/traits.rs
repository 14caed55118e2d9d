use crate::StorageError;
use alloy_primitives::Address;
use bridge_indexer_types::{Entity, EntityKind};
use std::fmt::Debug;

/// Provides keyed access to indexed entities.
///
/// Writes are last-write-wins per key. Callers that need first-write-wins semantics check with
/// [`EntityStore::load`] before saving.
pub trait EntityStore: Debug + Send + Sync {
    /// Loads the entity of `kind` identified by `id`.
    ///
    /// # Returns
    /// * `Ok(Some(Entity))` if the entity exists.
    /// * `Ok(None)` if it has never been saved.
    /// * `Err(StorageError)` if the store could not be read.
    fn load(&self, kind: EntityKind, id: &str) -> Result<Option<Entity>, StorageError>;

    /// Saves `entity`, replacing any entity with the same key.
    fn save(&self, entity: Entity) -> Result<(), StorageError>;
}

/// Tracks the contracts whose events the indexer consumes.
pub trait ContractRegistry: Debug + Send + Sync {
    /// Starts watching `address`. Registering an address twice has no effect.
    fn register_watched_contract(&self, address: Address) -> Result<(), StorageError>;

    /// Returns `true` if `address` is watched.
    fn is_watched(&self, address: &Address) -> Result<bool, StorageError>;
}
