//! In-memory storage.

use crate::{ContractRegistry, EntityStore, StorageError};
use alloy_primitives::Address;
use bridge_indexer_types::{Entity, EntityKey, EntityKind};
use serde::{Deserialize, Serialize};
use std::{
    collections::{BTreeMap, BTreeSet},
    io::Write,
    sync::RwLock,
};
use tracing::{debug, trace};

/// An [`EntityStore`] and [`ContractRegistry`] held entirely in memory.
///
/// Entities are kept ordered by [`EntityKey`], so snapshots are deterministic.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entities: RwLock<BTreeMap<EntityKey, Entity>>,
    watched: RwLock<BTreeSet<Address>>,
}

/// The serialized contents of an [`InMemoryStore`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreDump {
    /// Every stored entity, ordered by kind and id.
    pub entities: Vec<Entity>,
    /// Every watched contract, in ascending order.
    pub watched_contracts: Vec<Address>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored entities.
    pub fn len(&self) -> Result<usize, StorageError> {
        Ok(self.entities.read().map_err(|_| StorageError::LockPoisoned)?.len())
    }

    /// Returns `true` if no entity has been saved.
    pub fn is_empty(&self) -> Result<bool, StorageError> {
        Ok(self.len()? == 0)
    }

    /// Returns the stored entities of `kind`, ordered by id.
    pub fn entities_of(&self, kind: EntityKind) -> Result<Vec<Entity>, StorageError> {
        let entities = self.entities.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(entities.iter().filter(|(key, _)| key.kind == kind).map(|(_, e)| e.clone()).collect())
    }

    /// Copies the store contents.
    pub fn snapshot(&self) -> Result<StoreDump, StorageError> {
        let entities = self.entities.read().map_err(|_| StorageError::LockPoisoned)?;
        let watched = self.watched.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(StoreDump {
            entities: entities.values().cloned().collect(),
            watched_contracts: watched.iter().copied().collect(),
        })
    }

    /// Writes the store contents to `writer` as pretty-printed JSON.
    pub fn write_json<W: Write>(&self, writer: W) -> Result<(), StorageError> {
        let dump = self.snapshot()?;
        serde_json::to_writer_pretty(writer, &dump)?;
        Ok(())
    }
}

impl EntityStore for InMemoryStore {
    fn load(&self, kind: EntityKind, id: &str) -> Result<Option<Entity>, StorageError> {
        let entities = self.entities.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(entities.get(&EntityKey::new(kind, id)).cloned())
    }

    fn save(&self, entity: Entity) -> Result<(), StorageError> {
        let key = entity.key();
        trace!(target: "storage", %key, "Saving entity");
        self.entities.write().map_err(|_| StorageError::LockPoisoned)?.insert(key, entity);
        Ok(())
    }
}

impl ContractRegistry for InMemoryStore {
    fn register_watched_contract(&self, address: Address) -> Result<(), StorageError> {
        let inserted =
            self.watched.write().map_err(|_| StorageError::LockPoisoned)?.insert(address);
        if inserted {
            debug!(target: "storage", %address, "Watching contract");
        }
        Ok(())
    }

    fn is_watched(&self, address: &Address) -> Result<bool, StorageError> {
        Ok(self.watched.read().map_err(|_| StorageError::LockPoisoned)?.contains(address))
    }
}
