//! Persistence collaborators of the bridge indexer.
//!
//! The indexer reaches storage only through [`EntityStore`] and [`ContractRegistry`].
//! [`InMemoryStore`] implements both and can dump its contents as JSON.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod error;
pub use error::StorageError;

mod traits;
pub use traits::{ContractRegistry, EntityStore};

mod memory;
pub use memory::{InMemoryStore, StoreDump};
