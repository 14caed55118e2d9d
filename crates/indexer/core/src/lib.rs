//! Bridge event handlers for the classic and nitro protocol eras.
//!
//! [`BridgeIndexer`] decodes raw logs into [`BridgeEvent`]s, checks that each was emitted by the
//! contract expected to emit it, and turns it into entities through the
//! [`bridge_indexer_storage::EntityStore`].
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod config;
pub use config::IndexerConfig;

mod error;
pub use error::IndexerError;

mod event;
pub use event::{BridgeEvent, EventSource};

mod indexer;
pub use indexer::{BridgeIndexer, ProcessSummary};

#[cfg(feature = "metrics")]
mod metrics;
#[cfg(feature = "metrics")]
pub use metrics::Metrics;
