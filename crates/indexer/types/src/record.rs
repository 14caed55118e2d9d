//! Raw events as delivered to the indexer.

use alloy_primitives::Log;
use bridge_protocol::{BlockContext, TransactionContext};
use serde::{Deserialize, Serialize};

/// A log together with the block and transaction that emitted it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// The enclosing block.
    pub block: BlockContext,
    /// The emitting transaction.
    pub transaction: TransactionContext,
    /// The log itself.
    pub log: Log,
}
