//! Block and transaction context delivered alongside a bridge event.

use alloy_primitives::{Address, B256, Bytes, U256};

/// The header fields of the block enclosing an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BlockContext {
    /// The block number.
    pub number: u64,
    /// The block hash.
    #[cfg_attr(feature = "serde", serde(default))]
    pub hash: B256,
    /// The state root. Zeroed on classic-era blocks.
    pub state_root: B256,
    /// The block timestamp.
    #[cfg_attr(feature = "serde", serde(default))]
    pub timestamp: u64,
}

/// The transaction that emitted an event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TransactionContext {
    /// The transaction hash.
    pub hash: B256,
    /// The sender.
    pub from: Address,
    /// The recipient, if any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub to: Option<Address>,
    /// The raw call data.
    #[cfg_attr(feature = "serde", serde(default))]
    pub input: Bytes,
    /// The value transferred.
    #[cfg_attr(feature = "serde", serde(default))]
    pub value: U256,
}
