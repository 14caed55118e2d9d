//! Protocol era classification.

use crate::BlockContext;
use alloy_primitives::B256;
use derive_more::Display;

/// The protocol era a block was produced under.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ProtocolEra {
    /// The pre-migration protocol.
    #[display("classic")]
    Classic,
    /// The migrated protocol.
    #[display("nitro")]
    Nitro,
}

impl ProtocolEra {
    /// Returns `true` for [`ProtocolEra::Classic`].
    pub const fn is_classic(&self) -> bool {
        matches!(self, Self::Classic)
    }
}

/// Decides which [`ProtocolEra`] a block belongs to.
pub trait EraClassifier {
    /// Classifies `block`. Classification is total: every block maps to exactly one era.
    fn classify(&self, block: &BlockContext) -> ProtocolEra;
}

/// Classifies blocks by their state root.
///
/// Migrated blocks carry a non-zero state root, while classic blocks leave the field zeroed. This
/// is a heuristic: block headers expose no explicit era marker. When the nitro genesis height is
/// known it can be supplied as an additional signal, and any block at or above it is treated as
/// nitro regardless of its state root.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StateRootClassifier {
    nitro_genesis_block: Option<u64>,
}

impl StateRootClassifier {
    /// Creates a classifier that only inspects the state root.
    pub const fn new() -> Self {
        Self { nitro_genesis_block: None }
    }

    /// Creates a classifier that also treats every block at or above `height` as nitro.
    pub const fn with_nitro_genesis(height: u64) -> Self {
        Self { nitro_genesis_block: Some(height) }
    }

    /// Returns the configured nitro genesis height, if any.
    pub const fn nitro_genesis_block(&self) -> Option<u64> {
        self.nitro_genesis_block
    }
}

impl EraClassifier for StateRootClassifier {
    fn classify(&self, block: &BlockContext) -> ProtocolEra {
        let past_genesis = self.nitro_genesis_block.is_some_and(|height| block.number >= height);
        if block.state_root != B256::ZERO || past_genesis {
            ProtocolEra::Nitro
        } else {
            ProtocolEra::Classic
        }
    }
}
