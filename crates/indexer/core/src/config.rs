//! Indexer configuration.

use alloy_primitives::Address;
use bridge_protocol::{Precompiles, StateRootClassifier};
use serde::{Deserialize, Serialize};

/// The contracts the indexer follows and the signals it classifies eras with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexerConfig {
    /// The standard ERC20 gateway. It never emits `GatewaySet`, so it is watched from startup
    /// and never recorded as a `Gateway`.
    pub l2_standard_gateway: Address,
    /// The gateway router emitting `GatewaySet`.
    pub l2_gateway_router: Address,
    /// The `ArbSys` precompile.
    #[serde(default = "default_arb_sys")]
    pub arb_sys: Address,
    /// The `ArbRetryableTx` precompile.
    #[serde(default = "default_arb_retryable_tx")]
    pub arb_retryable_tx: Address,
    /// The first nitro block, if known.
    #[serde(default)]
    pub nitro_genesis_block: Option<u64>,
}

const fn default_arb_sys() -> Address {
    Precompiles::ARB_SYS
}

const fn default_arb_retryable_tx() -> Address {
    Precompiles::ARB_RETRYABLE_TX
}

impl IndexerConfig {
    /// Creates a config using the canonical precompile addresses and no nitro genesis height.
    pub const fn new(l2_standard_gateway: Address, l2_gateway_router: Address) -> Self {
        Self {
            l2_standard_gateway,
            l2_gateway_router,
            arb_sys: Precompiles::ARB_SYS,
            arb_retryable_tx: Precompiles::ARB_RETRYABLE_TX,
            nitro_genesis_block: None,
        }
    }

    /// Returns `true` if `gateway` is the standard gateway.
    pub fn is_standard_gateway(&self, gateway: &Address) -> bool {
        self.l2_standard_gateway == *gateway
    }

    /// The era classifier described by this config.
    pub const fn classifier(&self) -> StateRootClassifier {
        match self.nitro_genesis_block {
            Some(height) => StateRootClassifier::with_nitro_genesis(height),
            None => StateRootClassifier::new(),
        }
    }
}
