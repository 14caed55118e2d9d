//! Decoding of raw logs into bridge events.

use alloy_primitives::{B256, Log};
use alloy_sol_types::SolEvent;
use bridge_protocol::{
    DepositFinalized, GatewaySet, L2ToL1Transaction, L2ToL1Tx, TicketCreated, WithdrawalInitiated,
};

/// The contract expected to emit an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventSource {
    /// The gateway router.
    Router,
    /// A watched token gateway.
    Gateway,
    /// The `ArbSys` precompile.
    ArbSys,
    /// The `ArbRetryableTx` precompile.
    ArbRetryableTx,
}

impl EventSource {
    /// Returns the contract expected to emit the bridge event with signature hash `topic0`, or
    /// `None` if `topic0` is not a bridge event.
    pub fn of_topic(topic0: &B256) -> Option<Self> {
        let source = if *topic0 == GatewaySet::SIGNATURE_HASH {
            Self::Router
        } else if *topic0 == WithdrawalInitiated::SIGNATURE_HASH ||
            *topic0 == DepositFinalized::SIGNATURE_HASH
        {
            Self::Gateway
        } else if *topic0 == TicketCreated::SIGNATURE_HASH {
            Self::ArbRetryableTx
        } else if *topic0 == L2ToL1Transaction::SIGNATURE_HASH ||
            *topic0 == L2ToL1Tx::SIGNATURE_HASH
        {
            Self::ArbSys
        } else {
            return None;
        };
        Some(source)
    }
}

/// A bridge event decoded from a log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeEvent {
    /// A token was assigned a gateway.
    GatewaySet(GatewaySet),
    /// A withdrawal was initiated through a gateway.
    WithdrawalInitiated(WithdrawalInitiated),
    /// A deposit was finalized by a gateway.
    DepositFinalized(DepositFinalized),
    /// A retryable ticket was created.
    TicketCreated(TicketCreated),
    /// A classic L2 to L1 message.
    L2ToL1Transaction(L2ToL1Transaction),
    /// A nitro L2 to L1 message.
    L2ToL1Tx(L2ToL1Tx),
}

impl BridgeEvent {
    /// Decodes `log` by its first topic.
    ///
    /// Returns `Ok(None)` for logs that are not bridge events, and an error when the first topic
    /// names a bridge event but the remaining topics or data do not match it.
    pub fn decode(log: &Log) -> Result<Option<Self>, alloy_sol_types::Error> {
        let Some(topic0) = log.topics().first() else {
            return Ok(None);
        };
        let topics = log.topics().iter().copied();
        let data = &log.data.data;

        let event = if *topic0 == GatewaySet::SIGNATURE_HASH {
            Self::GatewaySet(GatewaySet::decode_raw_log(topics, data)?)
        } else if *topic0 == WithdrawalInitiated::SIGNATURE_HASH {
            Self::WithdrawalInitiated(WithdrawalInitiated::decode_raw_log(topics, data)?)
        } else if *topic0 == DepositFinalized::SIGNATURE_HASH {
            Self::DepositFinalized(DepositFinalized::decode_raw_log(topics, data)?)
        } else if *topic0 == TicketCreated::SIGNATURE_HASH {
            Self::TicketCreated(TicketCreated::decode_raw_log(topics, data)?)
        } else if *topic0 == L2ToL1Transaction::SIGNATURE_HASH {
            Self::L2ToL1Transaction(L2ToL1Transaction::decode_raw_log(topics, data)?)
        } else if *topic0 == L2ToL1Tx::SIGNATURE_HASH {
            Self::L2ToL1Tx(L2ToL1Tx::decode_raw_log(topics, data)?)
        } else {
            return Ok(None);
        };
        Ok(Some(event))
    }

    /// The event name, as declared in Solidity.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::GatewaySet(_) => "GatewaySet",
            Self::WithdrawalInitiated(_) => "WithdrawalInitiated",
            Self::DepositFinalized(_) => "DepositFinalized",
            Self::TicketCreated(_) => "TicketCreated",
            Self::L2ToL1Transaction(_) => "L2ToL1Transaction",
            Self::L2ToL1Tx(_) => "L2ToL1Tx",
        }
    }

    /// The contract expected to emit the event.
    pub const fn source(&self) -> EventSource {
        match self {
            Self::GatewaySet(_) => EventSource::Router,
            Self::WithdrawalInitiated(_) | Self::DepositFinalized(_) => EventSource::Gateway,
            Self::TicketCreated(_) => EventSource::ArbRetryableTx,
            Self::L2ToL1Transaction(_) | Self::L2ToL1Tx(_) => EventSource::ArbSys,
        }
    }
}
