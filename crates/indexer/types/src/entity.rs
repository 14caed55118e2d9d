//! Records persisted by the indexer.

use alloc::string::String;
use alloy_primitives::{Address, B256, Bytes, U256};
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// The kind of an [`Entity`]. Identifiers are unique within a kind.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityKind {
    /// A non-standard token gateway.
    Gateway,
    /// An L1 token.
    Token,
    /// A gateway and token pairing.
    TokenGatewayJoin,
    /// A withdrawal through a gateway.
    GatewayWithdrawalData,
    /// A deposit finalized by a gateway.
    GatewayDepositData,
    /// A retryable ticket.
    L1ToL2Message,
    /// A message sent from L2 to L1.
    L2ToL1Message,
}

/// The store key of an [`Entity`].
#[derive(Debug, Display, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[display("{kind}/{id}")]
pub struct EntityKey {
    /// The entity kind.
    pub kind: EntityKind,
    /// The identifier within the kind.
    pub id: String,
}

impl EntityKey {
    /// Creates a new key.
    pub fn new(kind: EntityKind, id: impl Into<String>) -> Self {
        Self { kind, id: id.into() }
    }
}

/// A token gateway deployed on L2, other than the standard gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gateway {
    /// The gateway address id.
    pub id: String,
}

/// A token identified by its L1 address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The L1 token address id.
    pub id: String,
}

/// Links a token to the gateway it is bridged through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenGatewayJoin {
    /// The gateway id followed by the token id.
    pub id: String,
    /// The gateway id.
    pub gateway: String,
    /// The token id.
    pub token: String,
    /// The L2 block the pairing was last observed at.
    pub l2_block_num: u64,
}

/// A withdrawal initiated through a token gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayWithdrawalData {
    /// The hex gateway withdrawal id. This is the packed identity of the L2 to L1 message.
    pub id: String,
    /// The L2 sender.
    pub from: Address,
    /// The L1 recipient.
    pub to: Address,
    /// The token amount.
    pub amount: U256,
    /// The gateway exit number.
    pub exit_num: U256,
    /// The id of the [`TokenGatewayJoin`].
    pub token_gateway_join: String,
    /// The id of the [`L2ToL1Message`] carrying the withdrawal.
    pub l2_to_l1_message: String,
}

/// A deposit finalized on L2 by a token gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayDepositData {
    /// The finalizing transaction hash.
    pub id: String,
    /// The L1 sender.
    pub from: Address,
    /// The L2 recipient.
    pub to: Address,
    /// The token amount.
    pub amount: U256,
    /// The L2 block number.
    pub l2_block_num: u64,
    /// The finalizing transaction hash.
    pub l2_tx_hash: B256,
    /// The id of the [`TokenGatewayJoin`].
    pub token_gateway_join: String,
}

/// A retryable ticket, created once per L1 to L2 message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct L1ToL2Message {
    /// The creating transaction hash.
    pub id: String,
    /// Whether the ticket was created under the classic protocol.
    pub is_classic: bool,
    /// The aliased L1 sender.
    pub l1_from_aliased: Address,
    /// The deposit credited on L2.
    pub deposit: U256,
    /// The value passed to the L2 call.
    pub l2_callvalue: U256,
    /// The L2 call data.
    pub l2_calldata: Bytes,
    /// The target of the L2 call.
    pub l2_to: Address,
    /// The L2 block number.
    pub l2_block_num: u64,
    /// The creating transaction hash.
    pub l2_tx_hash: B256,
}

/// A message sent from L2 to L1 through `ArbSys`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct L2ToL1Message {
    /// The cross-era identifier, see [`bridge_protocol::L2ToL1MessageId`].
    pub id: String,
    /// The L2 caller.
    pub from: Address,
    /// The L1 destination.
    pub to: Address,
    /// The raw on-chain counter.
    pub unique_id: U256,
    /// The classic outbox batch.
    pub batch_number: Option<U256>,
    /// The index within the classic outbox batch.
    pub index_in_batch: Option<U256>,
    /// The L2 block number.
    pub l2_block_num: u64,
    /// The emitting transaction hash.
    pub l2_tx_hash: B256,
    /// The L1 block number reported by `ArbSys`.
    pub l1_block_num: U256,
    /// The L2 timestamp reported by `ArbSys`.
    pub l2_timestamp: U256,
    /// The value sent to L1.
    pub l1_callvalue: U256,
    /// The L1 call data.
    pub l1_calldata: Bytes,
    /// Whether the message was sent under the classic protocol.
    pub is_classic: bool,
}

/// Any record the indexer persists.
#[derive(Debug, Clone, PartialEq, Eq, From, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Entity {
    /// See [`Gateway`].
    Gateway(Gateway),
    /// See [`Token`].
    Token(Token),
    /// See [`TokenGatewayJoin`].
    TokenGatewayJoin(TokenGatewayJoin),
    /// See [`GatewayWithdrawalData`].
    GatewayWithdrawalData(GatewayWithdrawalData),
    /// See [`GatewayDepositData`].
    GatewayDepositData(GatewayDepositData),
    /// See [`L1ToL2Message`].
    L1ToL2Message(L1ToL2Message),
    /// See [`L2ToL1Message`].
    L2ToL1Message(L2ToL1Message),
}

impl Entity {
    /// Returns the kind of the entity.
    pub const fn kind(&self) -> EntityKind {
        match self {
            Self::Gateway(_) => EntityKind::Gateway,
            Self::Token(_) => EntityKind::Token,
            Self::TokenGatewayJoin(_) => EntityKind::TokenGatewayJoin,
            Self::GatewayWithdrawalData(_) => EntityKind::GatewayWithdrawalData,
            Self::GatewayDepositData(_) => EntityKind::GatewayDepositData,
            Self::L1ToL2Message(_) => EntityKind::L1ToL2Message,
            Self::L2ToL1Message(_) => EntityKind::L2ToL1Message,
        }
    }

    /// Returns the identifier of the entity.
    pub fn id(&self) -> &str {
        match self {
            Self::Gateway(e) => &e.id,
            Self::Token(e) => &e.id,
            Self::TokenGatewayJoin(e) => &e.id,
            Self::GatewayWithdrawalData(e) => &e.id,
            Self::GatewayDepositData(e) => &e.id,
            Self::L1ToL2Message(e) => &e.id,
            Self::L2ToL1Message(e) => &e.id,
        }
    }

    /// Returns the store key of the entity.
    pub fn key(&self) -> EntityKey {
        EntityKey::new(self.kind(), self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;
    use rstest::rstest;

    fn message() -> L2ToL1Message {
        L2ToL1Message {
            id: "0x8000000000000005".into(),
            from: address!("0x1111111111111111111111111111111111111111"),
            to: address!("0x2222222222222222222222222222222222222222"),
            unique_id: U256::from(5),
            batch_number: Some(U256::from(1)),
            index_in_batch: Some(U256::from(2)),
            l2_block_num: 7,
            l2_tx_hash: B256::repeat_byte(0x33),
            l1_block_num: U256::from(8),
            l2_timestamp: U256::from(9),
            l1_callvalue: U256::ZERO,
            l1_calldata: Bytes::new(),
            is_classic: true,
        }
    }

    #[rstest]
    #[case::gateway(Gateway { id: "0xg".into() }.into(), EntityKind::Gateway, "0xg")]
    #[case::token(Token { id: "0xt".into() }.into(), EntityKind::Token, "0xt")]
    #[case::message(message().into(), EntityKind::L2ToL1Message, "0x8000000000000005")]
    fn test_entity_key(#[case] entity: Entity, #[case] kind: EntityKind, #[case] id: &str) {
        assert_eq!(entity.kind(), kind);
        assert_eq!(entity.id(), id);
        assert_eq!(entity.key(), EntityKey::new(kind, id));
    }

    #[test]
    fn test_key_display() {
        let key = EntityKey::new(EntityKind::GatewayDepositData, "0xabc");
        assert_eq!(key.to_string(), "GatewayDepositData/0xabc");
    }

    #[test]
    fn test_entity_json_is_tagged() {
        let value = serde_json::to_value(Entity::from(message())).unwrap();
        assert_eq!(value["kind"], "L2ToL1Message");
        assert_eq!(value["id"], "0x8000000000000005");
        assert_eq!(value["isClassic"], true);
        assert_eq!(value["uniqueId"], "0x5");
        assert_eq!(value["l2BlockNum"], 7);
    }
}
