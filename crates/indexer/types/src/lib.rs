//! Types shared by the bridge indexer crates.
//!
//! Entities are the records the indexer persists. An [`EventRecord`] is a raw log delivered with
//! the block and transaction that produced it.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(any(feature = "std", test)), no_std)]

extern crate alloc;

mod entity;
pub use entity::{
    Entity, EntityKey, EntityKind, Gateway, GatewayDepositData, GatewayWithdrawalData,
    L1ToL2Message, L2ToL1Message, Token, TokenGatewayJoin,
};

mod id;
pub use id::{address_id, join_id, tx_hash_id};

mod record;
pub use record::EventRecord;
