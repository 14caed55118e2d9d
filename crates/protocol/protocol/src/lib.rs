//! Bridge protocol types shared by the classic and nitro eras.
//!
//! This crate classifies blocks into protocol eras, parses retryable ticket call data into
//! era-independent [`TicketFields`], and allocates the cross-era identity of L2 to L1 messages.
//! It also carries the Solidity bindings for every bridge event the indexer consumes.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(any(feature = "std", test)), no_std)]

extern crate alloc;

pub use bridge_abi::DecodeError;

mod bindings;
pub use bindings::{
    DepositFinalized, GatewaySet, L2ToL1Transaction, L2ToL1Tx, Precompiles, TicketCreated,
    WithdrawalInitiated, createRetryableTicketCall, submitRetryableCall,
};

mod context;
pub use context::{BlockContext, TransactionContext};

mod era;
pub use era::{EraClassifier, ProtocolEra, StateRootClassifier};

mod identity;
pub use identity::{L2ToL1MessageId, allocate_message_id};

mod ticket;
pub use ticket::{TicketFields, TicketLayout};
