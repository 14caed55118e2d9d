//! Retryable ticket call data parsing.

use crate::{ProtocolEra, createRetryableTicketCall, submitRetryableCall};
use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::SolCall;
use bridge_abi::{
    DecodeError, TupleSignature, WORD_SIZE, decode_fixed_tuple, extract_dynamic_segment,
};

/// Positional layout of a retryable ticket call for one protocol era.
///
/// Slot positions differ between eras and are not interchangeable. Each signature lists the
/// fixed arguments followed by the offset and length words of the trailing `bytes` argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketLayout {
    /// The function selector the call data is expected to carry.
    pub selector: [u8; 4],
    /// The head signature, decoded after the selector.
    pub signature: &'static str,
    /// Slot of the deposit amount. `None` when the deposit is the transaction value.
    pub deposit: Option<usize>,
    /// Slot of the L2 call value.
    pub call_value: usize,
    /// Slot of the L2 destination.
    pub destination: usize,
    /// Slot of the offset word of the trailing `bytes` argument.
    pub data_offset: usize,
    /// Slot of the length word of the trailing `bytes` argument.
    pub data_length: usize,
}

impl TicketLayout {
    /// `createRetryableTicket(address,uint256,uint256,address,address,uint256,uint256,bytes)`.
    pub const CLASSIC: Self = Self {
        selector: createRetryableTicketCall::SELECTOR,
        signature: "(address,uint256,uint256,address,address,uint256,uint256,uint256,uint256)",
        deposit: None,
        call_value: 1,
        destination: 0,
        data_offset: 7,
        data_length: 8,
    };

    /// `submitRetryable(bytes32,uint256,uint256,uint256,uint256,uint64,uint256,address,address,address,bytes)`.
    pub const NITRO: Self = Self {
        selector: submitRetryableCall::SELECTOR,
        signature: "(bytes32,uint256,uint256,uint256,uint256,uint64,uint256,address,address,address,uint256,uint256)",
        deposit: Some(2),
        call_value: 3,
        destination: 9,
        data_offset: 10,
        data_length: 11,
    };

    /// Returns the layout used by `era`.
    pub const fn for_era(era: ProtocolEra) -> &'static Self {
        match era {
            ProtocolEra::Classic => &Self::CLASSIC,
            ProtocolEra::Nitro => &Self::NITRO,
        }
    }

    /// The offset word every well-formed call carries: the size of the argument head.
    pub const fn expected_data_offset(&self) -> usize {
        (self.data_offset + 1) * WORD_SIZE
    }
}

/// Normalized fields of a retryable ticket, independent of the era that created it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TicketFields {
    /// The deposit credited on L2.
    pub deposit_amount: U256,
    /// The value passed to the L2 call.
    pub l2_call_value: U256,
    /// The target of the L2 call.
    pub l2_destination: Address,
    /// The L2 call data. Its length always equals the declared data length.
    pub l2_calldata: Bytes,
    /// Whether the ticket was created under the classic protocol.
    pub is_classic_era: bool,
}

impl TicketFields {
    /// Parses the input of a ticket-creating transaction.
    ///
    /// `value` is the transaction value, which carries the deposit for classic tickets.
    pub fn parse(input: &[u8], value: U256, era: ProtocolEra) -> Result<Self, DecodeError> {
        let layout = TicketLayout::for_era(era);
        if input.len() < 4 {
            return Err(DecodeError::MissingSelector(input.len()));
        }
        let (selector, args) = input.split_at(4);
        if selector != layout.selector.as_slice() {
            tracing::debug!(
                target: "ticket",
                %era,
                selector = ?selector,
                "Ticket call data carries an unexpected selector, decoding by layout"
            );
        }

        let signature: TupleSignature = layout.signature.parse()?;
        let tuple = decode_fixed_tuple(&signature, args)?;

        let offset = tuple.uint(layout.data_offset)?;
        let expected = layout.expected_data_offset();
        if offset != U256::from(expected) {
            return Err(DecodeError::UnexpectedDataOffset { expected, found: offset });
        }

        let data_length = tuple.uint(layout.data_length)?;
        tracing::debug!(target: "ticket", %era, %data_length, "Decoded ticket head");
        let l2_calldata = extract_dynamic_segment(&tuple, args, data_length)?;

        let deposit_amount = match layout.deposit {
            Some(index) => tuple.uint(index)?,
            None => value,
        };

        Ok(Self {
            deposit_amount,
            l2_call_value: tuple.uint(layout.call_value)?,
            l2_destination: tuple.address(layout.destination)?,
            l2_calldata,
            is_classic_era: era.is_classic(),
        })
    }
}
