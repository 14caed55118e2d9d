//! Solidity bindings for the bridge contracts and precompiles.

use alloy_primitives::{Address, address};
use alloy_sol_types::sol;

sol! {
    /// Classic inbox entrypoint that creates a retryable ticket.
    #[derive(Debug, PartialEq, Eq)]
    function createRetryableTicket(
        address destAddr,
        uint256 l2CallValue,
        uint256 maxSubmissionCost,
        address excessFeeRefundAddress,
        address callValueRefundAddress,
        uint256 maxGas,
        uint256 gasPriceBid,
        bytes data
    ) external payable;

    /// Nitro internal transaction that submits a retryable ticket on L2.
    #[derive(Debug, PartialEq, Eq)]
    function submitRetryable(
        bytes32 requestId,
        uint256 l1BaseFee,
        uint256 deposit,
        uint256 callvalue,
        uint256 gasFeeCap,
        uint64 gasLimit,
        uint256 maxSubmissionFee,
        address feeRefundAddress,
        address beneficiary,
        address retryTo,
        bytes retryData
    ) external;

    /// Emitted by `ArbRetryableTx` once per retryable ticket.
    #[derive(Debug, PartialEq, Eq)]
    event TicketCreated(bytes32 indexed ticketId);

    /// Emitted by the classic `ArbSys` for every L2 to L1 message.
    #[derive(Debug, PartialEq, Eq)]
    event L2ToL1Transaction(
        address caller,
        address indexed destination,
        uint256 indexed uniqueId,
        uint256 indexed batchNumber,
        uint256 indexInBatch,
        uint256 arbBlockNum,
        uint256 ethBlockNum,
        uint256 timestamp,
        uint256 callvalue,
        bytes data
    );

    /// Emitted by the nitro `ArbSys` for every L2 to L1 message.
    #[derive(Debug, PartialEq, Eq)]
    event L2ToL1Tx(
        address caller,
        address indexed destination,
        uint256 indexed hash,
        uint256 indexed position,
        uint256 arbBlockNum,
        uint256 ethBlockNum,
        uint256 timestamp,
        uint256 callvalue,
        bytes data
    );

    /// Emitted by the `L2GatewayRouter` when a token is assigned a gateway.
    #[derive(Debug, PartialEq, Eq)]
    event GatewaySet(address indexed l1Token, address indexed gateway);

    /// Emitted by a token gateway when a withdrawal is initiated.
    #[derive(Debug, PartialEq, Eq)]
    event WithdrawalInitiated(
        address l1Token,
        address indexed _from,
        address indexed _to,
        uint256 indexed _l2ToL1Id,
        uint256 _exitNum,
        uint256 _amount
    );

    /// Emitted by a token gateway when a deposit is finalized on L2.
    #[derive(Debug, PartialEq, Eq)]
    event DepositFinalized(
        address indexed l1Token,
        address indexed _from,
        address indexed _to,
        uint256 _amount
    );
}

/// Addresses of the L2 precompiles that emit bridge events.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Precompiles;

impl Precompiles {
    /// `ArbSys`, which emits L2 to L1 messages in both eras.
    pub const ARB_SYS: Address = address!("0x0000000000000000000000000000000000000064");

    /// `ArbRetryableTx`, which emits `TicketCreated`.
    pub const ARB_RETRYABLE_TX: Address = address!("0x000000000000000000000000000000000000006E");
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::hex;
    use alloy_sol_types::{SolCall, SolEvent};

    #[test]
    fn test_selectors() {
        assert_eq!(createRetryableTicketCall::SELECTOR, hex!("679b6ded"));
        assert_eq!(
            submitRetryableCall::SIGNATURE,
            "submitRetryable(bytes32,uint256,uint256,uint256,uint256,uint64,uint256,address,address,address,bytes)"
        );
    }

    #[test]
    fn test_event_signatures() {
        assert_eq!(TicketCreated::SIGNATURE, "TicketCreated(bytes32)");
        assert_eq!(GatewaySet::SIGNATURE, "GatewaySet(address,address)");
        assert_eq!(
            WithdrawalInitiated::SIGNATURE,
            "WithdrawalInitiated(address,address,address,uint256,uint256,uint256)"
        );
        assert_eq!(
            DepositFinalized::SIGNATURE,
            "DepositFinalized(address,address,address,uint256)"
        );
        assert_ne!(L2ToL1Transaction::SIGNATURE_HASH, L2ToL1Tx::SIGNATURE_HASH);
    }
}
