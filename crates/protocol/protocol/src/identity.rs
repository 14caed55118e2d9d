//! Cross-era identity of L2 to L1 messages.
//!
//! Classic and nitro number their L2 to L1 messages independently, both starting from zero. A
//! message is identified by its era and counter; only when serialized is the pair packed into a
//! single integer, with bit 63 tagging classic counters. Gateways emit the raw counter as their
//! withdrawal id, so correlating a withdrawal with its message needs the era of its block.
//!
//! Disjointness relies on neither counter exceeding 63 bits. This is not checked.

use crate::ProtocolEra;
use alloc::string::{String, ToString};
use alloy_primitives::U256;
use core::fmt;

/// The identity of an L2 to L1 message across protocol eras.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct L2ToL1MessageId {
    era: ProtocolEra,
    counter: U256,
}

impl L2ToL1MessageId {
    /// The bit that tags a packed identifier as classic.
    pub const CLASSIC_TAG: U256 = U256::from_limbs([1 << 63, 0, 0, 0]);

    /// Creates the identity of the message numbered `counter` in `era`.
    pub const fn new(era: ProtocolEra, counter: U256) -> Self {
        Self { era, counter }
    }

    /// The identity of a classic message, from its `uniqueId`.
    pub const fn classic(unique_id: U256) -> Self {
        Self::new(ProtocolEra::Classic, unique_id)
    }

    /// The identity of a nitro message, from its position in the outbox merkle tree.
    pub const fn nitro(position: U256) -> Self {
        Self::new(ProtocolEra::Nitro, position)
    }

    /// Reverses [`Self::packed`].
    pub fn from_packed(packed: U256) -> Self {
        if packed.bit(63) {
            Self::classic(packed ^ Self::CLASSIC_TAG)
        } else {
            Self::nitro(packed)
        }
    }

    /// Returns the era.
    pub const fn era(&self) -> ProtocolEra {
        self.era
    }

    /// Returns the raw on-chain counter.
    pub const fn counter(&self) -> U256 {
        self.counter
    }

    /// Packs the identity into a single integer.
    pub fn packed(&self) -> U256 {
        match self.era {
            ProtocolEra::Classic => self.counter | Self::CLASSIC_TAG,
            ProtocolEra::Nitro => self.counter,
        }
    }
}

impl fmt::Display for L2ToL1MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.packed())
    }
}

/// Allocates the entity identifier of the L2 to L1 message numbered `counter` in `era`.
pub fn allocate_message_id(era: ProtocolEra, counter: U256) -> String {
    L2ToL1MessageId::new(era, counter).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case::classic_five(ProtocolEra::Classic, 5, "0x8000000000000005")]
    #[case::nitro_five(ProtocolEra::Nitro, 5, "0x5")]
    #[case::classic_zero(ProtocolEra::Classic, 0, "0x8000000000000000")]
    #[case::nitro_zero(ProtocolEra::Nitro, 0, "0x0")]
    #[case::nitro_large(ProtocolEra::Nitro, 0xabcdef, "0xabcdef")]
    fn test_allocate_message_id(
        #[case] era: ProtocolEra,
        #[case] counter: u64,
        #[case] expected: &str,
    ) {
        assert_eq!(allocate_message_id(era, U256::from(counter)), expected);
    }

    #[test]
    fn test_classic_and_nitro_differ() {
        assert_ne!(
            allocate_message_id(ProtocolEra::Classic, U256::from(5)),
            allocate_message_id(ProtocolEra::Nitro, U256::from(5))
        );
        assert_eq!(
            L2ToL1MessageId::classic(U256::from(5)).packed(),
            (U256::from(1) << 63usize) | U256::from(5)
        );
    }

    #[test]
    fn test_from_packed_gateway_id() {
        let id = L2ToL1MessageId::from_packed(U256::from(0x8000_0000_0000_0005u64));
        assert_eq!(id, L2ToL1MessageId::classic(U256::from(5)));
        assert_eq!(id.era(), ProtocolEra::Classic);
        assert_eq!(id.counter(), U256::from(5));

        assert_eq!(
            L2ToL1MessageId::from_packed(U256::from(7)),
            L2ToL1MessageId::nitro(U256::from(7))
        );
    }

    proptest! {
        #[test]
        fn prop_eras_disjoint(nitro in 0u64..(1 << 63), classic in 0u64..(1 << 63)) {
            prop_assert_ne!(
                allocate_message_id(ProtocolEra::Nitro, U256::from(nitro)),
                allocate_message_id(ProtocolEra::Classic, U256::from(classic))
            );
        }

        #[test]
        fn prop_allocation_deterministic(counter in 0u64..(1 << 63), classic in any::<bool>()) {
            let era = if classic { ProtocolEra::Classic } else { ProtocolEra::Nitro };
            prop_assert_eq!(
                allocate_message_id(era, U256::from(counter)),
                allocate_message_id(era, U256::from(counter))
            );
        }

        #[test]
        fn prop_packed_roundtrip(counter in 0u64..(1 << 63), classic in any::<bool>()) {
            let era = if classic { ProtocolEra::Classic } else { ProtocolEra::Nitro };
            let id = L2ToL1MessageId::new(era, U256::from(counter));
            prop_assert_eq!(L2ToL1MessageId::from_packed(id.packed()), id);
        }
    }
}
