//! Fixed-width tuple decoding.

use crate::{DecodeError, SlotType, TupleSignature};
use alloc::vec::Vec;
use alloy_primitives::{Address, B256, U256};

/// The size of a single ABI word, in bytes.
pub const WORD_SIZE: usize = 32;

/// A decoded fixed-width slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotValue {
    /// A decoded `address`.
    Address(Address),
    /// A decoded `uintN`, already checked against its declared width.
    Uint(U256),
    /// A decoded `bytesN`. Bytes past the declared length are zeroed.
    FixedBytes(B256),
    /// A decoded `bool`.
    Bool(bool),
}

impl SlotValue {
    /// Returns the canonical ABI word for this value.
    pub fn to_word(&self) -> B256 {
        match self {
            Self::Address(address) => address.into_word(),
            Self::Uint(value) => B256::new(value.to_be_bytes::<WORD_SIZE>()),
            Self::FixedBytes(word) => *word,
            Self::Bool(value) => B256::with_last_byte(*value as u8),
        }
    }
}

impl SlotType {
    /// Decodes a single 32-byte word as this slot type.
    fn decode_word(&self, index: usize, word: B256) -> Result<SlotValue, DecodeError> {
        match *self {
            Self::Address => Ok(SlotValue::Address(Address::from_word(word))),
            Self::Uint(bits) => {
                let value = U256::from_be_bytes(word.0);
                if value.bit_len() > bits as usize {
                    return Err(DecodeError::ValueOutOfRange { index, bits });
                }
                Ok(SlotValue::Uint(value))
            }
            Self::FixedBytes(len) => {
                let mut masked = B256::ZERO;
                masked.0[..len as usize].copy_from_slice(&word.0[..len as usize]);
                Ok(SlotValue::FixedBytes(masked))
            }
            Self::Bool => match U256::from_be_bytes(word.0) {
                value if value == U256::ZERO => Ok(SlotValue::Bool(false)),
                value if value == U256::from(1) => Ok(SlotValue::Bool(true)),
                _ => Err(DecodeError::InvalidBool { index }),
            },
        }
    }
}

/// The decoded fixed-width slots of a tuple, in signature order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecodedTuple {
    values: Vec<SlotValue>,
}

impl DecodedTuple {
    /// Returns the decoded values.
    pub fn values(&self) -> &[SlotValue] {
        &self.values
    }

    /// Returns the number of decoded slots.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no slots were decoded.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the value at `index`.
    pub fn get(&self, index: usize) -> Result<&SlotValue, DecodeError> {
        self.values.get(index).ok_or(DecodeError::SlotOutOfBounds { index, len: self.values.len() })
    }

    /// Returns the `address` at `index`.
    pub fn address(&self, index: usize) -> Result<Address, DecodeError> {
        match self.get(index)? {
            SlotValue::Address(address) => Ok(*address),
            _ => Err(DecodeError::UnexpectedType { index, expected: "address" }),
        }
    }

    /// Returns the unsigned integer at `index`.
    pub fn uint(&self, index: usize) -> Result<U256, DecodeError> {
        match self.get(index)? {
            SlotValue::Uint(value) => Ok(*value),
            _ => Err(DecodeError::UnexpectedType { index, expected: "uint" }),
        }
    }

    /// Returns the fixed bytes at `index`, right-padded to a full word.
    pub fn fixed_bytes(&self, index: usize) -> Result<B256, DecodeError> {
        match self.get(index)? {
            SlotValue::FixedBytes(word) => Ok(*word),
            _ => Err(DecodeError::UnexpectedType { index, expected: "fixed bytes" }),
        }
    }

    /// Returns the `bool` at `index`.
    pub fn bool(&self, index: usize) -> Result<bool, DecodeError> {
        match self.get(index)? {
            SlotValue::Bool(value) => Ok(*value),
            _ => Err(DecodeError::UnexpectedType { index, expected: "bool" }),
        }
    }

    /// Canonically re-encodes the decoded slots.
    pub fn abi_encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.values.len() * WORD_SIZE);
        for value in &self.values {
            out.extend_from_slice(value.to_word().as_slice());
        }
        out
    }
}

/// Decodes every fixed-width slot of `signature` from the head of `data`.
///
/// Trailing bytes past the fixed-width slots are ignored. The dynamic payload of a signature
/// ending in `bytes` is never materialized here; see [`crate::extract_dynamic_segment`].
pub fn decode_fixed_tuple(
    signature: &TupleSignature,
    data: &[u8],
) -> Result<DecodedTuple, DecodeError> {
    let required = signature.fixed_size();
    if data.len() < required {
        return Err(DecodeError::InsufficientData { required, available: data.len() });
    }

    let values = signature
        .slots()
        .iter()
        .zip(data.chunks_exact(WORD_SIZE))
        .enumerate()
        .map(|(index, (slot, word))| slot.decode_word(index, B256::from_slice(word)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(DecodedTuple { values })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, b256};
    use rstest::rstest;

    fn word(value: u64) -> [u8; 32] {
        U256::from(value).to_be_bytes::<32>()
    }

    #[test]
    fn test_decode_fixed_tuple() {
        let sig: TupleSignature = "(address,uint256,uint64,bytes4,bool)".parse().unwrap();
        let to = address!("0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");

        let mut data = Vec::new();
        data.extend_from_slice(to.into_word().as_slice());
        data.extend_from_slice(&word(1000));
        data.extend_from_slice(&word(u64::MAX));
        data.extend_from_slice(
            b256!("0xdeadbeef00000000000000000000000000000000000000000000000000000000").as_slice(),
        );
        data.extend_from_slice(&word(1));

        let tuple = decode_fixed_tuple(&sig, &data).unwrap();
        assert_eq!(tuple.len(), 5);
        assert_eq!(tuple.address(0).unwrap(), to);
        assert_eq!(tuple.uint(1).unwrap(), U256::from(1000));
        assert_eq!(tuple.uint(2).unwrap(), U256::from(u64::MAX));
        assert_eq!(tuple.fixed_bytes(3).unwrap().0[..4], [0xde, 0xad, 0xbe, 0xef]);
        assert!(tuple.bool(4).unwrap());
        assert_eq!(tuple.abi_encode(), data);
    }

    #[test]
    fn test_decode_ignores_trailing_bytes() {
        let sig: TupleSignature = "(uint256)".parse().unwrap();
        let mut data = word(7).to_vec();
        data.extend_from_slice(&[0xff; 45]);

        let tuple = decode_fixed_tuple(&sig, &data).unwrap();
        assert_eq!(tuple.values(), &[SlotValue::Uint(U256::from(7))]);
    }

    #[rstest]
    #[case::empty(0)]
    #[case::three_bytes(3)]
    #[case::one_word_short(32)]
    fn test_decode_insufficient_data(#[case] len: usize) {
        let sig: TupleSignature = "(address,uint256)".parse().unwrap();
        let err = decode_fixed_tuple(&sig, &vec![0u8; len]).unwrap_err();
        assert_eq!(err, DecodeError::InsufficientData { required: 64, available: len });
    }

    #[test]
    fn test_decode_uint_width_checked() {
        let sig: TupleSignature = "(uint64)".parse().unwrap();
        let data = (U256::from(u64::MAX) + U256::from(1)).to_be_bytes::<32>();
        assert_eq!(
            decode_fixed_tuple(&sig, &data).unwrap_err(),
            DecodeError::ValueOutOfRange { index: 0, bits: 64 }
        );
    }

    #[test]
    fn test_decode_invalid_bool() {
        let sig: TupleSignature = "(bool)".parse().unwrap();
        assert_eq!(
            decode_fixed_tuple(&sig, &word(2)).unwrap_err(),
            DecodeError::InvalidBool { index: 0 }
        );
    }

    #[test]
    fn test_accessor_type_mismatch() {
        let sig: TupleSignature = "(uint256)".parse().unwrap();
        let tuple = decode_fixed_tuple(&sig, &word(1)).unwrap();
        assert_eq!(
            tuple.address(0).unwrap_err(),
            DecodeError::UnexpectedType { index: 0, expected: "address" }
        );
        assert_eq!(tuple.uint(1).unwrap_err(), DecodeError::SlotOutOfBounds { index: 1, len: 1 });
    }

    #[test]
    fn test_address_reencoding_drops_dirty_bits() {
        let sig: TupleSignature = "(address)".parse().unwrap();
        let data = [0x11u8; 32];
        let tuple = decode_fixed_tuple(&sig, &data).unwrap();
        assert_eq!(tuple.address(0).unwrap(), Address::repeat_byte(0x11));
        assert_ne!(tuple.abi_encode(), data);
    }
}
