//! Tuple type signatures.

use crate::DecodeError;
use alloc::{string::ToString, vec::Vec};
use core::{fmt, str::FromStr};

/// The type of a single fixed-width ABI slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotType {
    /// `address`: the lower 20 bytes of the slot.
    Address,
    /// `uintN`: a big-endian unsigned integer of `N` bits.
    Uint(u16),
    /// `bytesN`: `N` left-aligned bytes.
    FixedBytes(u8),
    /// `bool`: 0 or 1.
    Bool,
}

impl FromStr for SlotType {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unsupported = || DecodeError::UnsupportedType(s.to_string());
        match s {
            "address" => return Ok(Self::Address),
            "bool" => return Ok(Self::Bool),
            "uint" => return Ok(Self::Uint(256)),
            _ => {}
        }

        if let Some(bits) = s.strip_prefix("uint") {
            let bits: u16 = bits.parse().map_err(|_| unsupported())?;
            if bits == 0 || bits > 256 || bits % 8 != 0 {
                return Err(unsupported());
            }
            return Ok(Self::Uint(bits));
        }

        if let Some(len) = s.strip_prefix("bytes") {
            let len: u8 = len.parse().map_err(|_| unsupported())?;
            if len == 0 || len > 32 {
                return Err(unsupported());
            }
            return Ok(Self::FixedBytes(len));
        }

        Err(unsupported())
    }
}

impl fmt::Display for SlotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Address => f.write_str("address"),
            Self::Uint(bits) => write!(f, "uint{bits}"),
            Self::FixedBytes(len) => write!(f, "bytes{len}"),
            Self::Bool => f.write_str("bool"),
        }
    }
}

/// A parsed tuple signature such as `(address,uint256,bytes32)`.
///
/// Only fixed-width slot types are decoded. A trailing `bytes` element is accepted as a marker
/// for a dynamic tail and contributes no slot of its own.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TupleSignature {
    slots: Vec<SlotType>,
    dynamic_tail: bool,
}

impl TupleSignature {
    /// Returns the fixed-width slot types, in order.
    pub fn slots(&self) -> &[SlotType] {
        &self.slots
    }

    /// Returns the number of fixed-width slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the signature declares no fixed-width slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns `true` if the signature ends in a dynamic `bytes` marker.
    pub const fn has_dynamic_tail(&self) -> bool {
        self.dynamic_tail
    }

    /// Returns the number of bytes the fixed-width slots occupy.
    pub fn fixed_size(&self) -> usize {
        self.slots.len() * crate::WORD_SIZE
    }
}

impl FromStr for TupleSignature {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .trim()
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| DecodeError::InvalidSignature(s.to_string()))?;

        let mut signature = Self::default();
        if inner.trim().is_empty() {
            return Ok(signature);
        }

        for ty in inner.split(',').map(str::trim) {
            if signature.dynamic_tail {
                return Err(DecodeError::MisplacedDynamicMarker);
            }
            if ty.is_empty() {
                return Err(DecodeError::InvalidSignature(s.to_string()));
            }
            if ty == "bytes" {
                signature.dynamic_tail = true;
                continue;
            }
            signature.slots.push(ty.parse()?);
        }

        Ok(signature)
    }
}

impl fmt::Display for TupleSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{slot}")?;
        }
        if self.dynamic_tail {
            if !self.slots.is_empty() {
                f.write_str(",")?;
            }
            f.write_str("bytes")?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use rstest::rstest;

    #[rstest]
    #[case::address("address", SlotType::Address)]
    #[case::bool("bool", SlotType::Bool)]
    #[case::uint_alias("uint", SlotType::Uint(256))]
    #[case::uint64("uint64", SlotType::Uint(64))]
    #[case::uint8("uint8", SlotType::Uint(8))]
    #[case::bytes32("bytes32", SlotType::FixedBytes(32))]
    #[case::bytes4("bytes4", SlotType::FixedBytes(4))]
    fn test_parse_slot_type(#[case] input: &str, #[case] expected: SlotType) {
        assert_eq!(input.parse::<SlotType>().unwrap(), expected);
    }

    #[rstest]
    #[case::uint_zero("uint0")]
    #[case::uint_unaligned("uint7")]
    #[case::uint_too_wide("uint264")]
    #[case::bytes_zero("bytes0")]
    #[case::bytes_too_wide("bytes33")]
    #[case::signed("int256")]
    #[case::string("string")]
    #[case::array("uint256[]")]
    fn test_parse_slot_type_unsupported(#[case] input: &str) {
        assert_eq!(
            input.parse::<SlotType>().unwrap_err(),
            DecodeError::UnsupportedType(String::from(input))
        );
    }

    #[test]
    fn test_parse_signature() {
        let sig: TupleSignature = "(address, uint256,uint64 ,bytes32,bool)".parse().unwrap();
        assert_eq!(
            sig.slots(),
            &[
                SlotType::Address,
                SlotType::Uint(256),
                SlotType::Uint(64),
                SlotType::FixedBytes(32),
                SlotType::Bool
            ]
        );
        assert!(!sig.has_dynamic_tail());
        assert_eq!(sig.fixed_size(), 160);
    }

    #[test]
    fn test_parse_signature_dynamic_tail() {
        let sig: TupleSignature = "(address,uint256,bytes)".parse().unwrap();
        assert_eq!(sig.len(), 2);
        assert!(sig.has_dynamic_tail());
        assert_eq!(sig.to_string(), "(address,uint256,bytes)");
    }

    #[test]
    fn test_parse_signature_misplaced_dynamic_marker() {
        let err = "(bytes,uint256)".parse::<TupleSignature>().unwrap_err();
        assert_eq!(err, DecodeError::MisplacedDynamicMarker);
    }

    #[rstest]
    #[case::no_parens("address,uint256")]
    #[case::unbalanced("(address,uint256")]
    #[case::empty_element("(address,,uint256)")]
    fn test_parse_signature_malformed(#[case] input: &str) {
        assert!(matches!(
            input.parse::<TupleSignature>().unwrap_err(),
            DecodeError::InvalidSignature(_)
        ));
    }

    #[test]
    fn test_parse_empty_signature() {
        let sig: TupleSignature = "()".parse().unwrap();
        assert!(sig.is_empty());
        assert_eq!(sig.fixed_size(), 0);
    }
}
