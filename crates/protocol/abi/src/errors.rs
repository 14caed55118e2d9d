//! Error types for call data decoding.

use alloc::string::String;
use alloy_primitives::U256;
use thiserror::Error;

/// An error encountered while decoding raw call data.
///
/// A decode error is terminal for the input that produced it: nothing is ever partially decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The type signature is not a parenthesised, comma separated list of types.
    #[error("Malformed tuple signature: {0}")]
    InvalidSignature(String),
    /// The type signature contains a type the decoder cannot handle.
    #[error("Unsupported slot type: {0}")]
    UnsupportedType(String),
    /// The dynamic `bytes` marker was not the last element of the signature.
    #[error("Dynamic bytes marker must be the last element of the signature")]
    MisplacedDynamicMarker,
    /// The buffer is shorter than the fixed-width part of the signature.
    #[error("Insufficient data: expected at least {required} bytes, got {available}")]
    InsufficientData {
        /// The number of bytes the fixed-width slots occupy.
        required: usize,
        /// The number of bytes available.
        available: usize,
    },
    /// An unsigned integer slot holds a value wider than its declared width.
    #[error("Slot {index} overflows uint{bits}")]
    ValueOutOfRange {
        /// The slot index.
        index: usize,
        /// The declared width in bits.
        bits: u16,
    },
    /// A `bool` slot holds something other than 0 or 1.
    #[error("Slot {index} is not a valid bool")]
    InvalidBool {
        /// The slot index.
        index: usize,
    },
    /// A slot was accessed as a type other than the one it was decoded as.
    #[error("Slot {index} is not of type {expected}")]
    UnexpectedType {
        /// The slot index.
        index: usize,
        /// The requested type.
        expected: &'static str,
    },
    /// A slot index past the end of the decoded tuple was requested.
    #[error("Slot {index} out of bounds for tuple of {len} slots")]
    SlotOutOfBounds {
        /// The requested slot index.
        index: usize,
        /// The number of decoded slots.
        len: usize,
    },
    /// The declared dynamic length does not fit the address space.
    #[error("Dynamic length {0} does not fit in usize")]
    LengthOverflow(U256),
    /// The dynamic segment extends past the end of the buffer.
    #[error("Dynamic segment [{start}, {start} + {length}) exceeds buffer of {available} bytes")]
    SegmentOutOfBounds {
        /// Start of the segment.
        start: usize,
        /// Declared segment length.
        length: usize,
        /// Length of the buffer.
        available: usize,
    },
    /// The canonical re-encoding of the fixed prefix does not match the raw bytes.
    #[error("Re-encoded prefix of {prefix_len} bytes does not match the input")]
    ReencodingMismatch {
        /// Length of the re-encoded prefix.
        prefix_len: usize,
    },
    /// The call data is too short to carry a function selector.
    #[error("Call data of {0} bytes is missing a function selector")]
    MissingSelector(usize),
    /// The offset word of the dynamic argument is not the head size of the signature.
    #[error("Unexpected dynamic data offset: expected {expected}, got {found}")]
    UnexpectedDataOffset {
        /// The head size of the signature.
        expected: usize,
        /// The decoded offset word.
        found: U256,
    },
}
