//! Recovery of a trailing dynamic `bytes` argument.

use crate::{DecodeError, DecodedTuple};
use alloy_primitives::{Bytes, U256};

/// Recovers the dynamic payload that follows a decoded fixed-width prefix.
///
/// The payload begins where a canonical re-encoding of `prefix` ends and spans exactly
/// `data_length` bytes of `raw`, which must be the same buffer `prefix` was decoded from (selector
/// already stripped). ABI padding after the payload is not returned.
///
/// Fails if the re-encoded prefix differs from the head of `raw`, or if the payload would extend
/// past the end of `raw`. A payload is never truncated or padded to fit.
pub fn extract_dynamic_segment(
    prefix: &DecodedTuple,
    raw: &[u8],
    data_length: U256,
) -> Result<Bytes, DecodeError> {
    let encoded = prefix.abi_encode();
    let slice_start = encoded.len();
    if raw.get(..slice_start) != Some(encoded.as_slice()) {
        return Err(DecodeError::ReencodingMismatch { prefix_len: slice_start });
    }

    let length: usize =
        data_length.try_into().map_err(|_| DecodeError::LengthOverflow(data_length))?;
    let end = slice_start.checked_add(length).filter(|end| *end <= raw.len()).ok_or(
        DecodeError::SegmentOutOfBounds { start: slice_start, length, available: raw.len() },
    )?;

    tracing::debug!(target: "abi", slice_start, length, "Extracting dynamic segment");

    Ok(Bytes::copy_from_slice(&raw[slice_start..end]))
}
