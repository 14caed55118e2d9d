//! Decoding of raw, ABI-encoded call data.
//!
//! Call data carrying a trailing dynamic `bytes` argument is decoded in two steps:
//!
//! - [`decode_fixed_tuple`] decodes every fixed-width slot of a [`TupleSignature`], including the
//!   offset and length words that describe the dynamic argument.
//! - [`extract_dynamic_segment`] recovers the dynamic payload itself. The payload starts where a
//!   canonical re-encoding of the fixed prefix ends, so its position can be computed without
//!   walking the tail.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(any(feature = "std", test)), no_std)]

extern crate alloc;

mod errors;
pub use errors::DecodeError;

mod signature;
pub use signature::{SlotType, TupleSignature};

mod decode;
pub use decode::{DecodedTuple, SlotValue, WORD_SIZE, decode_fixed_tuple};

mod segment;
pub use segment::extract_dynamic_segment;
