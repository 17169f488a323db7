//! The 78-byte gyro telemetry wire format.
//!
//! Leaf-first: [`layout`] holds the fixed byte ranges, [`codec`] the
//! big-endian field codec, [`frame`] the validator and [`RawFrame`]
//! invariant type, [`decode`] the packet decoder and [`encode`] the
//! synthetic frame encoder. Everything in this module is pure and free of
//! I/O; the streaming side lives in [`crate::scanner`] and above.

pub mod codec;
pub mod decode;
pub mod encode;
pub mod frame;
pub mod layout;

pub use decode::decode;
pub use encode::{FrameInput, encode, encode_random};
pub use frame::{DecodeError, FramingFault, RawFrame, validate};
pub use layout::FRAME_LEN;
