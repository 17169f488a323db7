//! Frame validation and the `RawFrame` invariant type.
//!
//! The validator checks exactly what the source device's decoder checks:
//! window length, the `5A A5` header pair, and the `AA` trailer byte. The
//! declared length byte at `[2]` and the checksum byte at `[76]` are NOT
//! validated here; the checksum is an opt-in stricter layer (see
//! [`crate::scanner::ScannerConfig`]).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::layout::{CHECKSUM_POS, FRAME_LEN, HEADER, TRAILER, TRAILER_POS};

/// Decode-level error: recoverable, stream-local.
///
/// The scanner reports one of these per resynchronization step so consumers
/// can observe resync activity as a health signal. It never terminates the
/// stream.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid framing: {0}")]
    InvalidFraming(FramingFault),
}

/// The specific structural check a candidate window failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FramingFault {
    /// Window is not exactly 78 bytes.
    Length,
    /// First two bytes are not `5A A5`.
    Header,
    /// Last byte is not `AA`.
    Trailer,
    /// Checksum byte does not match (only with checksum verification on).
    Checksum,
}

impl std::fmt::Display for FramingFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FramingFault::Length => write!(f, "window is not {FRAME_LEN} bytes"),
            FramingFault::Header => write!(f, "missing 5A A5 header marker"),
            FramingFault::Trailer => write!(f, "missing AA trailer marker"),
            FramingFault::Checksum => write!(f, "checksum mismatch"),
        }
    }
}

/// Check a candidate window for structural validity.
///
/// Returns `None` when the window is a well-framed packet, or the first
/// failed check otherwise. Checks run in the order the bytes would be
/// scanned on the wire: length, header, trailer.
pub fn framing_fault(window: &[u8]) -> Option<FramingFault> {
    if window.len() != FRAME_LEN {
        Some(FramingFault::Length)
    } else if window[..2] != HEADER {
        Some(FramingFault::Header)
    } else if window[TRAILER_POS] != TRAILER {
        Some(FramingFault::Trailer)
    } else {
        None
    }
}

/// Structural validity predicate over one candidate window.
pub fn validate(window: &[u8]) -> bool {
    framing_fault(window).is_none()
}

/// Arithmetic checksum over a byte run: sum mod 256.
///
/// On the wire the checksum at `[76]` covers bytes `[0..76]`. The reference
/// generator computes it before its alphabetic-uppercasing pass, so frames
/// that pass mutate under the quirk may carry a stale checksum (see
/// [`crate::wire::encode`]).
pub fn checksum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |sum, &b| sum.wrapping_add(b))
}

/// An immutable, validated 78-byte telemetry frame.
///
/// Invariant: the header pair and trailer byte hold. There is no path that
/// constructs a `RawFrame` from an unvalidated window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFrame([u8; FRAME_LEN]);

impl RawFrame {
    /// Construct from a candidate window, validating framing.
    pub fn from_window(window: &[u8]) -> Result<Self, DecodeError> {
        match framing_fault(window) {
            None => {
                let mut bytes = [0u8; FRAME_LEN];
                bytes.copy_from_slice(window);
                Ok(Self(bytes))
            }
            Some(fault) => Err(DecodeError::InvalidFraming(fault)),
        }
    }

    /// The full frame bytes.
    pub fn as_bytes(&self) -> &[u8; FRAME_LEN] {
        &self.0
    }

    /// Whether the checksum byte matches the sum of the bytes it covers.
    pub fn checksum_ok(&self) -> bool {
        checksum(&self.0[..CHECKSUM_POS]) == self.0[CHECKSUM_POS]
    }
}

impl AsRef<[u8]> for RawFrame {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
