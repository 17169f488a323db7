//! Frame scanner: recovers frame boundaries from an unaligned byte stream.
//!
//! The scanner owns one growing byte buffer. Each `feed` appends a chunk and
//! then repeatedly tests the leading 78-byte window: a valid window is
//! decoded and consumed whole; anything else sheds exactly one leading byte
//! and the scan continues. The buffer therefore strictly shrinks from the
//! front on every iteration, so a finite buffer always drains below one
//! frame length and corruption costs at most 77 discarded bytes before the
//! next genuine header pair re-locks the stream.
//!
//! The buffer is a `BytesMut` advanced in place, so the per-byte resync step
//! is an O(1) pointer bump rather than a reallocation.
//!
//! A scanner instance is single-owner state: it must only ever be fed from
//! one call site at a time (the driver task, in this crate's pipeline).

use bytes::{Buf, BytesMut};
use tracing::trace;

use crate::types::TelemetryRecord;
use crate::wire::decode;
use crate::wire::frame::{DecodeError, FramingFault, checksum, framing_fault};
use crate::wire::layout::{CHECKSUM_POS, FRAME_LEN};

/// Scanner configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScannerConfig {
    /// Also verify the checksum byte at `[76]` when validating a window.
    ///
    /// Off by default, matching the source device's decoder, which only
    /// checks the framing markers. With this on, a checksum mismatch is an
    /// ordinary one-byte resync step, never a fatal error.
    pub verify_checksum: bool,
}

/// Streaming frame scanner and resynchronizer.
#[derive(Debug, Default)]
pub struct FrameScanner {
    buf: BytesMut,
    config: ScannerConfig,
    frames_decoded: u64,
    bytes_discarded: u64,
}

impl FrameScanner {
    /// Create a scanner with marker-only validation.
    pub fn new() -> Self {
        Self::with_config(ScannerConfig::default())
    }

    /// Create a scanner with explicit configuration.
    pub fn with_config(config: ScannerConfig) -> Self {
        Self { buf: BytesMut::new(), config, frames_decoded: 0, bytes_discarded: 0 }
    }

    /// Feed one chunk of transport bytes, producing zero or more events.
    ///
    /// Chunks may be of any non-zero length and never need to align with
    /// frame boundaries. Each rejected leading byte is reported as one
    /// [`DecodeError::InvalidFraming`] event so consumers can observe
    /// resync activity; each accepted window is reported as one decoded
    /// record. On return the buffer always holds fewer than 78 bytes.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<Result<TelemetryRecord, DecodeError>> {
        self.buf.extend_from_slice(chunk);

        let mut events = Vec::new();
        while self.buf.len() >= FRAME_LEN {
            let event = match self.leading_fault() {
                // The window already passed validation, so this decode is
                // infallible in practice; an Err here would still make
                // forward progress below.
                None => decode(&self.buf[..FRAME_LEN]),
                Some(fault) => Err(DecodeError::InvalidFraming(fault)),
            };

            match event {
                Ok(_) => {
                    // Frame fully consumed; the trailer byte is never
                    // re-examined as a candidate header.
                    self.buf.advance(FRAME_LEN);
                    self.frames_decoded += 1;
                }
                Err(_) => {
                    self.buf.advance(1);
                    self.bytes_discarded += 1;
                }
            }
            events.push(event);
        }

        trace!(
            buffered = self.buf.len(),
            emitted = events.len(),
            "scan pass complete"
        );
        events
    }

    fn leading_fault(&self) -> Option<FramingFault> {
        let window = &self.buf[..FRAME_LEN];
        framing_fault(window).or_else(|| {
            if self.config.verify_checksum && checksum(&window[..CHECKSUM_POS]) != window[CHECKSUM_POS]
            {
                Some(FramingFault::Checksum)
            } else {
                None
            }
        })
    }

    /// Bytes currently buffered (always < 78 between `feed` calls).
    pub fn buffered(&self) -> usize {
        self.buf.len()
    }

    /// Frames decoded over the scanner's lifetime.
    pub fn frames_decoded(&self) -> u64 {
        self.frames_decoded
    }

    /// Bytes discarded by resync steps over the scanner's lifetime.
    pub fn bytes_discarded(&self) -> u64 {
        self.bytes_discarded
    }
}
