//! Chunk source trait for byte-stream transports.

use bytes::Bytes;

use crate::Result;

/// Trait for byte-chunk sources feeding the scanner.
///
/// Sources abstract over where the serial bytes come from (a mock
/// generator, a recorded capture, an embedding host's real port) and
/// handle their own pacing internally. Chunks arrive in order and may be
/// of any non-zero length; nothing guarantees alignment with frame
/// boundaries.
#[async_trait::async_trait]
pub trait ChunkSource: Send + 'static {
    /// Get the next chunk of transport bytes.
    ///
    /// Returns:
    /// - `Ok(Some(chunk))` - more bytes arrived
    /// - `Ok(None)` - stream ended (normal termination)
    /// - `Err(e)` - the transport failed; fatal to this session
    async fn next_chunk(&mut self) -> Result<Option<Bytes>>;

    /// Nominal frame cadence of this source in Hz, for logging and pacing
    /// diagnostics (the gyro unit emits at 1 Hz).
    fn cadence_hz(&self) -> f64;
}
