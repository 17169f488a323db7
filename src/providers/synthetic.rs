//! Synthetic mock transport driven by the frame encoder.
//!
//! Stands in for the real gyro unit: emits randomly generated, wire-exact
//! frames at a fixed cadence, optionally sliced into small chunks so the
//! scanner's reassembly path gets exercised the way a real serial port
//! would exercise it.

use std::collections::VecDeque;

use bytes::Bytes;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::time::{Duration, Interval, MissedTickBehavior, interval};
use tracing::{debug, trace};

use crate::provider::ChunkSource;
use crate::wire::encode_random;
use crate::wire::layout::FRAME_LEN;
use crate::Result;

/// Configuration for the synthetic source.
#[derive(Debug, Clone, Copy)]
pub struct SyntheticConfig {
    /// Number of frames to emit before ending the stream; `None` is
    /// endless.
    pub frames: Option<usize>,
    /// Frame cadence in Hz. The reference generator emits at 1 Hz.
    pub cadence_hz: f64,
    /// Maximum chunk size in bytes. A full frame fits one chunk at the
    /// default; smaller values split frames across chunks.
    pub chunk_len: usize,
    /// Seed for the frame value generator; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self { frames: None, cadence_hz: 1.0, chunk_len: FRAME_LEN, seed: None }
    }
}

/// Mock transport emitting encoder-generated frames.
pub struct SyntheticProvider {
    rng: StdRng,
    interval: Interval,
    config: SyntheticConfig,
    emitted: usize,
    pending: VecDeque<Bytes>,
}

impl SyntheticProvider {
    /// Create a synthetic source from configuration.
    pub fn new(config: SyntheticConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let cadence = config.cadence_hz.max(0.001);
        let mut interval = interval(Duration::from_secs_f64(1.0 / cadence));
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        debug!(
            "Synthetic source: {:?} frames at {}Hz, chunk_len={}",
            config.frames, config.cadence_hz, config.chunk_len
        );

        Self { rng, interval, config, emitted: 0, pending: VecDeque::new() }
    }
}

#[async_trait::async_trait]
impl ChunkSource for SyntheticProvider {
    async fn next_chunk(&mut self) -> Result<Option<Bytes>> {
        // Drain any remaining slices of the current frame first.
        if let Some(chunk) = self.pending.pop_front() {
            return Ok(Some(chunk));
        }

        if self.config.frames.is_some_and(|limit| self.emitted >= limit) {
            debug!("Synthetic source exhausted after {} frames", self.emitted);
            return Ok(None);
        }

        self.interval.tick().await;

        let frame = encode_random(&mut self.rng);
        self.emitted += 1;
        trace!("Synthetic frame {} generated", self.emitted);

        let chunk_len = self.config.chunk_len.max(1);
        for piece in frame.chunks(chunk_len) {
            self.pending.push_back(Bytes::copy_from_slice(piece));
        }

        Ok(self.pending.pop_front())
    }

    fn cadence_hz(&self) -> f64 {
        self.config.cadence_hz
    }
}
