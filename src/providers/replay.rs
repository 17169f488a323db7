//! Replay provider for raw serial captures.

use std::path::Path;

use bytes::Bytes;
use tokio::time::{Duration, Interval, MissedTickBehavior, interval};
use tracing::{debug, info};

use crate::capture::CaptureReader;
use crate::provider::ChunkSource;
use crate::wire::layout::FRAME_LEN;
use crate::Result;

/// Nominal frame cadence of the gyro unit.
const DEVICE_HZ: f64 = 1.0;

/// Replay provider that serves a recorded capture through the live path.
pub struct ReplayProvider {
    reader: CaptureReader,
    chunk_len: usize,
    speed: f64,
    interval: Interval,
}

impl ReplayProvider {
    /// Open a capture file for replay at real-time pacing.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = CaptureReader::open(path)?;
        info!(
            "Replaying capture: {} bytes (~{} frames)",
            reader.len(),
            reader.len() / FRAME_LEN
        );
        Ok(Self::from_reader(reader))
    }

    /// Build a replay provider over an existing reader (for testing).
    pub fn from_reader(reader: CaptureReader) -> Self {
        Self { reader, chunk_len: FRAME_LEN, speed: 1.0, interval: Self::pacing(FRAME_LEN, 1.0) }
    }

    /// Set the chunk size served per tick.
    pub fn with_chunk_len(mut self, chunk_len: usize) -> Self {
        self.chunk_len = chunk_len.max(1);
        self.reset_pacing();
        self
    }

    /// Set playback speed (1.0 = real time, clamped to 0.1–1000).
    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed.clamp(0.1, 1000.0);
        self.reset_pacing();
        debug!("Replay speed set to {}x", self.speed);
    }

    fn reset_pacing(&mut self) {
        self.interval = Self::pacing(self.chunk_len, self.speed);
    }

    /// Pace chunks so whole frames flow at the device cadence times the
    /// speed multiplier.
    fn pacing(chunk_len: usize, speed: f64) -> Interval {
        let chunks_per_frame = (FRAME_LEN as f64 / chunk_len as f64).max(1.0);
        let tick = 1.0 / (DEVICE_HZ * speed * chunks_per_frame);
        let mut interval = interval(Duration::from_secs_f64(tick));
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        interval
    }
}

#[async_trait::async_trait]
impl ChunkSource for ReplayProvider {
    async fn next_chunk(&mut self) -> Result<Option<Bytes>> {
        if self.reader.remaining() == 0 {
            debug!("Reached end of capture");
            return Ok(None);
        }

        self.interval.tick().await;

        Ok(self.reader.read_chunk(self.chunk_len).map(Bytes::copy_from_slice))
    }

    fn cadence_hz(&self) -> f64 {
        DEVICE_HZ * self.speed
    }
}
