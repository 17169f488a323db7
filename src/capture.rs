//! Raw serial capture reader for telemetry replay.
//!
//! A capture is just the byte stream as it came off the port: frames,
//! partial frames, and whatever garbage the line picked up, in arrival
//! order. The reader loads the file into memory and serves it back in
//! chunks so a capture replays through the exact same scanner path as live
//! traffic, including all of its corruption.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::{Result, TelemetryError};

/// In-memory reader over one raw capture file.
#[derive(Debug)]
pub struct CaptureReader {
    data: Vec<u8>,
    position: usize,
    path: PathBuf,
}

impl CaptureReader {
    /// Open a capture file for reading.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(&path)
            .map_err(|e| TelemetryError::file_error(path.as_ref().to_path_buf(), e))?;

        let mut data = Vec::new();
        file.read_to_end(&mut data)
            .map_err(|e| TelemetryError::file_error(path.as_ref().to_path_buf(), e))?;

        info!("Opened capture file: {} ({} bytes)", path.as_ref().display(), data.len());
        Ok(Self { data, position: 0, path: path.as_ref().to_path_buf() })
    }

    /// Create a reader over in-memory bytes (for testing).
    pub fn from_bytes(data: Vec<u8>) -> Self {
        Self { data, position: 0, path: PathBuf::from("<memory>") }
    }

    /// Total capture size in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the capture holds no bytes at all.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Current read position in bytes.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Bytes left to serve.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    /// The file path this reader was opened from.
    pub fn file_path(&self) -> &Path {
        &self.path
    }

    /// Rewind to the start of the capture.
    pub fn rewind(&mut self) {
        self.position = 0;
    }

    /// Serve the next chunk of at most `max_len` bytes, or `None` at end of
    /// capture. The final chunk may be shorter; chunk boundaries carry no
    /// meaning and never align with frame boundaries by design.
    pub fn read_chunk(&mut self, max_len: usize) -> Option<&[u8]> {
        if self.position >= self.data.len() || max_len == 0 {
            return None;
        }
        let end = (self.position + max_len).min(self.data.len());
        let chunk = &self.data[self.position..end];
        self.position = end;
        Some(chunk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Context, Result};
    use std::io::Write;

    #[test]
    fn serves_chunks_until_exhausted() {
        let mut reader = CaptureReader::from_bytes((0u8..100).collect());

        let mut served = Vec::new();
        while let Some(chunk) = reader.read_chunk(33) {
            assert!(chunk.len() <= 33);
            served.extend_from_slice(chunk);
        }

        assert_eq!(served, (0u8..100).collect::<Vec<_>>());
        assert_eq!(reader.remaining(), 0);
        assert!(reader.read_chunk(33).is_none());
    }

    #[test]
    fn rewind_replays_from_the_start() {
        let mut reader = CaptureReader::from_bytes(vec![1, 2, 3, 4]);
        assert_eq!(reader.read_chunk(4), Some(&[1, 2, 3, 4][..]));
        reader.rewind();
        assert_eq!(reader.position(), 0);
        assert_eq!(reader.read_chunk(2), Some(&[1, 2][..]));
    }

    #[test]
    fn zero_len_request_serves_nothing() {
        let mut reader = CaptureReader::from_bytes(vec![1, 2, 3]);
        assert!(reader.read_chunk(0).is_none());
        assert_eq!(reader.remaining(), 3);
    }

    #[test]
    fn opens_capture_from_disk() -> Result<()> {
        let dir = tempfile::tempdir().context("Creating temp dir")?;
        let path = dir.path().join("session.raw");
        let payload = vec![0x5A, 0xA5, 0x48, 0x02, 0xFF];
        File::create(&path)
            .and_then(|mut f| f.write_all(&payload))
            .context("Writing capture fixture")?;

        let mut reader = CaptureReader::open(&path)?;
        assert_eq!(reader.len(), payload.len());
        assert_eq!(reader.file_path(), path.as_path());
        assert_eq!(reader.read_chunk(16), Some(payload.as_slice()));
        Ok(())
    }

    #[test]
    fn reader_is_debuggable() {
        let reader = CaptureReader::from_bytes(vec![1, 2]);
        assert!(format!("{reader:?}").contains("CaptureReader"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = CaptureReader::open("/nonexistent/session.raw").unwrap_err();
        assert!(matches!(err, TelemetryError::File { .. }));
        assert!(err.to_string().contains("/nonexistent/session.raw"));
    }
}
