//! Type-safe Rust library for INS/gyrocompass serial telemetry.
//!
//! Binnacle recovers fixed 78-byte navigation frames from an unbounded,
//! possibly corrupted serial byte stream and decodes them into physical
//! units.
//!
//! # Features
//!
//! - **Resynchronization**: frame lock is re-acquired within one frame
//!   length of any stream corruption, with resync activity surfaced as a
//!   health signal
//! - **Type Safety**: one fixed-shape [`TelemetryRecord`] where every wire
//!   field is always present, no string-keyed lookups
//! - **Wire-exact encoder**: synthetic frames byte-identical to the
//!   deployed generator, for round-trip testing and mock traffic
//! - **Transport-agnostic**: any byte-chunk source plugs in via
//!   [`ChunkSource`]; chunk boundaries never need to align with frames
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use binnacle::{Binnacle, SyntheticConfig};
//!
//! #[tokio::main]
//! async fn main() -> binnacle::Result<()> {
//!     let mut connection = Binnacle::synthetic(SyntheticConfig::default());
//!
//!     while let Some(event) = connection.next_event().await {
//!         match event {
//!             Ok(record) => println!("{} hdg {:.3}°", record.time_ref, record.heading),
//!             Err(e) => eprintln!("resync: {e}"),
//!         }
//!     }
//!     Ok(())
//! }
//! ```

// Wire format and decoding core
mod error;
pub mod scanner;
pub mod types;
pub mod wire;

// Stream-based session architecture
pub mod capture;
pub mod connection;
pub mod driver;
pub mod provider;
pub mod providers;

// Core exports
pub use error::{Result, TelemetryError};
pub use scanner::{FrameScanner, ScannerConfig};
pub use types::{LinkHealth, TelemetryRecord, TimeOfDay};
pub use wire::{DecodeError, FRAME_LEN, FrameInput, FramingFault, RawFrame};

// Session exports
pub use capture::CaptureReader;
pub use connection::StreamConnection;
pub use driver::StreamEvent;
pub use provider::ChunkSource;
pub use providers::{ReplayProvider, SyntheticConfig, SyntheticProvider};

use std::path::Path;

/// Unified entry point for telemetry stream sessions.
///
/// # Examples
///
/// ## Mock traffic (encoder-driven)
/// ```rust,no_run
/// use binnacle::{Binnacle, SyntheticConfig};
///
/// # #[tokio::main]
/// # async fn main() -> binnacle::Result<()> {
/// let connection = Binnacle::synthetic(SyntheticConfig::default());
/// # Ok(())
/// # }
/// ```
///
/// ## Capture replay
/// ```rust,no_run
/// use binnacle::Binnacle;
///
/// # #[tokio::main]
/// # async fn main() -> binnacle::Result<()> {
/// let connection = Binnacle::replay("session.raw")?;
/// # Ok(())
/// # }
/// ```
pub struct Binnacle;

impl Binnacle {
    /// Start a session over the synthetic mock transport.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn synthetic(config: SyntheticConfig) -> StreamConnection {
        StreamConnection::spawn(SyntheticProvider::new(config), ScannerConfig::default())
    }

    /// Start a session replaying a recorded raw capture file.
    ///
    /// The capture is the byte stream exactly as it came off the port, so
    /// any corruption it holds replays through the same resync path as
    /// live traffic. Must be called from within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns an error if the capture file does not exist or is not
    /// readable.
    pub fn replay<P: AsRef<Path>>(path: P) -> Result<StreamConnection> {
        let provider = ReplayProvider::new(path)?;
        Ok(StreamConnection::spawn(provider, ScannerConfig::default()))
    }

    /// Start a session over any custom chunk source, with explicit scanner
    /// configuration (for example checksum verification).
    pub fn from_source<S: ChunkSource>(source: S, config: ScannerConfig) -> StreamConnection {
        StreamConnection::spawn(source, config)
    }
}
