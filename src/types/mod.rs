//! Core types for decoded telemetry.
//!
//! The source device's reference decoder represents a frame as a free-form
//! string-keyed map. Here that is re-architected as the fixed-shape
//! [`TelemetryRecord`] so every field the wire format defines is present at
//! compile time, with no "missing key" state for consumers to handle.

mod health;
mod record;

pub use health::LinkHealth;
pub use record::{TelemetryRecord, TimeOfDay};
