//! Decoded telemetry record types.

use serde::{Deserialize, Serialize};

/// Time of day derived from the frame's time-reference field.
///
/// The wire carries centiseconds since midnight; the split into
/// hours/minutes/seconds truncates fractional seconds, matching the source
/// device's display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOfDay {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl TimeOfDay {
    /// Split raw centiseconds-since-midnight into h/m/s.
    pub fn from_centiseconds(raw: u32) -> Self {
        let total_seconds = raw / 100;
        Self {
            hours: (total_seconds / 3600) as u8,
            minutes: ((total_seconds % 3600) / 60) as u8,
            seconds: (total_seconds % 60) as u8,
        }
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// One decoded telemetry frame in physical units.
///
/// A record is only ever built from a validated frame: every field is
/// always present, there is no partially-populated state. Angles are
/// degrees, depth is meters, velocities are meters/second; all real values
/// are rounded to 3 decimal places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryRecord {
    /// Status 1 byte, raw.
    pub status_1: u8,
    /// Status 2 byte, raw.
    pub status_2: u8,
    /// Built-in test equipment status byte, raw.
    pub bite_status: u8,
    /// Day of year (1–366).
    pub day: u16,
    /// GPS time reference, split HH:MM:SS.
    pub time_ref: TimeOfDay,
    /// Attitude heading, degrees (0–360).
    pub heading: f64,
    /// Attitude roll, degrees (signed).
    pub roll: f64,
    /// Attitude pitch, degrees (signed).
    pub pitch: f64,
    /// INS latitude, degrees (signed).
    pub ins_latitude: f64,
    /// INS longitude, degrees (signed).
    pub ins_longitude: f64,
    /// INS depth, meters (signed).
    pub ins_depth: f64,
    /// GPS latitude, degrees (signed).
    pub gps_latitude: f64,
    /// GPS longitude, degrees (signed).
    pub gps_longitude: f64,
    /// INS north velocity, m/s (signed).
    pub velocity_north: f64,
    /// INS east velocity, m/s (signed).
    pub velocity_east: f64,
    /// INS down velocity, m/s (signed).
    pub velocity_down: f64,
    /// Log velocity, m/s (signed).
    pub log_velocity: f64,
    /// Course made good, degrees (0–360).
    pub course_made_good: f64,
    /// Speed over ground, m/s.
    pub speed_over_ground: f64,
    /// Set direction, degrees (0–360).
    pub set_direction: f64,
    /// Drift speed, m/s (signed).
    pub drift_speed: f64,
}
