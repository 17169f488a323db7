//! Byte layout of the 78-byte gyro telemetry frame.
//!
//! Every field range is a compile-time constant inside the frame bounds, so
//! no field access can ever index outside a validated frame. Any change to
//! this table must be mirrored in both [`crate::wire::decode`] and
//! [`crate::wire::encode`], which are structural inverses of each other.

use std::ops::Range;

/// Total wire size of one telemetry frame.
pub const FRAME_LEN: usize = 78;

/// Header marker at the start of every frame.
pub const HEADER: [u8; 2] = [0x5A, 0xA5];

/// Declared payload length byte (0x48 = 72 data bytes). Written by the
/// encoder but not checked by the validator, matching the source device's
/// decoder.
pub const LENGTH_BYTE: u8 = 0x48;

/// Packet identifier byte.
pub const IDENTIFIER: u8 = 0x02;

/// Trailer marker at the end of every frame.
pub const TRAILER: u8 = 0xAA;

/// Position of the declared length byte.
pub const LENGTH_POS: usize = 2;

/// Position of the packet identifier byte.
pub const IDENTIFIER_POS: usize = 3;

/// Position of the checksum byte (sum of all bytes before it, mod 256).
pub const CHECKSUM_POS: usize = 76;

/// Position of the trailer byte.
pub const TRAILER_POS: usize = 77;

// Status and time-reference block.
pub const STATUS_1: usize = 4;
pub const STATUS_2: usize = 5;
pub const BITE_STATUS: usize = 6;
pub const DAY: Range<usize> = 7..9;
pub const TIME_REF: Range<usize> = 9..12;
pub const SPARE: Range<usize> = 12..14;

// Attitude block.
pub const HEADING: Range<usize> = 14..16;
pub const ROLL: Range<usize> = 16..18;
pub const PITCH: Range<usize> = 18..20;

// Attitude rates (carried on the wire, not part of the decoded record).
pub const RATES: Range<usize> = 20..26;

// INS position block.
pub const INS_LATITUDE: Range<usize> = 26..30;
pub const INS_LONGITUDE: Range<usize> = 30..34;
pub const INS_DEPTH: Range<usize> = 34..36;

// INS position accuracy (carried on the wire, not part of the decoded record).
pub const LATITUDE_ACCURACY: Range<usize> = 36..40;
pub const LONGITUDE_ACCURACY: Range<usize> = 40..44;
pub const DEPTH_ACCURACY: Range<usize> = 44..46;

// GPS position block.
pub const GPS_LATITUDE: Range<usize> = 46..50;
pub const GPS_LONGITUDE: Range<usize> = 50..54;

// Velocity block.
pub const VELOCITY_NORTH: Range<usize> = 54..56;
pub const VELOCITY_EAST: Range<usize> = 56..58;
pub const VELOCITY_DOWN: Range<usize> = 58..60;
pub const LOG_VELOCITY: Range<usize> = 60..62;

// Navigation block.
pub const COURSE_MADE_GOOD: Range<usize> = 62..64;
pub const SPEED_OVER_GROUND: Range<usize> = 64..66;
pub const SET_DIRECTION: Range<usize> = 66..68;
pub const DRIFT_SPEED: Range<usize> = 68..70;

// Zero-filled reserved tail before the checksum.
pub const RESERVED: Range<usize> = 70..76;

/// Scale for full-circle angles (heading, course made good, set direction):
/// raw * 180 / 2^15 degrees.
pub const FULL_ANGLE_SCALE: f64 = 180.0 / 32768.0;

/// Scale for half-circle angles (roll, pitch): raw * 90 / 2^15 degrees.
pub const HALF_ANGLE_SCALE: f64 = 90.0 / 32768.0;

/// Scale for latitudes: raw * 90 / 2^31 degrees.
pub const LATITUDE_SCALE: f64 = 90.0 / 2_147_483_648.0;

/// Scale for longitudes: raw * 180 / 2^31 degrees.
pub const LONGITUDE_SCALE: f64 = 180.0 / 2_147_483_648.0;

/// Scale for depth: raw * 0.02 meters.
pub const DEPTH_SCALE: f64 = 0.02;

/// Scale for all velocities: raw * 0.002 meters/second.
pub const VELOCITY_SCALE: f64 = 0.002;
