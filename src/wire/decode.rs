//! Packet decoder: one validated window to one [`TelemetryRecord`].

use crate::types::{TelemetryRecord, TimeOfDay};

use super::codec::{be_i16, be_i32, be_u16, be_u24, scaled};
use super::frame::{DecodeError, RawFrame};
use super::layout::*;

/// Decode one candidate 78-byte window into a telemetry record.
///
/// Fails with [`DecodeError::InvalidFraming`] when the window fails the
/// frame validator; otherwise the record is fully populated. Pure function,
/// no I/O.
pub fn decode(window: &[u8]) -> Result<TelemetryRecord, DecodeError> {
    let frame = RawFrame::from_window(window)?;
    Ok(decode_frame(&frame))
}

/// Decode a frame that already holds the [`RawFrame`] invariant.
///
/// Infallible: every field range is a compile-time constant inside the
/// 78-byte frame, so no access can miss.
pub fn decode_frame(frame: &RawFrame) -> TelemetryRecord {
    let b = frame.as_bytes();

    TelemetryRecord {
        status_1: b[STATUS_1],
        status_2: b[STATUS_2],
        bite_status: b[BITE_STATUS],
        day: be_u16(&b[DAY]),
        time_ref: TimeOfDay::from_centiseconds(be_u24(&b[TIME_REF])),
        heading: scaled(be_u16(&b[HEADING]) as i64, FULL_ANGLE_SCALE),
        roll: scaled(be_i16(&b[ROLL]) as i64, HALF_ANGLE_SCALE),
        pitch: scaled(be_i16(&b[PITCH]) as i64, HALF_ANGLE_SCALE),
        ins_latitude: scaled(be_i32(&b[INS_LATITUDE]) as i64, LATITUDE_SCALE),
        ins_longitude: scaled(be_i32(&b[INS_LONGITUDE]) as i64, LONGITUDE_SCALE),
        ins_depth: scaled(be_i16(&b[INS_DEPTH]) as i64, DEPTH_SCALE),
        gps_latitude: scaled(be_i32(&b[GPS_LATITUDE]) as i64, LATITUDE_SCALE),
        gps_longitude: scaled(be_i32(&b[GPS_LONGITUDE]) as i64, LONGITUDE_SCALE),
        velocity_north: scaled(be_i16(&b[VELOCITY_NORTH]) as i64, VELOCITY_SCALE),
        velocity_east: scaled(be_i16(&b[VELOCITY_EAST]) as i64, VELOCITY_SCALE),
        velocity_down: scaled(be_i16(&b[VELOCITY_DOWN]) as i64, VELOCITY_SCALE),
        log_velocity: scaled(be_i16(&b[LOG_VELOCITY]) as i64, VELOCITY_SCALE),
        course_made_good: scaled(be_u16(&b[COURSE_MADE_GOOD]) as i64, FULL_ANGLE_SCALE),
        speed_over_ground: scaled(be_u16(&b[SPEED_OVER_GROUND]) as i64, VELOCITY_SCALE),
        set_direction: scaled(be_u16(&b[SET_DIRECTION]) as i64, FULL_ANGLE_SCALE),
        drift_speed: scaled(be_i16(&b[DRIFT_SPEED]) as i64, VELOCITY_SCALE),
    }
}
