//! Synthetic frame encoder: the structural inverse of the decoder.
//!
//! `encode` produces byte-exact frames for the 78-byte wire format,
//! including the checksum and the reference generator's alphabetic-
//! uppercasing pass. It serves as the round-trip test oracle and as the
//! payload source for the mock transport
//! ([`crate::providers::SyntheticProvider`]).
//!
//! ## The uppercasing quirk
//!
//! The reference generator runs every finished frame through an ASCII
//! `upper()` over all 78 bytes, so any byte in `0x61–0x7A` (including bytes
//! inside numeric fields and the checksum) is folded into `0x41–0x5A`.
//! This silently corrupts roughly one in ten random payload bytes. It is
//! reproduced here for wire compatibility with the deployed generator;
//! it is a known defect of that generator, not a feature to extend.

use rand::Rng;

use super::frame::checksum;
use super::layout::*;

/// Raw wire-level field values for one synthetic frame.
///
/// Values are the raw integers as carried on the wire, before any scale
/// factor is applied. Includes the rate and accuracy fields the decoder
/// skips, so any bit pattern the device can emit can be reproduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameInput {
    pub status_1: u8,
    pub status_2: u8,
    pub bite_status: u8,
    /// Day of year (1–366).
    pub day: u16,
    /// Centiseconds since midnight; only the low 24 bits fit on the wire.
    pub time_ref_cs: u32,
    pub heading: u16,
    pub roll: i16,
    pub pitch: i16,
    /// Attitude rates, not decoded on the receive side.
    pub rates: [i16; 3],
    pub ins_latitude: i32,
    pub ins_longitude: i32,
    pub ins_depth: i16,
    /// Position accuracy, not decoded on the receive side.
    pub latitude_accuracy: u32,
    pub longitude_accuracy: u32,
    pub depth_accuracy: u16,
    pub gps_latitude: i32,
    pub gps_longitude: i32,
    pub velocity_north: i16,
    pub velocity_east: i16,
    pub velocity_down: i16,
    pub log_velocity: i16,
    pub course_made_good: u16,
    pub speed_over_ground: u16,
    pub set_direction: u16,
    pub drift_speed: i16,
}

impl FrameInput {
    /// Draw field values from the same ranges the reference generator uses.
    ///
    /// Notably the GPS position mirrors the INS position, matching the
    /// generator's reuse of one random draw for both blocks.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        // (2^15 - 1) / 90, the generator's integer degree scale for
        // roll/pitch bounds.
        const DEGREE_STEPS: i16 = (i16::MAX as i32 / 90) as i16;

        let latitude = rng.r#gen::<i32>();
        let longitude = rng.r#gen::<i32>();

        Self {
            status_1: rng.r#gen(),
            status_2: rng.r#gen(),
            bite_status: rng.r#gen(),
            day: rng.gen_range(1..=366),
            time_ref_cs: rng.gen_range(0..=8_640_000),
            heading: rng.gen_range(0..=i16::MAX as u16),
            roll: rng.gen_range(-90 * DEGREE_STEPS..=90 * DEGREE_STEPS),
            pitch: rng.gen_range(-90 * DEGREE_STEPS..=90 * DEGREE_STEPS),
            rates: [rng.r#gen(), rng.r#gen(), rng.r#gen()],
            ins_latitude: latitude,
            ins_longitude: longitude,
            ins_depth: rng.r#gen(),
            latitude_accuracy: rng.r#gen(),
            longitude_accuracy: rng.r#gen(),
            depth_accuracy: rng.r#gen(),
            gps_latitude: latitude,
            gps_longitude: longitude,
            velocity_north: rng.r#gen(),
            velocity_east: rng.r#gen(),
            velocity_down: rng.r#gen(),
            log_velocity: rng.r#gen(),
            course_made_good: rng.gen_range(0..=i16::MAX as u16),
            speed_over_ground: rng.gen_range(0..=i16::MAX as u16),
            set_direction: rng.gen_range(0..=i16::MAX as u16),
            drift_speed: rng.r#gen(),
        }
    }
}

/// Encode one frame from raw field values.
///
/// Writes header, length and identifier bytes, every field at its layout
/// range, zero-filled spare and reserved regions, the sum-mod-256 checksum
/// and the trailer, then applies the uppercasing pass (see module docs).
/// The output is always exactly 78 bytes and always passes the validator:
/// `0x5A` is uppercase `Z` (a fixed point of the fold) and `0xA5`/`0xAA`
/// are outside the ASCII letter ranges.
pub fn encode(input: &FrameInput) -> [u8; FRAME_LEN] {
    let mut frame = [0u8; FRAME_LEN];

    frame[..2].copy_from_slice(&HEADER);
    frame[LENGTH_POS] = LENGTH_BYTE;
    frame[IDENTIFIER_POS] = IDENTIFIER;

    frame[STATUS_1] = input.status_1;
    frame[STATUS_2] = input.status_2;
    frame[BITE_STATUS] = input.bite_status;
    frame[DAY].copy_from_slice(&input.day.to_be_bytes());
    frame[TIME_REF].copy_from_slice(&(input.time_ref_cs & 0x00FF_FFFF).to_be_bytes()[1..]);
    // SPARE stays zero-filled.

    frame[HEADING].copy_from_slice(&input.heading.to_be_bytes());
    frame[ROLL].copy_from_slice(&input.roll.to_be_bytes());
    frame[PITCH].copy_from_slice(&input.pitch.to_be_bytes());
    for (i, rate) in input.rates.iter().enumerate() {
        let at = RATES.start + i * 2;
        frame[at..at + 2].copy_from_slice(&rate.to_be_bytes());
    }

    frame[INS_LATITUDE].copy_from_slice(&input.ins_latitude.to_be_bytes());
    frame[INS_LONGITUDE].copy_from_slice(&input.ins_longitude.to_be_bytes());
    frame[INS_DEPTH].copy_from_slice(&input.ins_depth.to_be_bytes());
    frame[LATITUDE_ACCURACY].copy_from_slice(&input.latitude_accuracy.to_be_bytes());
    frame[LONGITUDE_ACCURACY].copy_from_slice(&input.longitude_accuracy.to_be_bytes());
    frame[DEPTH_ACCURACY].copy_from_slice(&input.depth_accuracy.to_be_bytes());

    frame[GPS_LATITUDE].copy_from_slice(&input.gps_latitude.to_be_bytes());
    frame[GPS_LONGITUDE].copy_from_slice(&input.gps_longitude.to_be_bytes());

    frame[VELOCITY_NORTH].copy_from_slice(&input.velocity_north.to_be_bytes());
    frame[VELOCITY_EAST].copy_from_slice(&input.velocity_east.to_be_bytes());
    frame[VELOCITY_DOWN].copy_from_slice(&input.velocity_down.to_be_bytes());
    frame[LOG_VELOCITY].copy_from_slice(&input.log_velocity.to_be_bytes());

    frame[COURSE_MADE_GOOD].copy_from_slice(&input.course_made_good.to_be_bytes());
    frame[SPEED_OVER_GROUND].copy_from_slice(&input.speed_over_ground.to_be_bytes());
    frame[SET_DIRECTION].copy_from_slice(&input.set_direction.to_be_bytes());
    frame[DRIFT_SPEED].copy_from_slice(&input.drift_speed.to_be_bytes());
    // RESERVED stays zero-filled.

    // Checksum covers bytes [0..76], computed before the uppercasing pass
    // like the reference generator does.
    frame[CHECKSUM_POS] = checksum(&frame[..CHECKSUM_POS]);
    frame[TRAILER_POS] = TRAILER;

    fold_alphabetic_upper(&mut frame);
    frame
}

/// Convenience wrapper: encode a frame with randomly drawn field values.
pub fn encode_random<R: Rng + ?Sized>(rng: &mut R) -> [u8; FRAME_LEN] {
    encode(&FrameInput::random(rng))
}

/// The reference generator's uppercasing pass: any byte in the ASCII
/// alphabetic ranges (`0x41–0x5A`, `0x61–0x7A`) is folded to uppercase.
/// Uppercase letters map to themselves, so in practice only bytes in
/// `0x61–0x7A` ever change.
pub fn fold_alphabetic_upper(frame: &mut [u8; FRAME_LEN]) {
    for byte in frame.iter_mut() {
        if byte.is_ascii_lowercase() {
            *byte = byte.to_ascii_uppercase();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::decode::decode;
    use crate::wire::frame::validate;

    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn fixed_bytes_land_at_their_positions() {
        let frame = encode(&FrameInput::default());
        assert_eq!(frame[..2], HEADER);
        assert_eq!(frame[LENGTH_POS], LENGTH_BYTE);
        assert_eq!(frame[IDENTIFIER_POS], IDENTIFIER);
        assert_eq!(frame[TRAILER_POS], TRAILER);
        assert_eq!(frame[SPARE], [0, 0]);
        assert_eq!(frame[RESERVED], [0; 6]);
        assert!(validate(&frame));
    }

    #[test]
    fn checksum_matches_byte_sum() {
        // No byte of an all-zero payload falls in the lowercase range, so
        // the stored checksum survives the fold intact.
        let frame = encode(&FrameInput { day: 5, heading: 16384, ..Default::default() });
        assert_eq!(frame[CHECKSUM_POS], checksum(&frame[..CHECKSUM_POS]));
    }

    #[test]
    fn uppercasing_quirk_mutates_lowercase_payload_bytes() {
        // 0x68 0x69 is "hi"; the fold rewrites it to "HI" (0x48 0x49) even
        // though it sits inside a numeric field. Exact reproduction of the
        // reference generator's defect.
        let input = FrameInput { heading: 0x6869, ..Default::default() };
        let frame = encode(&input);
        assert_eq!(frame[HEADING], [0x48, 0x49]);

        // The decoded heading therefore differs from the encoded intent.
        let record = decode(&frame).unwrap();
        assert_eq!(record.heading, crate::wire::codec::scaled(0x4849, FULL_ANGLE_SCALE));
    }

    #[test]
    fn uppercase_bytes_are_fold_fixed_points() {
        let input = FrameInput { heading: 0x4849, ..Default::default() };
        let frame = encode(&input);
        assert_eq!(frame[HEADING], [0x48, 0x49]);
    }

    #[test]
    fn random_frames_always_validate() {
        let mut rng = StdRng::seed_from_u64(0x5AA5);
        for _ in 0..256 {
            let frame = encode_random(&mut rng);
            assert_eq!(frame.len(), FRAME_LEN);
            assert!(validate(&frame));
        }
    }

    #[test]
    fn random_gps_mirrors_ins_position() {
        let mut rng = StdRng::seed_from_u64(7);
        let input = FrameInput::random(&mut rng);
        assert_eq!(input.gps_latitude, input.ins_latitude);
        assert_eq!(input.gps_longitude, input.ins_longitude);
    }

    /// A byte value that the uppercasing pass leaves untouched.
    fn non_lowercase_byte() -> impl Strategy<Value = u8> {
        prop_oneof![0x00u8..=0x60, 0x7Bu8..=0xFF]
    }

    fn non_lowercase_u16() -> impl Strategy<Value = u16> {
        (non_lowercase_byte(), non_lowercase_byte())
            .prop_map(|(hi, lo)| u16::from_be_bytes([hi, lo]))
    }

    fn non_lowercase_i16() -> impl Strategy<Value = i16> {
        non_lowercase_u16().prop_map(|v| v as i16)
    }

    fn non_lowercase_i32() -> impl Strategy<Value = i32> {
        (non_lowercase_u16(), non_lowercase_u16())
            .prop_map(|(hi, lo)| (((hi as u32) << 16) | lo as u32) as i32)
    }

    proptest! {
        /// Round-trip: decode(encode(fields)) reproduces the raw values at
        /// the stated scale factors, for inputs whose encoded bytes avoid
        /// the lowercase ASCII range the quirk would mutate.
        #[test]
        fn prop_encode_decode_roundtrip(
            status_1 in non_lowercase_byte(),
            status_2 in non_lowercase_byte(),
            bite in non_lowercase_byte(),
            day_hi in 0u8..=1,
            day_lo in non_lowercase_byte(),
            heading in non_lowercase_u16(),
            roll in non_lowercase_i16(),
            pitch in non_lowercase_i16(),
            ins_latitude in non_lowercase_i32(),
            ins_longitude in non_lowercase_i32(),
            ins_depth in non_lowercase_i16(),
            velocity_north in non_lowercase_i16(),
            course in non_lowercase_u16(),
            speed in non_lowercase_u16(),
            drift in non_lowercase_i16(),
        ) {
            use crate::wire::codec::scaled;

            let input = FrameInput {
                status_1,
                status_2,
                bite_status: bite,
                day: u16::from_be_bytes([day_hi, day_lo]),
                heading,
                roll,
                pitch,
                ins_latitude,
                ins_longitude,
                ins_depth,
                gps_latitude: ins_latitude,
                gps_longitude: ins_longitude,
                velocity_north,
                course_made_good: course,
                speed_over_ground: speed,
                drift_speed: drift,
                ..Default::default()
            };

            let record = decode(&encode(&input)).unwrap();

            prop_assert_eq!(record.status_1, input.status_1);
            prop_assert_eq!(record.status_2, input.status_2);
            prop_assert_eq!(record.bite_status, input.bite_status);
            prop_assert_eq!(record.day, input.day);
            prop_assert_eq!(record.heading, scaled(input.heading as i64, FULL_ANGLE_SCALE));
            prop_assert_eq!(record.roll, scaled(input.roll as i64, HALF_ANGLE_SCALE));
            prop_assert_eq!(record.pitch, scaled(input.pitch as i64, HALF_ANGLE_SCALE));
            prop_assert_eq!(record.ins_latitude, scaled(input.ins_latitude as i64, LATITUDE_SCALE));
            prop_assert_eq!(record.ins_longitude, scaled(input.ins_longitude as i64, LONGITUDE_SCALE));
            prop_assert_eq!(record.ins_depth, scaled(input.ins_depth as i64, DEPTH_SCALE));
            prop_assert_eq!(record.gps_latitude, record.ins_latitude);
            prop_assert_eq!(record.velocity_north, scaled(input.velocity_north as i64, VELOCITY_SCALE));
            prop_assert_eq!(record.course_made_good, scaled(input.course_made_good as i64, FULL_ANGLE_SCALE));
            prop_assert_eq!(record.speed_over_ground, scaled(input.speed_over_ground as i64, VELOCITY_SCALE));
            prop_assert_eq!(record.drift_speed, scaled(input.drift_speed as i64, VELOCITY_SCALE));
        }

        #[test]
        fn prop_time_ref_roundtrips(time_cs in 0u32..8_640_000) {
            // The three time bytes can land in the lowercase range, so mask
            // them out of the draw instead: centiseconds built from safe
            // bytes only.
            let bytes = time_cs.to_be_bytes();
            prop_assume!(!bytes[1..].iter().any(u8::is_ascii_lowercase));

            let input = FrameInput { time_ref_cs: time_cs, ..Default::default() };
            let record = decode(&encode(&input)).unwrap();
            let expected = crate::types::TimeOfDay::from_centiseconds(time_cs);
            prop_assert_eq!(record.time_ref, expected);
        }
    }
}
