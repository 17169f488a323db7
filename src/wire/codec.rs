//! Big-endian field codec for multi-width integers and physical units.
//!
//! All wire integers are big-endian. Signed fields use two's-complement
//! semantics over their declared width (1–4 bytes). Physical values are the
//! raw integer times a fixed scale factor, rounded to 3 decimal places.

/// Decode a big-endian unsigned 16-bit field.
pub fn be_u16(bytes: &[u8]) -> u16 {
    u16::from_be_bytes([bytes[0], bytes[1]])
}

/// Decode a big-endian unsigned 24-bit field into the low bits of a u32.
pub fn be_u24(bytes: &[u8]) -> u32 {
    u32::from_be_bytes([0, bytes[0], bytes[1], bytes[2]])
}

/// Decode a big-endian unsigned 32-bit field.
pub fn be_u32(bytes: &[u8]) -> u32 {
    u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Decode a big-endian two's-complement 16-bit field.
pub fn be_i16(bytes: &[u8]) -> i16 {
    i16::from_be_bytes([bytes[0], bytes[1]])
}

/// Decode a big-endian two's-complement 24-bit field, sign-extended to i32.
pub fn be_i24(bytes: &[u8]) -> i32 {
    let raw = be_u24(bytes);
    if raw & 0x0080_0000 != 0 { (raw | 0xFF00_0000) as i32 } else { raw as i32 }
}

/// Decode a big-endian two's-complement 32-bit field.
pub fn be_i32(bytes: &[u8]) -> i32 {
    i32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Round a physical value to 3 decimal places.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Apply a scale factor to a raw integer and round to 3 decimal places.
pub fn scaled(raw: i64, factor: f64) -> f64 {
    round3(raw as f64 * factor)
}
