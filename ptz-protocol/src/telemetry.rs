//! Position reply encoding
//!
//! Reply format (11 bytes):
//! - HEADER (2 bytes): 0x90 0x50
//! - PAN (4 bytes): one nibble per byte, most significant first
//! - TILT (4 bytes): one nibble per byte, most significant first
//! - END (1 byte): 0xFF
//!
//! Each position is a signed 16-bit step count, so negative values expand
//! to their two's-complement nibbles. Nothing is clamped.

/// Reply header bytes
pub const REPLY_HEADER: [u8; 2] = [0x90, 0x50];

/// Reply end marker
pub const REPLY_END: u8 = 0xFF;

/// Reply length in bytes
pub const REPLY_LEN: usize = 11;

/// Absolute pan/tilt position read from the motion stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PositionReport {
    /// Pan position in steps
    pub pan: i16,
    /// Tilt position in steps
    pub tilt: i16,
}

impl PositionReport {
    /// Encode this report as a reply frame
    pub fn to_bytes(&self) -> [u8; REPLY_LEN] {
        encode(self.pan, self.tilt)
    }
}

/// Expand a value into four nibble bytes, most significant first
fn nibbles(value: i16) -> [u8; 4] {
    [
        ((value >> 12) & 0x0F) as u8,
        ((value >> 8) & 0x0F) as u8,
        ((value >> 4) & 0x0F) as u8,
        (value & 0x0F) as u8,
    ]
}

/// Encode a pan/tilt position reply
pub fn encode(pan: i16, tilt: i16) -> [u8; REPLY_LEN] {
    let mut reply = [0u8; REPLY_LEN];
    reply[..2].copy_from_slice(&REPLY_HEADER);
    reply[2..6].copy_from_slice(&nibbles(pan));
    reply[6..10].copy_from_slice(&nibbles(tilt));
    reply[10] = REPLY_END;
    reply
}
