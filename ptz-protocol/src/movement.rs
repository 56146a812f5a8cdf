//! Movement command decoding
//!
//! A movement frame carries the pan and tilt speed magnitudes at absolute
//! offsets 4 and 5, and the directions in the two command bytes. The
//! magnitudes are read as two's-complement bytes, so raw values of 0x80 and
//! above produce negative speeds.

use crate::frame::{FrameError, ValidFrame};

/// Acceleration applied to the pan axis for every accepted movement
pub const MOVEMENT_ACCEL: i32 = 2000;

const PAN_SPEED_OFFSET: usize = 4;
const TILT_SPEED_OFFSET: usize = 5;

/// Magnitudes below this use the fine scale factors
const FINE_SPEED_LIMIT: i32 = 3;

const PAN_FINE_SCALE: i32 = 200;
const PAN_COARSE_SCALE: i32 = 150;
const TILT_FINE_SCALE: i32 = 400;
const TILT_COARSE_SCALE: i32 = 300;

/// Motion setpoint produced by a movement command
///
/// Tilt acceleration is not controlled by the protocol and is left to the
/// motion controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MovementSetpoint {
    /// Signed pan speed (steps/s)
    pub pan_speed: i32,
    /// Pan acceleration (steps/s²)
    pub pan_accel: i32,
    /// Signed tilt speed (steps/s)
    pub tilt_speed: i32,
}

/// Pan direction from the first command byte
fn pan_direction(cmd1: u8) -> i32 {
    match cmd1 {
        0x01 => -1,
        0x02 => 1,
        _ => 0,
    }
}

/// Tilt direction from the second command byte
fn tilt_direction(cmd2: u8) -> i32 {
    match cmd2 {
        0x01 => 1,
        0x02 => -1,
        _ => 0,
    }
}

/// Decode a movement frame into a setpoint
///
/// Fails with [`FrameError::MissingSpeeds`] when the frame is too short to
/// carry both speed bytes.
pub fn decode(cmd1: u8, cmd2: u8, frame: &ValidFrame<'_>) -> Result<MovementSetpoint, FrameError> {
    let (Some(raw_pan), Some(raw_tilt)) =
        (frame.byte(PAN_SPEED_OFFSET), frame.byte(TILT_SPEED_OFFSET))
    else {
        return Err(FrameError::MissingSpeeds { len: frame.len() });
    };

    let v_pan = i32::from(raw_pan as i8);
    let v_tilt = i32::from(raw_tilt as i8);

    let pan_dir = pan_direction(cmd1);
    let tilt_dir = tilt_direction(cmd2);

    let pan_speed = if v_pan < FINE_SPEED_LIMIT {
        pan_dir * (v_pan * PAN_FINE_SCALE)
    } else {
        pan_dir * (v_pan * PAN_COARSE_SCALE)
    };

    let tilt_speed = if v_tilt < FINE_SPEED_LIMIT {
        v_tilt * tilt_dir * TILT_FINE_SCALE
    } else {
        v_tilt * tilt_dir * TILT_COARSE_SCALE
    };

    Ok(MovementSetpoint {
        pan_speed,
        pan_accel: MOVEMENT_ACCEL,
        tilt_speed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::validate;

    fn move_frame(v_pan: u8, v_tilt: u8, cmd1: u8, cmd2: u8) -> [u8; 9] {
        [0x81, 0x01, 0x06, 0x01, v_pan, v_tilt, cmd1, cmd2, 0xFF]
    }

    fn decode_bytes(bytes: &[u8]) -> Result<MovementSetpoint, FrameError> {
        let frame = validate(bytes).unwrap();
        let (cmd1, cmd2) = frame.command_bytes();
        decode(cmd1, cmd2, &frame)
    }

    #[test]
    fn test_pan_scale_boundary() {
        let fine = decode_bytes(&move_frame(2, 0, 0x02, 0x03)).unwrap();
        assert_eq!(fine.pan_speed, 400);

        let coarse = decode_bytes(&move_frame(3, 0, 0x02, 0x03)).unwrap();
        assert_eq!(coarse.pan_speed, 450);
    }

    #[test]
    fn test_pan_left_is_negative() {
        let sp = decode_bytes(&move_frame(10, 0, 0x01, 0x03)).unwrap();
        assert_eq!(sp.pan_speed, -1500);
        assert_eq!(sp.tilt_speed, 0);
    }

    #[test]
    fn test_tilt_directions() {
        let up = decode_bytes(&move_frame(0, 5, 0x03, 0x01)).unwrap();
        assert_eq!(up.tilt_speed, 1500);

        let down = decode_bytes(&move_frame(0, 2, 0x03, 0x02)).unwrap();
        assert_eq!(down.tilt_speed, -800);
    }

    #[test]
    fn test_stop_codes_zero_speed() {
        let sp = decode_bytes(&move_frame(20, 20, 0x03, 0x03)).unwrap();
        assert_eq!(sp.pan_speed, 0);
        assert_eq!(sp.tilt_speed, 0);
        assert_eq!(sp.pan_accel, MOVEMENT_ACCEL);
    }

    #[test]
    fn test_accel_always_set() {
        let sp = decode_bytes(&move_frame(0, 0, 0x01, 0x01)).unwrap();
        assert_eq!(sp.pan_accel, 2000);
    }

    #[test]
    fn test_signed_magnitude_quirk() {
        // 0x80 reads as -128, which takes the fine branch
        let sp = decode_bytes(&move_frame(0x80, 0xFF, 0x02, 0x01)).unwrap();
        assert_eq!(sp.pan_speed, -128 * 200);
        assert_eq!(sp.tilt_speed, -400);

        // 0x7F is the largest positive magnitude
        let sp = decode_bytes(&move_frame(0x7F, 0x7F, 0x02, 0x01)).unwrap();
        assert_eq!(sp.pan_speed, 127 * 150);
        assert_eq!(sp.tilt_speed, 127 * 300);
    }

    #[test]
    fn test_short_frame_missing_speeds() {
        // Five bytes: valid frame, but offset 5 is absent
        let result = decode_bytes(&[0x81, 0x05, 0x02, 0x01, 0xFF]);
        assert_eq!(result, Err(FrameError::MissingSpeeds { len: 5 }));
    }

    #[test]
    fn test_six_byte_frame_uses_absolute_offsets() {
        // Offsets 4 and 5 overlap cmd2 and the end marker
        let sp = decode_bytes(&[0x81, 0x00, 0x02, 0x01, 0x01, 0xFF]).unwrap();
        assert_eq!(sp.pan_speed, -200);
        assert_eq!(sp.tilt_speed, -400);
    }
}
