//! Command classification
//!
//! Maps the two trailing command bytes of a validated frame to the small
//! set of commands the head understands. Rules are checked in order and the
//! first match wins.

use crate::frame::ValidFrame;

// Command byte pairs
const CMD_GROUP_HOME: u8 = 0x06;
const CMD_HOME: u8 = 0x04;
const CMD_POSITION_QUERY: u8 = 0x12;

/// Direction codes accepted in both movement command bytes
const MOVE_CODES: [u8; 3] = [0x01, 0x02, 0x03];

/// Classified command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Return both axes to their home position
    Home,
    /// Report the absolute pan/tilt position
    PositionQuery,
    /// Relative-speed pan/tilt drive
    Movement {
        /// Pan direction code (0x01 left, 0x02 right, 0x03 stop)
        cmd1: u8,
        /// Tilt direction code (0x01 up, 0x02 down, 0x03 stop)
        cmd2: u8,
    },
    /// Anything else; ignored
    Unrecognized { cmd1: u8, cmd2: u8 },
}

/// Classify a validated frame
pub fn classify(frame: &ValidFrame<'_>) -> Command {
    let (cmd1, cmd2) = frame.command_bytes();

    match (cmd1, cmd2) {
        (CMD_GROUP_HOME, CMD_HOME) => Command::Home,
        (CMD_GROUP_HOME, CMD_POSITION_QUERY) => Command::PositionQuery,
        _ if MOVE_CODES.contains(&cmd1) && MOVE_CODES.contains(&cmd2) => {
            Command::Movement { cmd1, cmd2 }
        }
        _ => Command::Unrecognized { cmd1, cmd2 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::validate;

    fn classify_bytes(bytes: &[u8]) -> Command {
        classify(&validate(bytes).unwrap())
    }

    #[test]
    fn test_home() {
        assert_eq!(classify_bytes(&[0x81, 0x01, 0x06, 0x04, 0xFF]), Command::Home);
    }

    #[test]
    fn test_position_query() {
        assert_eq!(
            classify_bytes(&[0x81, 0x09, 0x06, 0x12, 0xFF]),
            Command::PositionQuery
        );
    }

    #[test]
    fn test_movement_codes() {
        for cmd1 in 0x01..=0x03 {
            for cmd2 in 0x01..=0x03 {
                let bytes = [0x81, 0x01, 0x06, 0x01, 0x05, 0x05, cmd1, cmd2, 0xFF];
                assert_eq!(classify_bytes(&bytes), Command::Movement { cmd1, cmd2 });
            }
        }
    }

    #[test]
    fn test_movement_requires_both_codes() {
        let bytes = [0x81, 0x01, 0x06, 0x01, 0x05, 0x05, 0x02, 0x04, 0xFF];
        assert_eq!(
            classify_bytes(&bytes),
            Command::Unrecognized {
                cmd1: 0x02,
                cmd2: 0x04
            }
        );
    }

    #[test]
    fn test_home_group_with_other_code() {
        assert_eq!(
            classify_bytes(&[0x81, 0x01, 0x06, 0x05, 0xFF]),
            Command::Unrecognized {
                cmd1: 0x06,
                cmd2: 0x05
            }
        );
    }

    #[test]
    fn test_command_bytes_are_relative_to_end() {
        // Extra payload before the command bytes does not change the result
        let bytes = [0x81, 0x01, 0x7E, 0x7E, 0x7E, 0x7E, 0x06, 0x04, 0xFF];
        assert_eq!(classify_bytes(&bytes), Command::Home);
    }
}
