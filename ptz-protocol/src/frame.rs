//! Frame validation for inbound command datagrams.
//!
//! Frame format:
//! - START (1 byte): 0x81
//! - BODY (n bytes): address, payload and the two command bytes
//! - END (1 byte): 0xFF
//!
//! Only the markers and the minimum length are checked here. Everything
//! else is interpreted by the command classifier.

/// Frame start marker
pub const FRAME_START: u8 = 0x81;

/// Frame end marker
pub const FRAME_END: u8 = 0xFF;

/// Minimum valid frame length (START + three body bytes + END)
pub const MIN_FRAME_LEN: usize = 5;

/// Errors that can occur while validating or decoding a frame
///
/// Every variant carries the length of the rejected datagram so that it can
/// be reported without keeping the bytes around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Fewer than [`MIN_FRAME_LEN`] bytes
    TooShort { len: usize },
    /// First byte is not [`FRAME_START`]
    MissingStart { len: usize },
    /// Last byte is not [`FRAME_END`]
    MissingEnd { len: usize },
    /// Movement frame too short to carry both speed bytes
    MissingSpeeds { len: usize },
}

impl FrameError {
    /// Length of the rejected datagram
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        match *self {
            FrameError::TooShort { len }
            | FrameError::MissingStart { len }
            | FrameError::MissingEnd { len }
            | FrameError::MissingSpeeds { len } => len,
        }
    }
}

/// A datagram that passed marker and length validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ValidFrame<'a> {
    bytes: &'a [u8],
}

impl ValidFrame<'_> {
    /// Frame length in bytes (always >= [`MIN_FRAME_LEN`])
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// The two command bytes preceding the end marker
    pub fn command_bytes(&self) -> (u8, u8) {
        let len = self.bytes.len();
        (self.bytes[len - 3], self.bytes[len - 2])
    }

    /// Byte at an absolute offset, if present
    pub fn byte(&self, offset: usize) -> Option<u8> {
        self.bytes.get(offset).copied()
    }
}

/// Validate a raw datagram
///
/// Checks, in order: minimum length, start marker, end marker.
pub fn validate(bytes: &[u8]) -> Result<ValidFrame<'_>, FrameError> {
    let len = bytes.len();
    if len < MIN_FRAME_LEN {
        return Err(FrameError::TooShort { len });
    }
    if bytes[0] != FRAME_START {
        return Err(FrameError::MissingStart { len });
    }
    if bytes[len - 1] != FRAME_END {
        return Err(FrameError::MissingEnd { len });
    }
    Ok(ValidFrame { bytes })
}
