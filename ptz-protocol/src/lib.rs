//! VISCA-style Command Protocol
//!
//! This crate defines the datagram protocol spoken between a remote
//! operator (camera controller, joystick bridge) and the PTZ head. It is
//! a small subset of VISCA-over-IP: enough to move the head, home it and
//! report its position.
//!
//! # Protocol Overview
//!
//! Inbound commands are variable-length frames with fixed markers. The
//! operative command lives in the two bytes preceding the end marker:
//! ```text
//! ┌──────┬──────┬──────┬──────┬───────┬────────┬──────┬──────┬──────┐
//! │ 0x81 │ addr │ ...  │ ...  │ v_pan │ v_tilt │ cmd1 │ cmd2 │ 0xFF │
//! │ [0]  │ [1]  │ [2]  │ [3]  │ [4]   │ [5]    │ len-3│ len-2│ len-1│
//! └──────┴──────┴──────┴──────┴───────┴────────┴──────┴──────┴──────┘
//! ```
//!
//! Position replies are a fixed 11-byte frame:
//! ```text
//! ┌──────┬──────┬───────────────────┬───────────────────┬──────┐
//! │ 0x90 │ 0x50 │ pan (4 nibbles)   │ tilt (4 nibbles)  │ 0xFF │
//! └──────┴──────┴───────────────────┴───────────────────┴──────┘
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod command;
pub mod frame;
pub mod movement;
pub mod telemetry;

pub use command::{classify, Command};
pub use frame::{validate, FrameError, ValidFrame, FRAME_END, FRAME_START, MIN_FRAME_LEN};
pub use movement::{decode, MovementSetpoint, MOVEMENT_ACCEL};
pub use telemetry::{encode, PositionReport, REPLY_LEN};

/// Default UDP port for the command protocol
pub const VISCA_UDP_PORT: u16 = 1259;

/// Largest datagram the engine reads; longer datagrams are truncated
pub const MAX_DATAGRAM_SIZE: usize = 255;
