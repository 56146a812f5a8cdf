//! Motion setpoint sharing
//!
//! The protocol engine writes movement setpoints; the motor controller
//! reads them. Both hold a shared reference to one [`SetpointSlot`].

pub mod setpoint;

pub use setpoint::SetpointSlot;
