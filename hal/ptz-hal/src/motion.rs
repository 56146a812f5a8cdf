//! Motion stack hooks
//!
//! The control plane never drives the steppers itself. It reads positions
//! from, and requests homing of, the motion controller through these traits.

/// Current absolute axis positions in motor steps
pub trait PositionProvider {
    /// Pan axis position
    fn current_pan(&self) -> i16;

    /// Tilt axis position
    fn current_tilt(&self) -> i16;

    /// Whether the underlying axis drivers are connected and positions valid
    fn is_ready(&self) -> bool {
        true
    }
}

/// Starts the homing sequence of both axes
pub trait HomingTrigger {
    /// Request homing; returns immediately
    fn trigger_home(&mut self);
}
