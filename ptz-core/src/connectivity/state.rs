//! Controller lifecycle states

use super::link::StationLink;

/// Controller states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControllerState {
    /// No configuration applied yet
    #[default]
    Unconfigured,
    /// Apply cycle in progress
    Applying,
    /// Last apply cycle finished
    Settled,
}

/// Lifecycle events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControllerEvent {
    /// A configuration is about to be applied
    ApplyStarted,
    /// The apply cycle completed
    ApplyFinished,
}

impl ControllerState {
    /// Process an event and return the next state
    pub fn transition(self, event: ControllerEvent) -> Self {
        use ControllerEvent::*;
        use ControllerState::*;

        match (self, event) {
            (_, ApplyStarted) => Applying,
            (Applying, ApplyFinished) => Settled,
            (state, ApplyFinished) => state,
        }
    }

    /// Check if an apply cycle has completed
    pub fn is_settled(&self) -> bool {
        matches!(self, ControllerState::Settled)
    }
}

/// Transient connectivity state, recomputed every apply cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RuntimeState {
    /// Station link outcome
    pub station: StationLink,
    /// Access point is up
    pub ap_active: bool,
    /// Peer link is initialized
    pub espnow_active: bool,
    /// Set once the current cycle completes
    pub config_applied: bool,
    /// The radio reported missing hardware
    pub hardware_absent: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle() {
        let state = ControllerState::default();
        assert_eq!(state, ControllerState::Unconfigured);

        let state = state.transition(ControllerEvent::ApplyStarted);
        assert_eq!(state, ControllerState::Applying);

        let state = state.transition(ControllerEvent::ApplyFinished);
        assert!(state.is_settled());

        // Replacing the configuration re-enters Applying
        let state = state.transition(ControllerEvent::ApplyStarted);
        assert_eq!(state, ControllerState::Applying);
    }

    #[test]
    fn test_finish_without_start_ignored() {
        let state = ControllerState::Unconfigured.transition(ControllerEvent::ApplyFinished);
        assert_eq!(state, ControllerState::Unconfigured);
    }
}
