//! Station link status

use ptz_hal::LinkStatus;

/// Why a station attempt failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkFailure {
    /// Network not visible
    NoNetworkFound,
    /// Credentials rejected
    AuthenticationRejected,
    /// No radio present
    NoRadioHardware,
    /// No terminal status before the connection timeout
    TimedOut,
}

/// Station link state as seen by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StationLink {
    /// No attempt in this cycle
    #[default]
    Idle,
    /// Attempt in progress
    Connecting,
    /// Associated with the network
    Connected,
    /// Attempt ended without a connection
    Failed(LinkFailure),
}

impl StationLink {
    /// Map a driver status to a link state
    ///
    /// Non-terminal statuses map to [`StationLink::Connecting`].
    pub fn from_status(status: LinkStatus) -> Self {
        match status {
            LinkStatus::Connected => StationLink::Connected,
            LinkStatus::NoNetworkFound => StationLink::Failed(LinkFailure::NoNetworkFound),
            LinkStatus::AuthenticationRejected => {
                StationLink::Failed(LinkFailure::AuthenticationRejected)
            }
            LinkStatus::NoRadioHardware => StationLink::Failed(LinkFailure::NoRadioHardware),
            LinkStatus::Idle
            | LinkStatus::Disconnected
            | LinkStatus::ScanInProgress
            | LinkStatus::Unknown(_) => StationLink::Connecting,
        }
    }

    /// Whether polling can stop
    pub fn is_terminal(&self) -> bool {
        matches!(self, StationLink::Connected | StationLink::Failed(_))
    }

    /// Whether the station is connected
    pub fn is_connected(&self) -> bool {
        matches!(self, StationLink::Connected)
    }
}
