//! Wireless radio abstractions
//!
//! Provides the operations the connectivity controller needs from the
//! radio driver: selecting the interface mode, joining a network as a
//! client, hosting an access point and bringing up the peer link.

/// Interface mode the radio is powered in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RadioMode {
    /// Client interface only
    StationOnly,
    /// Access point interface only (also hosts the peer link)
    ApOnly,
    /// Client and access point interfaces together
    StationPlusAp,
}

impl RadioMode {
    /// Whether the client interface is powered
    pub fn has_station(self) -> bool {
        matches!(self, RadioMode::StationOnly | RadioMode::StationPlusAp)
    }

    /// Whether the access point interface is powered
    pub fn has_ap(self) -> bool {
        matches!(self, RadioMode::ApOnly | RadioMode::StationPlusAp)
    }
}

/// Station link status as reported by the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkStatus {
    /// Associated and addressed
    Connected,
    /// Requested network is not in range
    NoNetworkFound,
    /// Network rejected the credentials
    AuthenticationRejected,
    /// No radio hardware present
    NoRadioHardware,
    /// Driver idle, attempt not yet started
    Idle,
    /// Not associated (yet)
    Disconnected,
    /// Scan running as part of the attempt
    ScanInProgress,
    /// Any other driver-specific status code
    Unknown(u8),
}

/// Errors from radio operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RadioError {
    /// Access point could not be started
    AccessPoint,
    /// Peer-to-peer link could not be initialized
    PeerInit,
    /// Driver refused the request in the current mode
    InvalidMode,
}

/// Wireless radio driver
pub trait WifiRadio {
    /// Drop any station association
    fn disconnect(&mut self);

    /// Power the radio in the given interface mode
    fn set_mode(&mut self, mode: RadioMode);

    /// Begin joining a network; progress is observed via [`link_status`]
    ///
    /// [`link_status`]: WifiRadio::link_status
    fn begin_station(&mut self, ssid: &str, password: &str);

    /// Current station link status
    fn link_status(&mut self) -> LinkStatus;

    /// Host an access point with the given credentials
    fn start_access_point(&mut self, ssid: &str, password: &str) -> Result<(), RadioError>;

    /// Initialize the connectionless peer link
    fn init_peer_link(&mut self) -> Result<(), RadioError>;

    /// Station interface MAC address
    fn mac_address(&self) -> [u8; 6];

    /// Address assigned on the station interface, if associated
    fn station_ip(&self) -> Option<[u8; 4]>;

    /// Address of the hosted access point, if running
    fn access_point_ip(&self) -> Option<[u8; 4]>;
}
