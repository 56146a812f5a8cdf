//! Configuration type definitions
//!
//! [`ConnectivityConfig`] is the operator's desired connectivity. It is
//! stored as postcard-serialized binary data (see [`super::persistence`]).

use core::fmt;

use heapless::String;
use ptz_protocol::VISCA_UDP_PORT;
use serde::{Deserialize, Serialize};

/// Maximum SSID length (IEEE 802.11)
pub const MAX_SSID_LEN: usize = 32;

/// Maximum station password length (WPA2 passphrase + margin)
pub const MAX_PASSWORD_LEN: usize = 64;

/// Default access point password (at least eight characters, otherwise the
/// driver falls back to an open network)
pub const DEFAULT_AP_PASSWORD: &str = "arduino1";

/// Default station connection timeout
pub const DEFAULT_CONNECT_TIMEOUT_MS: u32 = 20_000;

/// Default station status poll interval
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 500;

/// Credentials do not fit the fixed-capacity fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CredentialsTooLong;

/// Desired connectivity modes and station credentials
///
/// Invariants (enforced by [`repair`](Self::repair) and
/// [`clear_unused_credentials`](Self::clear_unused_credentials) before every
/// apply and save):
/// - at least one mode is enabled
/// - credentials are empty while station mode is disabled
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectivityConfig {
    /// Join an existing network as a client
    pub station_enabled: bool,
    /// Host the configuration access point
    pub ap_enabled: bool,
    /// Enable the connectionless peer link
    pub espnow_enabled: bool,
    /// Network to join in station mode
    pub station_ssid: String<MAX_SSID_LEN>,
    /// Passphrase for the station network
    pub station_password: String<MAX_PASSWORD_LEN>,
}

impl Default for ConnectivityConfig {
    fn default() -> Self {
        Self::access_point()
    }
}

impl ConnectivityConfig {
    /// Access point only (the factory default)
    pub fn access_point() -> Self {
        Self {
            station_enabled: false,
            ap_enabled: true,
            espnow_enabled: false,
            station_ssid: String::new(),
            station_password: String::new(),
        }
    }

    /// Enable station mode with the given credentials
    pub fn with_station(mut self, ssid: &str, password: &str) -> Result<Self, CredentialsTooLong> {
        self.station_ssid = String::try_from(ssid).map_err(|_| CredentialsTooLong)?;
        self.station_password = String::try_from(password).map_err(|_| CredentialsTooLong)?;
        self.station_enabled = true;
        Ok(self)
    }

    /// Set the access point flag
    pub fn with_access_point(mut self, enabled: bool) -> Self {
        self.ap_enabled = enabled;
        self
    }

    /// Set the peer link flag
    pub fn with_espnow(mut self, enabled: bool) -> Self {
        self.espnow_enabled = enabled;
        self
    }

    /// Whether any mode is enabled
    pub fn any_enabled(&self) -> bool {
        self.station_enabled || self.ap_enabled || self.espnow_enabled
    }

    /// Force the access point on if every mode is disabled
    ///
    /// Returns true if the configuration was changed.
    pub fn repair(&mut self) -> bool {
        if self.any_enabled() {
            return false;
        }
        self.ap_enabled = true;
        true
    }

    /// Drop station credentials unless station mode is enabled
    pub fn clear_unused_credentials(&mut self) {
        if !self.station_enabled {
            self.station_ssid.clear();
            self.station_password.clear();
        }
    }

    /// Disable station mode and fall back to the access point
    pub fn fall_back_to_access_point(&mut self) {
        self.station_enabled = false;
        self.ap_enabled = true;
        self.clear_unused_credentials();
    }
}

impl fmt::Debug for ConnectivityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectivityConfig")
            .field("station_enabled", &self.station_enabled)
            .field("ap_enabled", &self.ap_enabled)
            .field("espnow_enabled", &self.espnow_enabled)
            .field("station_ssid", &self.station_ssid)
            .field("station_password", &"<redacted>")
            .finish()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConnectivityConfig {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "ConnectivityConfig {{ station_enabled: {}, ap_enabled: {}, espnow_enabled: {}, station_ssid: {}, station_password: <redacted> }}",
            self.station_enabled,
            self.ap_enabled,
            self.espnow_enabled,
            self.station_ssid.as_str()
        )
    }
}

/// Controller tunables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControllerSettings {
    /// Upper bound for a station connection attempt
    pub connect_timeout_ms: u32,
    /// Delay between station status polls
    pub poll_interval_ms: u32,
    /// Access point passphrase
    pub ap_password: &'static str,
    /// Datagram port the command transport listens on
    pub command_port: u16,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            connect_timeout_ms: DEFAULT_CONNECT_TIMEOUT_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            ap_password: DEFAULT_AP_PASSWORD,
            command_port: VISCA_UDP_PORT,
        }
    }
}
