//! Connectivity mode controller
//!
//! Arbitrates between station, access point and peer link modes. A new
//! configuration is queued with [`ConnectivityController::apply`] and
//! applied by the next [`ConnectivityController::tick`]:
//!
//! ```text
//! repair -> disconnect -> set mode -> [station attempt -> fallback]
//!        -> [access point] -> [peer link -> fallback] -> persist -> services
//! ```
//!
//! The station attempt blocks for at most the configured connection
//! timeout. No frames are processed while it runs.

use core::fmt::Write;

use embedded_hal::delay::DelayNs;
use heapless::String;
use ptz_hal::{
    RadioMode, ServiceContext, ServiceKind, ServiceLauncher, SettingsStore, WifiRadio,
};

use super::link::{LinkFailure, StationLink};
use super::mode::resolve;
use super::services::ServiceSupervisor;
use super::state::{ControllerEvent, ControllerState, RuntimeState};
use crate::config::{ConfigPersistence, ConnectivityConfig, ControllerSettings};
use crate::diag::{Diagnostic, DiagnosticSink};

/// Prefix of the access point SSID and hostname
pub const ACCESS_POINT_PREFIX: &str = "DB_";

/// Capacity of the access point name
pub const ACCESS_POINT_NAME_LEN: usize = 16;

/// Capacity of the status summary
pub const STATUS_LEN: usize = 64;

/// Build the access point SSID from the last three MAC bytes
pub fn access_point_name(mac: [u8; 6]) -> String<ACCESS_POINT_NAME_LEN> {
    let mut name = String::new();
    let _ = write!(
        name,
        "{}{:02X}{:02X}{:02X}",
        ACCESS_POINT_PREFIX, mac[3], mac[4], mac[5]
    );
    name
}

fn write_ip(out: &mut String<STATUS_LEN>, ip: [u8; 4]) -> core::fmt::Result {
    write!(out, "{}.{}.{}.{}", ip[0], ip[1], ip[2], ip[3])
}

/// Connectivity mode controller
pub struct ConnectivityController<R, S, L, T, D> {
    radio: R,
    persistence: ConfigPersistence<S>,
    launcher: L,
    delay: T,
    diagnostics: D,
    settings: ControllerSettings,
    state: ControllerState,
    pending: Option<ConnectivityConfig>,
    active: ConnectivityConfig,
    mode: Option<RadioMode>,
    runtime: RuntimeState,
    services: ServiceSupervisor,
}

impl<R, S, L, T, D> ConnectivityController<R, S, L, T, D>
where
    R: WifiRadio,
    S: SettingsStore,
    L: ServiceLauncher,
    T: DelayNs,
    D: DiagnosticSink,
{
    /// Create a new controller
    ///
    /// Nothing touches the radio until the first [`tick`](Self::tick).
    pub fn new(
        radio: R,
        store: S,
        launcher: L,
        delay: T,
        diagnostics: D,
        settings: ControllerSettings,
    ) -> Self {
        Self {
            radio,
            persistence: ConfigPersistence::new(store),
            launcher,
            delay,
            diagnostics,
            settings,
            state: ControllerState::Unconfigured,
            pending: None,
            active: ConnectivityConfig::default(),
            mode: None,
            runtime: RuntimeState::default(),
            services: ServiceSupervisor::new(),
        }
    }

    /// Queue a configuration for the next tick
    ///
    /// A configuration queued before the previous one was applied replaces it.
    pub fn apply(&mut self, config: ConnectivityConfig) {
        self.pending = Some(config);
    }

    /// Run pending work
    ///
    /// The first call loads the stored configuration unless one was queued.
    /// Returns true if an apply cycle ran.
    pub fn tick(&mut self) -> bool {
        let config = match self.pending.take() {
            Some(config) => config,
            None if self.state == ControllerState::Unconfigured => self.load_stored(),
            None => return false,
        };
        self.run_cycle(config);
        true
    }

    fn load_stored(&mut self) -> ConnectivityConfig {
        let (config, error) = self.persistence.load_or_default();
        if let Some(e) = error {
            warn!("stored settings unusable: {:?}", e);
            self.diagnostics.record(Diagnostic::SettingsFailed(e));
        }
        config
    }

    fn run_cycle(&mut self, mut config: ConnectivityConfig) {
        self.state = self.state.transition(ControllerEvent::ApplyStarted);
        self.runtime = RuntimeState::default();

        if config.repair() {
            warn!("all modes disabled, enabling access point");
            self.diagnostics.record(Diagnostic::ConfigurationRepaired);
        }
        config.clear_unused_credentials();

        self.radio.disconnect();
        let mut mode = resolve(&config);
        info!("radio mode: {:?}", mode);
        self.radio.set_mode(mode);

        if config.station_enabled {
            let link = self.connect_station(&config);
            self.runtime.station = link;
            if let StationLink::Failed(reason) = link {
                warn!("station failed: {:?}, falling back to access point", reason);
                self.diagnostics.record(Diagnostic::StationFailed(reason));
                self.runtime.hardware_absent = reason == LinkFailure::NoRadioHardware;
                config.fall_back_to_access_point();
                mode = resolve(&config);
                self.radio.set_mode(mode);
            }
        }

        if config.ap_enabled {
            self.start_access_point();
        }

        if config.espnow_enabled {
            match self.radio.init_peer_link() {
                Ok(()) => {
                    info!("peer link initialized");
                    self.runtime.espnow_active = true;
                }
                Err(e) => {
                    warn!("peer link failed: {:?}", e);
                    self.diagnostics.record(Diagnostic::PeerModeFailed(e));
                    config.espnow_enabled = false;
                    config.ap_enabled = true;
                    let fallback = resolve(&config);
                    if fallback != mode {
                        mode = fallback;
                        self.radio.set_mode(mode);
                    }
                    if !self.runtime.ap_active {
                        self.start_access_point();
                    }
                }
            }
        }

        match self.persistence.save(&config) {
            Ok(()) => debug!("settings saved"),
            Err(e) => {
                warn!("settings not saved: {:?}", e);
                self.diagnostics.record(Diagnostic::SettingsFailed(e));
            }
        }

        let hostname = self.device_name();
        let context = ServiceContext {
            hostname: &hostname,
            port: self.settings.command_port,
        };
        self.services
            .ensure_started(&mut self.launcher, &context, &mut self.diagnostics);

        self.active = config;
        self.mode = Some(mode);
        self.runtime.config_applied = true;
        self.state = self.state.transition(ControllerEvent::ApplyFinished);
    }

    /// Begin a station connection and poll until a terminal status or the
    /// timeout
    fn connect_station(&mut self, config: &ConnectivityConfig) -> StationLink {
        info!("connecting to {}", config.station_ssid.as_str());
        self.radio
            .begin_station(&config.station_ssid, &config.station_password);
        self.runtime.station = StationLink::Connecting;

        let interval = self.settings.poll_interval_ms.max(1);
        let timeout = self.settings.connect_timeout_ms;
        let mut elapsed: u32 = 0;
        loop {
            let link = StationLink::from_status(self.radio.link_status());
            if link.is_terminal() {
                return link;
            }
            if elapsed >= timeout {
                return StationLink::Failed(LinkFailure::TimedOut);
            }
            // Last step is shortened so the final poll lands on the timeout
            let step = interval.min(timeout - elapsed);
            self.delay.delay_ms(step);
            elapsed += step;
        }
    }

    fn start_access_point(&mut self) {
        let name = self.device_name();
        match self
            .radio
            .start_access_point(&name, self.settings.ap_password)
        {
            Ok(()) => {
                info!("access point {} started", name.as_str());
                self.runtime.ap_active = true;
            }
            Err(e) => {
                error!("access point failed: {:?}", e);
                self.runtime.ap_active = false;
                self.diagnostics.record(Diagnostic::AccessPointFailed(e));
            }
        }
    }

    /// Human-readable mode and address summary
    ///
    /// `Status: <modes> | IP: <address>`, where modes are the active ones
    /// joined by `+` and the address is the station IP when connected, else
    /// the access point IP.
    pub fn status(&self) -> String<STATUS_LEN> {
        let mut out = String::new();
        if self.runtime.hardware_absent {
            let _ = out.push_str("Status: No radio hardware");
            return out;
        }

        let modes = [
            (self.runtime.station.is_connected(), "Station"),
            (self.runtime.ap_active, "AP"),
            (self.runtime.espnow_active, "ESPNOW"),
        ];

        let _ = out.push_str("Status: ");
        let mut any = false;
        for (_, label) in modes.iter().filter(|(on, _)| *on) {
            if any {
                let _ = out.push('+');
            }
            let _ = out.push_str(label);
            any = true;
        }
        if !any {
            let _ = out.push_str("None");
        }

        let _ = out.push_str(" | IP: ");
        let station_ip = if self.runtime.station.is_connected() {
            self.radio.station_ip()
        } else {
            None
        };
        match station_ip.or_else(|| self.radio.access_point_ip()) {
            Some(ip) => {
                let _ = write_ip(&mut out, ip);
            }
            None => {
                let _ = out.push_str("Not connected");
            }
        }
        out
    }

    /// Access point SSID, also used as the network hostname
    pub fn device_name(&self) -> String<ACCESS_POINT_NAME_LEN> {
        access_point_name(self.radio.mac_address())
    }

    /// Current lifecycle state
    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Whether an apply cycle has completed
    pub fn is_settled(&self) -> bool {
        self.state.is_settled()
    }

    /// Effective configuration after the last apply cycle
    pub fn active_config(&self) -> &ConnectivityConfig {
        &self.active
    }

    /// Radio mode set by the last apply cycle
    pub fn radio_mode(&self) -> Option<RadioMode> {
        self.mode
    }

    /// Transient connectivity state
    pub fn runtime(&self) -> &RuntimeState {
        &self.runtime
    }

    /// Whether a dependent service is running
    pub fn service_active(&self, service: ServiceKind) -> bool {
        self.services.is_active(service)
    }

    /// Whether a configuration is waiting for the next tick
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Access the radio
    pub fn radio(&self) -> &R {
        &self.radio
    }

    /// Access the settings store
    pub fn store(&self) -> &S {
        self.persistence.store()
    }

    /// Access the service launcher
    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    /// Access the delay provider
    pub fn delay(&self) -> &T {
        &self.delay
    }

    /// Access the diagnostic sink
    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }
}
