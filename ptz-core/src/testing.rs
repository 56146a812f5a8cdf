//! Hand-written collaborator mocks for unit tests

use std::collections::{HashMap, VecDeque};

use embedded_hal::delay::DelayNs;
use ptz_hal::{
    DatagramTransport, HomingTrigger, LinkStatus, PeerAddr, PositionProvider, RadioError,
    RadioMode, ServiceContext, ServiceError, ServiceKind, ServiceLauncher, SettingsStore,
    StorageError, StorageKey, TransportError, WifiRadio,
};

use crate::diag::{Diagnostic, DiagnosticSink};

/// Key-value store backed by a hash map
#[derive(Debug, Default)]
pub struct MockStore {
    pub entries: HashMap<(String, u8), Vec<u8>>,
    pub puts: usize,
    pub fail_put: Option<StorageError>,
}

impl MockStore {
    pub fn contains(&self, namespace: &str, key: StorageKey) -> bool {
        self.raw(namespace, key).is_some()
    }

    pub fn raw(&self, namespace: &str, key: StorageKey) -> Option<&[u8]> {
        self.entries
            .get(&(namespace.to_string(), key.as_u8()))
            .map(Vec::as_slice)
    }
}

impl SettingsStore for MockStore {
    fn get(
        &mut self,
        namespace: &str,
        key: StorageKey,
        buffer: &mut [u8],
    ) -> Result<usize, StorageError> {
        let data = self
            .entries
            .get(&(namespace.to_string(), key.as_u8()))
            .ok_or(StorageError::NotFound)?;
        if data.len() > buffer.len() {
            return Err(StorageError::BufferTooSmall);
        }
        buffer[..data.len()].copy_from_slice(data);
        Ok(data.len())
    }

    fn put(&mut self, namespace: &str, key: StorageKey, data: &[u8]) -> Result<(), StorageError> {
        if let Some(e) = self.fail_put {
            return Err(e);
        }
        self.puts += 1;
        self.entries
            .insert((namespace.to_string(), key.as_u8()), data.to_vec());
        Ok(())
    }
}

/// Radio call log entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RadioCall {
    Disconnect,
    SetMode(RadioMode),
    BeginStation(String, String),
    StartAccessPoint(String, String),
    InitPeerLink,
}

/// Scripted radio
///
/// `link_status` pops from `statuses` and then keeps returning
/// `steady_status`.
#[derive(Debug)]
pub struct MockRadio {
    pub calls: Vec<RadioCall>,
    pub statuses: VecDeque<LinkStatus>,
    pub steady_status: LinkStatus,
    pub ap_result: Result<(), RadioError>,
    pub peer_result: Result<(), RadioError>,
    pub mac: [u8; 6],
    pub mode: Option<RadioMode>,
    pub station_connected: bool,
    pub ap_active: bool,
    pub status_polls: usize,
}

impl Default for MockRadio {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            statuses: VecDeque::new(),
            steady_status: LinkStatus::Connected,
            ap_result: Ok(()),
            peer_result: Ok(()),
            mac: [0x24, 0x6F, 0x28, 0xA1, 0xB2, 0xC3],
            mode: None,
            station_connected: false,
            ap_active: false,
            status_polls: 0,
        }
    }
}

impl MockRadio {
    pub fn with_statuses(statuses: &[LinkStatus], steady: LinkStatus) -> Self {
        Self {
            statuses: statuses.iter().copied().collect(),
            steady_status: steady,
            ..Self::default()
        }
    }

    pub fn count(&self, call: &RadioCall) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }

    pub fn last_mode(&self) -> Option<RadioMode> {
        self.calls.iter().rev().find_map(|c| match c {
            RadioCall::SetMode(mode) => Some(*mode),
            _ => None,
        })
    }

    pub fn started_station(&self) -> bool {
        self.calls
            .iter()
            .any(|c| matches!(c, RadioCall::BeginStation(..)))
    }
}

impl WifiRadio for MockRadio {
    fn disconnect(&mut self) {
        self.calls.push(RadioCall::Disconnect);
        self.station_connected = false;
    }

    fn set_mode(&mut self, mode: RadioMode) {
        self.calls.push(RadioCall::SetMode(mode));
        self.mode = Some(mode);
        if !mode.has_ap() {
            self.ap_active = false;
        }
        if !mode.has_station() {
            self.station_connected = false;
        }
    }

    fn begin_station(&mut self, ssid: &str, password: &str) {
        self.calls
            .push(RadioCall::BeginStation(ssid.to_string(), password.to_string()));
    }

    fn link_status(&mut self) -> LinkStatus {
        self.status_polls += 1;
        let status = self.statuses.pop_front().unwrap_or(self.steady_status);
        self.station_connected = status == LinkStatus::Connected;
        status
    }

    fn start_access_point(&mut self, ssid: &str, password: &str) -> Result<(), RadioError> {
        self.calls
            .push(RadioCall::StartAccessPoint(ssid.to_string(), password.to_string()));
        self.ap_active = self.ap_result.is_ok();
        self.ap_result
    }

    fn init_peer_link(&mut self) -> Result<(), RadioError> {
        self.calls.push(RadioCall::InitPeerLink);
        self.peer_result
    }

    fn mac_address(&self) -> [u8; 6] {
        self.mac
    }

    fn station_ip(&self) -> Option<[u8; 4]> {
        self.station_connected.then_some([192, 168, 1, 50])
    }

    fn access_point_ip(&self) -> Option<[u8; 4]> {
        self.ap_active.then_some([192, 168, 4, 1])
    }
}

/// Records every service start request
#[derive(Debug, Default)]
pub struct MockLauncher {
    pub started: Vec<ServiceKind>,
    pub contexts: Vec<(ServiceKind, String, u16)>,
    pub fail: Option<(ServiceKind, ServiceError)>,
}

impl MockLauncher {
    pub fn context_for(&self, service: ServiceKind) -> Option<(&str, u16)> {
        self.contexts
            .iter()
            .find(|(kind, _, _)| *kind == service)
            .map(|(_, hostname, port)| (hostname.as_str(), *port))
    }
}

impl ServiceLauncher for MockLauncher {
    fn start(
        &mut self,
        service: ServiceKind,
        context: &ServiceContext<'_>,
    ) -> Result<(), ServiceError> {
        self.started.push(service);
        self.contexts
            .push((service, context.hostname.to_string(), context.port));
        match self.fail {
            Some((kind, e)) if kind == service => Err(e),
            _ => Ok(()),
        }
    }
}

/// Delay that only accumulates the requested time
#[derive(Debug, Default)]
pub struct MockDelay {
    pub total_ns: u64,
}

impl MockDelay {
    pub fn total_ms(&self) -> u64 {
        self.total_ns / 1_000_000
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}

/// Scripted datagram transport
#[derive(Debug, Default)]
pub struct MockTransport {
    pub inbound: VecDeque<(Vec<u8>, PeerAddr)>,
    pub sent: Vec<(PeerAddr, Vec<u8>)>,
    pub send_error: Option<TransportError>,
}

impl MockTransport {
    pub fn push(&mut self, bytes: &[u8], from: PeerAddr) {
        self.inbound.push_back((bytes.to_vec(), from));
    }
}

impl DatagramTransport for MockTransport {
    fn receive(&mut self, buffer: &mut [u8]) -> Option<(usize, PeerAddr)> {
        let (bytes, from) = self.inbound.pop_front()?;
        let len = bytes.len().min(buffer.len());
        buffer[..len].copy_from_slice(&bytes[..len]);
        Some((len, from))
    }

    fn send_to(&mut self, addr: PeerAddr, data: &[u8]) -> Result<(), TransportError> {
        if let Some(e) = self.send_error {
            return Err(e);
        }
        self.sent.push((addr, data.to_vec()));
        Ok(())
    }
}

/// Fixed position
#[derive(Debug, Clone, Copy)]
pub struct MockPosition {
    pub pan: i16,
    pub tilt: i16,
    pub ready: bool,
}

impl PositionProvider for MockPosition {
    fn current_pan(&self) -> i16 {
        self.pan
    }

    fn current_tilt(&self) -> i16 {
        self.tilt
    }

    fn is_ready(&self) -> bool {
        self.ready
    }
}

/// Counts homing requests
#[derive(Debug, Default)]
pub struct MockHoming {
    pub count: usize,
}

impl HomingTrigger for MockHoming {
    fn trigger_home(&mut self) {
        self.count += 1;
    }
}

/// Keeps every diagnostic event
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    pub events: Vec<Diagnostic>,
}

impl DiagnosticSink for RecordingDiagnostics {
    fn record(&mut self, event: Diagnostic) {
        self.events.push(event);
    }
}
