//! Diagnostic events
//!
//! Every locally recovered failure in the control plane is reported as a
//! structured [`Diagnostic`]. The outer runtime forwards these to its log
//! buffer or status page; nothing in the core reacts to them.

use ptz_hal::{RadioError, ServiceError, ServiceKind, TransportError};
use ptz_protocol::FrameError;

use crate::config::PersistError;
use crate::connectivity::LinkFailure;

/// Observable diagnostic event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Diagnostic {
    /// Datagram failed validation or decoding and was dropped
    FrameRejected(FrameError),
    /// Valid frame with an unknown command pair
    UnrecognizedCommand { cmd1: u8, cmd2: u8 },
    /// Position query dropped because no position provider is ready
    PositionUnavailable,
    /// Position reply could not be sent
    ReplyFailed(TransportError),
    /// Configuration had every mode disabled; access point forced on
    ConfigurationRepaired,
    /// Station attempt failed; fell back to access point
    StationFailed(LinkFailure),
    /// Access point could not be started
    AccessPointFailed(RadioError),
    /// Peer link could not be initialized; disabled and access point forced on
    PeerModeFailed(RadioError),
    /// Persisted configuration could not be read or written
    SettingsFailed(PersistError),
    /// Dependent service failed to start
    ServiceFailed(ServiceKind, ServiceError),
}

/// Receiver of diagnostic events
pub trait DiagnosticSink {
    /// Record one event
    fn record(&mut self, event: Diagnostic);
}

/// Sink that discards all events
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDiagnostics;

impl DiagnosticSink for NullDiagnostics {
    fn record(&mut self, _event: Diagnostic) {}
}

impl<D: DiagnosticSink + ?Sized> DiagnosticSink for &mut D {
    fn record(&mut self, event: Diagnostic) {
        (**self).record(event);
    }
}
