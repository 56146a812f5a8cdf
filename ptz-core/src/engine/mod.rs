//! Command protocol engine
//!
//! One inbound datagram per [`ProtocolEngine::poll_once`]:
//!
//! ```text
//! Idle -> Validate -> Classify -> Home     -> homing trigger
//!                              -> Movement -> setpoint slot
//!                              -> Query    -> reply to sender
//!                              -> Drop     -> diagnostic
//! ```
//!
//! The engine never blocks waiting for a frame. Only position queries
//! produce a reply.

use ptz_hal::{DatagramTransport, HomingTrigger, PeerAddr, PositionProvider, TransportError};
use ptz_protocol::{
    classify, decode, validate, Command, FrameError, MovementSetpoint, PositionReport,
    MAX_DATAGRAM_SIZE,
};

use crate::diag::{Diagnostic, DiagnosticSink};
use crate::motion::SetpointSlot;

/// Why a datagram produced no effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DropReason {
    /// Failed validation or decoding
    InvalidFrame(FrameError),
    /// Valid frame with an unknown command pair
    Unrecognized { cmd1: u8, cmd2: u8 },
    /// Position query with no ready position provider
    PositionUnavailable,
    /// Position reply could not be sent
    SendFailed(TransportError),
}

impl From<DropReason> for Diagnostic {
    fn from(reason: DropReason) -> Self {
        match reason {
            DropReason::InvalidFrame(e) => Diagnostic::FrameRejected(e),
            DropReason::Unrecognized { cmd1, cmd2 } => {
                Diagnostic::UnrecognizedCommand { cmd1, cmd2 }
            }
            DropReason::PositionUnavailable => Diagnostic::PositionUnavailable,
            DropReason::SendFailed(e) => Diagnostic::ReplyFailed(e),
        }
    }
}

/// Outcome of one poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dispatch {
    /// No datagram waiting
    Idle,
    /// Homing triggered
    Homed,
    /// Movement setpoint published
    Moved(MovementSetpoint),
    /// Position reply sent
    Reported(PositionReport),
    /// Datagram dropped
    Dropped(DropReason),
}

impl Dispatch {
    /// Whether no datagram was waiting
    pub fn is_idle(&self) -> bool {
        matches!(self, Dispatch::Idle)
    }
}

/// Owned result of interpreting a frame
enum Action {
    Home,
    Query,
    Move(MovementSetpoint),
}

fn interpret(bytes: &[u8]) -> Result<Action, DropReason> {
    let frame = validate(bytes).map_err(DropReason::InvalidFrame)?;
    match classify(&frame) {
        Command::Home => Ok(Action::Home),
        Command::PositionQuery => Ok(Action::Query),
        Command::Movement { cmd1, cmd2 } => decode(cmd1, cmd2, &frame)
            .map(Action::Move)
            .map_err(DropReason::InvalidFrame),
        Command::Unrecognized { cmd1, cmd2 } => Err(DropReason::Unrecognized { cmd1, cmd2 }),
    }
}

/// Command protocol engine
pub struct ProtocolEngine<'a, T, P, H, D> {
    transport: T,
    position: Option<P>,
    homing: H,
    setpoints: &'a SetpointSlot,
    diagnostics: D,
    buffer: [u8; MAX_DATAGRAM_SIZE],
}

impl<'a, T, P, H, D> ProtocolEngine<'a, T, P, H, D>
where
    T: DatagramTransport,
    P: PositionProvider,
    H: HomingTrigger,
    D: DiagnosticSink,
{
    /// Create a new engine
    ///
    /// Position queries are dropped until a provider is attached.
    pub fn new(transport: T, homing: H, setpoints: &'a SetpointSlot, diagnostics: D) -> Self {
        Self {
            transport,
            position: None,
            homing,
            setpoints,
            diagnostics,
            buffer: [0; MAX_DATAGRAM_SIZE],
        }
    }

    /// Connect the position provider
    pub fn attach_position(&mut self, provider: P) {
        self.position = Some(provider);
    }

    /// Check if a position provider is attached
    pub fn has_position(&self) -> bool {
        self.position.is_some()
    }

    /// Process at most one waiting datagram
    pub fn poll_once(&mut self) -> Dispatch {
        let Some((len, from)) = self.transport.receive(&mut self.buffer) else {
            return Dispatch::Idle;
        };
        let len = len.min(self.buffer.len());
        debug!("datagram from {} ({} bytes)", from, len);

        match interpret(&self.buffer[..len]) {
            Ok(Action::Home) => {
                debug!("home");
                self.homing.trigger_home();
                Dispatch::Homed
            }
            Ok(Action::Move(setpoint)) => {
                debug!(
                    "move pan={} tilt={}",
                    setpoint.pan_speed, setpoint.tilt_speed
                );
                self.setpoints.publish(setpoint);
                Dispatch::Moved(setpoint)
            }
            Ok(Action::Query) => self.report_position(from),
            Err(reason) => self.dropped(reason),
        }
    }

    fn report_position(&mut self, to: PeerAddr) -> Dispatch {
        let report = match &self.position {
            Some(provider) if provider.is_ready() => PositionReport {
                pan: provider.current_pan(),
                tilt: provider.current_tilt().wrapping_neg(),
            },
            _ => return self.dropped(DropReason::PositionUnavailable),
        };

        match self.transport.send_to(to, &report.to_bytes()) {
            Ok(()) => {
                debug!("position pan={} tilt={} to {}", report.pan, report.tilt, to);
                Dispatch::Reported(report)
            }
            Err(e) => self.dropped(DropReason::SendFailed(e)),
        }
    }

    fn dropped(&mut self, reason: DropReason) -> Dispatch {
        warn!("datagram dropped: {:?}", reason);
        self.diagnostics.record(reason.into());
        Dispatch::Dropped(reason)
    }

    /// Access the transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Mutably access the transport
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Access the homing trigger
    pub fn homing(&self) -> &H {
        &self.homing
    }

    /// Access the diagnostic sink
    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }
}
