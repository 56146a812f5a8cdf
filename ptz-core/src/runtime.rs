//! Cooperative control loop
//!
//! One iteration runs controller housekeeping, then at most one protocol
//! dispatch. Frames are only polled once the controller has settled and
//! the command transport is running.

use embedded_hal::delay::DelayNs;
use ptz_hal::{
    DatagramTransport, HomingTrigger, PositionProvider, ServiceKind, ServiceLauncher,
    SettingsStore, WifiRadio,
};

use crate::connectivity::ConnectivityController;
use crate::diag::DiagnosticSink;
use crate::engine::{Dispatch, ProtocolEngine};

/// Periodic connectivity housekeeping
pub trait Supervisor {
    /// Run pending work; returns true if an apply cycle ran
    fn tick(&mut self) -> bool;

    /// Whether command frames can be processed
    fn ready_for_commands(&self) -> bool;
}

/// Source of protocol dispatches
pub trait CommandPump {
    /// Process at most one frame
    fn poll_once(&mut self) -> Dispatch;
}

impl<R, S, L, T, D> Supervisor for ConnectivityController<R, S, L, T, D>
where
    R: WifiRadio,
    S: SettingsStore,
    L: ServiceLauncher,
    T: DelayNs,
    D: DiagnosticSink,
{
    fn tick(&mut self) -> bool {
        ConnectivityController::tick(self)
    }

    fn ready_for_commands(&self) -> bool {
        self.is_settled() && self.service_active(ServiceKind::CommandTransport)
    }
}

impl<T, P, H, D> CommandPump for ProtocolEngine<'_, T, P, H, D>
where
    T: DatagramTransport,
    P: PositionProvider,
    H: HomingTrigger,
    D: DiagnosticSink,
{
    fn poll_once(&mut self) -> Dispatch {
        ProtocolEngine::poll_once(self)
    }
}

/// Single-context loop driving the controller and the engine
pub struct ControlLoop<C, E> {
    controller: C,
    engine: E,
}

impl<C: Supervisor, E: CommandPump> ControlLoop<C, E> {
    /// Create a new loop
    pub fn new(controller: C, engine: E) -> Self {
        Self { controller, engine }
    }

    /// Run one iteration
    ///
    /// Returns `None` if frames are not being processed yet.
    pub fn run_once(&mut self) -> Option<Dispatch> {
        if self.controller.tick() {
            debug!("apply cycle finished");
        }
        if !self.controller.ready_for_commands() {
            return None;
        }
        Some(self.engine.poll_once())
    }

    /// Access the controller
    pub fn controller(&self) -> &C {
        &self.controller
    }

    /// Mutably access the controller (for example to queue a configuration)
    pub fn controller_mut(&mut self) -> &mut C {
        &mut self.controller
    }

    /// Access the engine
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Mutably access the engine
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }
}
