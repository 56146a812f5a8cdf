//! Dependent service supervision
//!
//! Starting a service that is already active is a no-op, so repeated apply
//! cycles never restart the HTTP interface, discovery responder or command
//! transport.

use ptz_hal::{ServiceContext, ServiceKind, ServiceLauncher};

use crate::diag::{Diagnostic, DiagnosticSink};

/// Tracks which dependent services are running
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ServiceSupervisor {
    active: [bool; ServiceKind::ALL.len()],
}

impl ServiceSupervisor {
    /// Create a supervisor with nothing running
    pub const fn new() -> Self {
        Self {
            active: [false; ServiceKind::ALL.len()],
        }
    }

    /// Check if a service is running
    pub fn is_active(&self, service: ServiceKind) -> bool {
        self.active[service.index()]
    }

    /// Start every inactive service
    ///
    /// Returns the number of services started.
    pub fn ensure_started<L, D>(
        &mut self,
        launcher: &mut L,
        context: &ServiceContext<'_>,
        diagnostics: &mut D,
    ) -> usize
    where
        L: ServiceLauncher,
        D: DiagnosticSink,
    {
        let mut started = 0;
        for service in ServiceKind::ALL {
            if self.is_active(service) {
                continue;
            }
            match launcher.start(service, context) {
                Ok(()) => {
                    info!("service started: {}", service.name());
                    self.active[service.index()] = true;
                    started += 1;
                }
                Err(e) => {
                    warn!("service {} failed: {:?}", service.name(), e);
                    diagnostics.record(Diagnostic::ServiceFailed(service, e));
                }
            }
        }
        started
    }
}
