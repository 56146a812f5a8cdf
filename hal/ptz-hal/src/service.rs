//! Dependent network services
//!
//! Services that need a working network interface and are (re)started by
//! the connectivity controller after every configuration cycle.

/// Services started once the radio is up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ServiceKind {
    /// HTTP configuration interface (and its mDNS registration)
    HttpConfig,
    /// Constrained-device discovery responder
    Discovery,
    /// Datagram socket carrying the command protocol
    CommandTransport,
}

impl ServiceKind {
    /// All services, in start order
    pub const ALL: [ServiceKind; 3] = [
        ServiceKind::HttpConfig,
        ServiceKind::Discovery,
        ServiceKind::CommandTransport,
    ];

    /// Index into per-service tables
    pub const fn index(self) -> usize {
        match self {
            ServiceKind::HttpConfig => 0,
            ServiceKind::Discovery => 1,
            ServiceKind::CommandTransport => 2,
        }
    }

    /// Short human-readable name
    pub const fn name(self) -> &'static str {
        match self {
            ServiceKind::HttpConfig => "http",
            ServiceKind::Discovery => "discovery",
            ServiceKind::CommandTransport => "command",
        }
    }
}

/// Errors from starting a service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ServiceError {
    /// Socket bind or listener setup failed
    Bind,
    /// Name registration (mDNS, multicast join) failed
    Registration,
}

/// Device identity handed to every service on start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ServiceContext<'a> {
    /// Network hostname (mDNS name), same as the access point SSID
    pub hostname: &'a str,
    /// Datagram port of the command transport
    pub port: u16,
}

/// Starts dependent services
///
/// The caller tracks which services are active and only calls `start` for
/// inactive ones.
pub trait ServiceLauncher {
    /// Start a single service
    fn start(
        &mut self,
        service: ServiceKind,
        context: &ServiceContext<'_>,
    ) -> Result<(), ServiceError>;
}
