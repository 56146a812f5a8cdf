//! Datagram transport abstractions
//!
//! The command protocol is carried over connectionless datagrams. The
//! transport is polled: `receive` never blocks waiting for traffic.

use core::fmt;

/// Remote endpoint (IPv4 address + port)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PeerAddr {
    /// IPv4 address octets
    pub ip: [u8; 4],
    /// UDP port
    pub port: u16,
}

impl PeerAddr {
    /// Create a new endpoint
    pub const fn new(ip: [u8; 4], port: u16) -> Self {
        Self { ip, port }
    }
}

impl fmt::Display for PeerAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.ip;
        write!(f, "{}.{}.{}.{}:{}", a, b, c, d, self.port)
    }
}

/// Errors from datagram operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError {
    /// Socket not bound / network down
    NotReady,
    /// Outbound buffer full
    Busy,
    /// Send failed in the network stack
    Io,
}

/// Polled datagram socket
pub trait DatagramTransport {
    /// Take the next pending datagram, if any
    ///
    /// Copies at most `buffer.len()` bytes (excess bytes of a larger datagram
    /// are discarded) and returns the copied length and the sender.
    /// Returns `None` immediately when nothing is pending.
    fn receive(&mut self, buffer: &mut [u8]) -> Option<(usize, PeerAddr)>;

    /// Send a single datagram to `addr`
    fn send_to(&mut self, addr: PeerAddr, data: &[u8]) -> Result<(), TransportError>;
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::format;

    #[test]
    fn test_peer_display() {
        let peer = PeerAddr::new([192, 168, 4, 2], 52381);
        assert_eq!(format!("{}", peer), "192.168.4.2:52381");
    }
}
