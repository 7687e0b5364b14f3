//! Connectivity probing for the update pipeline.
//!
//! Every network-gated operation asks "is a network path currently usable?"
//! before doing anything. The answer is deliberately conservative: any
//! failure to probe counts as offline, never as an error to propagate.

use crate::libs::config::ProbeConfig;
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

/// Answers whether a network path is currently usable.
///
/// Implementations must be side-effect free and safe to call from any
/// thread; the checker queries the probe synchronously before spawning
/// background work.
pub trait Connectivity: Send + Sync {
    fn is_connected(&self) -> bool;
}

/// Probes connectivity by attempting a short TCP connect to a well-known
/// address. Resolution failures, timeouts and refused connections all
/// report offline.
pub struct TcpProbe {
    addr: String,
    timeout: Duration,
}

impl TcpProbe {
    pub fn new(config: &ProbeConfig) -> Self {
        Self {
            addr: config.addr.clone(),
            timeout: Duration::from_millis(config.timeout_ms),
        }
    }
}

impl Connectivity for TcpProbe {
    fn is_connected(&self) -> bool {
        let Ok(mut addrs) = self.addr.to_socket_addrs() else {
            return false;
        };
        let Some(addr) = addrs.next() else {
            return false;
        };
        TcpStream::connect_timeout(&addr, self.timeout).is_ok()
    }
}

/// Fixed-answer probe for hosts that track connectivity themselves.
pub struct StaticConnectivity(pub bool);

impl Connectivity for StaticConnectivity {
    fn is_connected(&self) -> bool {
        self.0
    }
}
