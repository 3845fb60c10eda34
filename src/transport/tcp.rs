//! # Raw TCP Transport
//!
//! Network receipt printers accept print data on a raw socket (port 9100 on
//! most models). A connection is opened per job and closed after the write,
//! which is also when the printer starts printing.

use std::io::Write;
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

use super::Transport;
use crate::error::SlipError;

/// Conventional raw print port
pub const DEFAULT_PORT: u16 = 9100;

/// Connect timeout for probes and jobs
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Printer reachable over TCP.
#[derive(Debug, Clone)]
pub struct TcpTransport {
    addr: SocketAddr,
    timeout: Duration,
}

impl TcpTransport {
    pub fn new(addr: SocketAddr) -> Self {
        Self {
            addr,
            timeout: CONNECT_TIMEOUT,
        }
    }

    /// Resolve `host` or `host:port`; the port defaults to 9100.
    pub fn resolve(target: &str) -> Result<Self, SlipError> {
        let with_port = if target.rsplit_once(':').is_some_and(|(_, p)| p.parse::<u16>().is_ok()) {
            target.to_string()
        } else {
            format!("{}:{}", target, DEFAULT_PORT)
        };
        let addr = with_port
            .to_socket_addrs()
            .map_err(|e| SlipError::Config(format!("Cannot resolve {}: {}", target, e)))?
            .next()
            .ok_or_else(|| SlipError::Config(format!("No address for {}", target)))?;
        Ok(Self::new(addr))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    fn connect(&self) -> Result<TcpStream, SlipError> {
        let stream = TcpStream::connect_timeout(&self.addr, self.timeout)
            .map_err(|e| SlipError::Transport(format!("Connect to {} failed: {}", self.addr, e)))?;
        stream
            .set_write_timeout(Some(self.timeout))
            .map_err(|e| SlipError::Transport(format!("Socket setup failed: {}", e)))?;
        Ok(stream)
    }
}

impl Transport for TcpTransport {
    fn describe(&self) -> String {
        self.addr.to_string()
    }

    fn probe(&self) -> Result<(), SlipError> {
        self.connect()
            .map(drop)
            .map_err(|e| SlipError::NotConnected(e.to_string()))
    }

    fn send(&self, data: &[u8]) -> Result<(), SlipError> {
        let mut stream = self.connect()?;
        stream
            .write_all(data)
            .map_err(|e| SlipError::Transport(format!("Write failed: {}", e)))?;
        stream
            .flush()
            .map_err(|e| SlipError::Transport(format!("Flush failed: {}", e)))
    }
}
