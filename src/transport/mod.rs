//! # Printer Transport Layer
//!
//! Delivers a compiled job to a printer. A transport only ever sees whole
//! jobs: the session compiles a note to bytes first and hands them over in
//! one [`Transport::send`] call.
//!
//! ## Available Transports
//!
//! - [`bluetooth`]: Bluetooth RFCOMM (Linux)
//! - [`tcp`]: raw TCP socket, port 9100 by convention
//! - [`MemoryTransport`]: keeps jobs in memory (dry runs, tests)

pub mod bluetooth;
pub mod tcp;

use std::sync::Mutex;

pub use bluetooth::BluetoothTransport;
pub use tcp::TcpTransport;

use crate::error::SlipError;

/// A way to reach a printer.
///
/// Methods block; the session calls them from `spawn_blocking`.
pub trait Transport: Send + Sync {
    /// Human-readable target, e.g. `/dev/rfcomm0` or `10.1.32.32:9100`.
    fn describe(&self) -> String;

    /// Check the printer is reachable.
    fn probe(&self) -> Result<(), SlipError>;

    /// Send one complete job.
    fn send(&self, data: &[u8]) -> Result<(), SlipError>;
}

/// Records jobs instead of printing them.
#[derive(Debug, Default)]
pub struct MemoryTransport {
    jobs: Mutex<Vec<Vec<u8>>>,
    offline: bool,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport whose probe always fails.
    pub fn offline() -> Self {
        Self {
            jobs: Mutex::new(Vec::new()),
            offline: true,
        }
    }

    /// Jobs sent so far, oldest first.
    pub fn jobs(&self) -> Vec<Vec<u8>> {
        self.jobs.lock().map(|jobs| jobs.clone()).unwrap_or_default()
    }
}

impl Transport for MemoryTransport {
    fn describe(&self) -> String {
        "memory".to_string()
    }

    fn probe(&self) -> Result<(), SlipError> {
        if self.offline {
            return Err(SlipError::NotConnected("memory transport is offline".into()));
        }
        Ok(())
    }

    fn send(&self, data: &[u8]) -> Result<(), SlipError> {
        self.probe()?;
        self.jobs
            .lock()
            .map_err(|_| SlipError::Transport("job log poisoned".into()))?
            .push(data.to_vec());
        Ok(())
    }
}
