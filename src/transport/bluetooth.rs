//! # Bluetooth RFCOMM Transport
//!
//! Sends jobs to a printer bound to an RFCOMM device node over the Serial
//! Port Profile.
//!
//! ## Setup (Linux)
//!
//! ```bash
//! $ bluetoothctl
//! [bluetooth]# pair 00:11:62:XX:XX:XX
//! $ sudo rfcomm bind 0 00:11:62:XX:XX:XX   # creates /dev/rfcomm0
//! ```
//!
//! The device is opened per job in raw TTY mode (no CR/LF translation, no
//! XON/XOFF, 8-bit characters) and closed again afterwards, so a printer
//! that was power-cycled between notes is picked up on the next one.
//! Large jobs are written in chunks with a short pause between them.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::os::unix::io::AsRawFd;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use super::Transport;
use crate::error::SlipError;

/// Default RFCOMM device path
pub const DEFAULT_DEVICE: &str = "/dev/rfcomm0";

/// Chunk size for writes (bytes)
const CHUNK_SIZE: usize = 4096;

/// Delay between chunks
const CHUNK_DELAY: Duration = Duration::from_millis(2);

/// # Bluetooth Printer Transport
///
/// ```no_run
/// use taskslip::transport::{BluetoothTransport, Transport};
///
/// let transport = BluetoothTransport::new("/dev/rfcomm0");
/// transport.probe()?;
/// transport.send(&[0x1B, 0x40])?;
/// # Ok::<(), taskslip::error::SlipError>(())
/// ```
#[derive(Debug, Clone)]
pub struct BluetoothTransport {
    path: PathBuf,
}

impl BluetoothTransport {
    pub fn new<P: AsRef<Path>>(device: P) -> Self {
        Self {
            path: device.as_ref().to_path_buf(),
        }
    }

    /// Open the device and switch it to raw mode.
    ///
    /// Fails if the node does not exist (printer not bound), permission is
    /// denied (needs the dialout group) or the TTY cannot be configured.
    fn open(&self) -> Result<File, SlipError> {
        let file = OpenOptions::new().write(true).open(&self.path).map_err(|e| {
            SlipError::Transport(format!("Failed to open {}: {}", self.path.display(), e))
        })?;
        configure_tty_raw(file.as_raw_fd())?;
        Ok(file)
    }

    fn write_chunked(file: &mut File, data: &[u8]) -> Result<(), SlipError> {
        for (i, chunk) in data.chunks(CHUNK_SIZE).enumerate() {
            if i > 0 {
                thread::sleep(CHUNK_DELAY);
            }
            file.write_all(chunk)
                .map_err(|e| SlipError::Transport(format!("Write failed: {}", e)))?;
        }
        file.flush()
            .map_err(|e| SlipError::Transport(format!("Flush failed: {}", e)))
    }
}

impl Default for BluetoothTransport {
    fn default() -> Self {
        Self::new(DEFAULT_DEVICE)
    }
}

impl Transport for BluetoothTransport {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn probe(&self) -> Result<(), SlipError> {
        self.open()
            .map(drop)
            .map_err(|e| SlipError::NotConnected(e.to_string()))
    }

    fn send(&self, data: &[u8]) -> Result<(), SlipError> {
        let mut file = self.open()?;
        Self::write_chunked(&mut file, data)
    }
}

/// Configure a file descriptor for raw TTY mode.
///
/// Disables input processing (including XON/XOFF: 0x11 and 0x13 show up in
/// QR payloads and must not be eaten), output post-processing, echo and
/// canonical mode, and selects 8-bit characters without parity.
#[cfg(unix)]
fn configure_tty_raw(fd: i32) -> Result<(), SlipError> {
    use std::mem::MaybeUninit;

    let mut termios = MaybeUninit::uninit();
    // SAFETY: fd is an open descriptor and termios points to writable memory
    if unsafe { libc::tcgetattr(fd, termios.as_mut_ptr()) } != 0 {
        return Err(SlipError::Transport(format!(
            "tcgetattr failed: {}",
            io::Error::last_os_error()
        )));
    }
    // SAFETY: tcgetattr succeeded and filled the struct
    let mut termios = unsafe { termios.assume_init() };

    termios.c_iflag &= !(libc::IGNBRK
        | libc::BRKINT
        | libc::PARMRK
        | libc::ISTRIP
        | libc::INLCR
        | libc::IGNCR
        | libc::ICRNL
        | libc::IXON
        | libc::IXOFF
        | libc::IXANY);
    termios.c_oflag &= !libc::OPOST;
    termios.c_lflag &= !(libc::ECHO | libc::ECHONL | libc::ICANON | libc::ISIG | libc::IEXTEN);
    termios.c_cflag &= !(libc::CSIZE | libc::PARENB);
    termios.c_cflag |= libc::CS8;

    // SAFETY: termios is fully initialized
    if unsafe { libc::tcsetattr(fd, libc::TCSANOW, &termios) } != 0 {
        return Err(SlipError::Transport(format!(
            "tcsetattr failed: {}",
            io::Error::last_os_error()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_is_device_path() {
        assert_eq!(BluetoothTransport::default().describe(), "/dev/rfcomm0");
    }

    #[test]
    fn test_probe_missing_device_is_not_connected() {
        let transport = BluetoothTransport::new("/nonexistent/rfcomm-taskslip");
        assert!(matches!(transport.probe(), Err(SlipError::NotConnected(_))));
    }

    #[test]
    fn test_send_missing_device_is_transport_error() {
        let transport = BluetoothTransport::new("/nonexistent/rfcomm-taskslip");
        assert!(matches!(transport.send(b"x"), Err(SlipError::Transport(_))));
    }
}
