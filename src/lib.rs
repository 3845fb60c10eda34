//! # Taskslip - Task Notes on a Thermal Printer
//!
//! Taskslip turns short notes typed at a prompt into printed slips on a Star
//! Micronics thermal printer. Each body line may carry lightweight markup
//! (`**bold**`, `__underline__`, `# title`, `:-- centered --:`, links and
//! `||qr:...||` codes) which is lexed, compiled to [`PrinterCommand`]s and
//! rendered both to the printer and to a plain-text preview.
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use taskslip::device::{Device, Printer};
//! use taskslip::note::{self, Note};
//! use taskslip::{PrinterCommand, PrinterConfig};
//!
//! let at = NaiveDate::from_ymd_opt(2026, 3, 3).unwrap().and_hms_opt(9, 15, 0).unwrap();
//! let note = Note::new("Groceries", at, vec!["buy **milk**".into()]);
//!
//! let mut printer = Printer::new(PrinterConfig::default());
//! let mut preview = Vec::new();
//! note::render(&note.commands(), &mut printer, &mut preview, 41)?;
//! PrinterCommand::Execute.render_to_device(&mut printer);
//!
//! let job = printer.take_job();
//! assert!(job.starts_with(&[0x1B, 0x40]));
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`markup`] | Line lexer and token compiler |
//! | [`command`] | Printer commands with device and preview rendering |
//! | [`note`] | Note assembly and lockstep rendering |
//! | [`session`] | Interactive, cancellable note loop |
//! | [`input`] | Line sources for the session |
//! | [`device`] | Device capabilities and the recording printer |
//! | [`ir`] | Printer operations and byte generation |
//! | [`protocol`] | StarPRNT command builders |
//! | [`transport`] | Bluetooth, TCP and in-memory backends |
//! | [`printer`] | Printer profiles |
//! | [`error`] | Error types |

pub mod command;
pub mod device;
pub mod error;
pub mod input;
pub mod ir;
pub mod markup;
pub mod note;
pub mod printer;
pub mod protocol;
pub mod session;
pub mod transport;

// Re-exports for convenience
pub use command::PrinterCommand;
pub use error::SlipError;
pub use printer::PrinterConfig;
pub use transport::BluetoothTransport;
