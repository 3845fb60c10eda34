//! # StarPRNT Protocol Implementation
//!
//! Byte-level command builders for Star Micronics receipt printers. Only the
//! codegen in [`crate::ir`] calls these; note commands never produce bytes
//! directly.
//!
//! ## Module Structure
//!
//! - [`commands`]: init, line feed, cutter
//! - [`text`]: alignment, bold, underline, character size
//! - [`barcode`]: Code39/Code128, QR codes, PDF417
//!
//! ```
//! use taskslip::protocol::{commands, text};
//!
//! let mut data = Vec::new();
//! data.extend(commands::init());
//! data.extend(text::bold_on());
//! data.extend(b"buy milk\n");
//! data.extend(text::bold_off());
//! data.extend(commands::cut_full_feed());
//! ```

pub mod barcode;
pub mod commands;
pub mod text;
