//! # Printer Module
//!
//! Printer profiles: line width, resolution and symbol tuning.
//!
//! ## Modules
//!
//! - [`config`]: Printer hardware and layout settings

pub mod config;

pub use config::{DEFAULT_COLUMNS, PrinterConfig};
