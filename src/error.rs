//! # Error Types
//!
//! This module defines the error type shared by the printer, transport and
//! session layers. Markup problems are not errors here: the lexer has its own
//! [`LexError`](crate::markup::LexError), which the compiler recovers from.

use thiserror::Error;

/// Main error type for taskslip operations
#[derive(Debug, Error)]
pub enum SlipError {
    /// Transport-level errors (open, write, flush)
    #[error("Transport error: {0}")]
    Transport(String),

    /// The printer did not answer the connectivity probe
    #[error("Printer not connected: {0}")]
    NotConnected(String),

    /// Invalid printer profile or CLI configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error wrapper (prompt input, preview output)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
