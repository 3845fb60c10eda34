//! # StarPRNT Control Commands
//!
//! Escape prefixes plus the printer control sequences a note needs:
//! initialization, line feed and the auto-cutter.
//!
//! ## Escape Sequence Structure
//!
//! - Single byte: `LF`
//! - Two bytes: `ESC @`, `ESC E`
//! - With parameters: `ESC d n`, `ESC GS y S 2 n`
//!
//! Multi-byte integers are little-endian: `0x1234` is sent as `[0x34, 0x12]`.
//!
//! ## Reference
//!
//! Based on "StarPRNT Command Specifications Rev. 4.10"
//! by Star Micronics Co., Ltd.

/// ESC (Escape) - Command prefix byte
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - Extended command prefix, used after ESC
pub const GS: u8 = 0x1D;

/// RS (Record Separator) - Terminates 1D barcode data
pub const RS: u8 = 0x1E;

/// LF (Line Feed) - Print the line buffer and advance one line
pub const LF: u8 = 0x0A;

/// # Initialize Printer (ESC @)
///
/// Resets formatting (bold, underline, size, alignment) to the power-on
/// state. Every note job starts with it, so a job never inherits state left
/// over from a previous one.
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
///
/// ```
/// use taskslip::protocol::commands;
///
/// assert_eq!(commands::init(), vec![0x1B, 0x40]);
/// ```
#[inline]
pub fn init() -> Vec<u8> {
    vec![ESC, b'@']
}

/// # Feed to Cut Position, Then Full Cut (ESC d 2)
///
/// Prints the pending line, feeds the last printed line past the blade and
/// cuts. The usual end-of-receipt cut.
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC d 2  |
/// | Hex     | 1B 64 02 |
#[inline]
pub fn cut_full_feed() -> Vec<u8> {
    vec![ESC, b'd', 2]
}

/// Line feed
#[inline]
pub fn line_feed() -> Vec<u8> {
    vec![LF]
}

/// Encode a u16 value as little-endian bytes [low, high]
///
/// ```
/// use taskslip::protocol::commands::u16_le;
///
/// assert_eq!(u16_le(0x1234), [0x34, 0x12]);
/// ```
#[inline]
pub const fn u16_le(value: u16) -> [u8; 2] {
    [value as u8, (value >> 8) as u8]
}
