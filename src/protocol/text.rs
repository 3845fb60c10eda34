//! # StarPRNT Text Styling
//!
//! Alignment, emphasis, underline and character size. Every style here is a
//! toggle that stays in effect until switched off, which is why note
//! commands always emit the "on" and "off" halves together.

use super::commands::{ESC, GS};

// ============================================================================
// ALIGNMENT
// ============================================================================

/// Text alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left = 0,
    Center = 1,
    Right = 2,
}

/// # Set Text Alignment (ESC GS a n)
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC GS a n |
/// | Hex     | 1B 1D 61 n |
///
/// Takes effect at the start of the next line.
///
/// ```
/// use taskslip::protocol::text::{align, Alignment};
///
/// assert_eq!(align(Alignment::Center), vec![0x1B, 0x1D, 0x61, 0x01]);
/// ```
pub fn align(alignment: Alignment) -> Vec<u8> {
    vec![ESC, GS, b'a', alignment as u8]
}

// ============================================================================
// EMPHASIS
// ============================================================================

/// # Enable Bold/Emphasis (ESC E)
#[inline]
pub fn bold_on() -> Vec<u8> {
    vec![ESC, b'E']
}

/// # Disable Bold/Emphasis (ESC F)
#[inline]
pub fn bold_off() -> Vec<u8> {
    vec![ESC, b'F']
}

// ============================================================================
// UNDERLINE
// ============================================================================

/// # Set Underline Mode (ESC - n)
///
/// | n | Meaning |
/// |---|---------|
/// | 0 | off |
/// | 1 | on, 1 dot thick |
///
/// Spaces are not underlined.
#[inline]
pub fn underline_on() -> Vec<u8> {
    vec![ESC, b'-', 1]
}

/// Disable underline
#[inline]
pub fn underline_off() -> Vec<u8> {
    vec![ESC, b'-', 0]
}

// ============================================================================
// CHARACTER SIZE
// ============================================================================

/// # Set Character Size (ESC i n1 n2)
///
/// `n1` is the vertical and `n2` the horizontal multiplier minus one
/// (0 = 1x ... 7 = 8x). Values above 7 are clamped.
///
/// ```
/// use taskslip::protocol::text::size;
///
/// assert_eq!(size(1, 1), vec![0x1B, 0x69, 0x01, 0x01]);
/// ```
pub fn size(height_mult: u8, width_mult: u8) -> Vec<u8> {
    vec![ESC, b'i', height_mult.min(7), width_mult.min(7)]
}

/// Reset to normal size (1x1)
#[inline]
pub fn size_normal() -> Vec<u8> {
    size(0, 0)
}
