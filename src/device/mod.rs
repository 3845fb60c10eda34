//! # Device Adapter
//!
//! The [`Device`] trait is the capability contract print commands render
//! against. It mirrors what a receipt printer can do one primitive at a
//! time: append text, toggle a style, draw a symbol, cut.
//!
//! The adapter is stateful (bold stays on until switched off), so callers
//! must close every toggle they open. [`PrinterCommand`] does this per
//! command.
//!
//! [`Printer`] is the implementation used for real notes. It records the
//! primitives as IR ops and compiles them to bytes when the job is taken.
//!
//! [`PrinterCommand`]: crate::command::PrinterCommand

mod printer;

pub use printer::Printer;

pub use crate::ir::BarcodeKind;
pub use crate::protocol::text::Alignment;

/// Character size used for headings and body text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextSize {
    /// 1x1
    #[default]
    Normal,
    /// Double width and double height (four times the area)
    Quad,
}

/// Primitive printer operations.
pub trait Device {
    /// Configured line width in characters.
    fn width(&self) -> usize;

    /// Append text to the current line.
    fn append(&mut self, text: &str);

    /// Append text and advance to the next line.
    fn println(&mut self, text: &str);

    /// Advance one line.
    fn newline(&mut self);

    /// Feed to the cutter and cut.
    fn cut(&mut self);

    /// Mark everything buffered so far as a finished job.
    fn execute(&mut self);

    /// Discard everything buffered, finished or not.
    fn clear(&mut self);

    fn set_bold(&mut self, enabled: bool);

    fn set_underline(&mut self, enabled: bool);

    fn set_align(&mut self, alignment: Alignment);

    fn set_text_size(&mut self, size: TextSize);

    /// Draw a full-width separator line on its own line.
    fn draw_line(&mut self);

    fn qr_code(&mut self, data: &str);

    fn barcode(&mut self, kind: BarcodeKind, data: &str);

    fn pdf417(&mut self, data: &str);

    /// Print `left` and `right` on one line, pushed to opposite margins.
    fn left_right(&mut self, left: &str, right: &str);
}

/// Lay out two strings on a line of `width` characters with spaces between.
///
/// The gap is `width - len(left) - len(right)`, or zero when the strings do
/// not fit. Lengths are counted in characters.
pub fn justify(left: &str, right: &str, width: usize) -> String {
    let right_width = width.saturating_sub(left.chars().count());
    format!("{}{}", left, pad_start(right, right_width, ' '))
}

/// Left-pad `text` with `fill` up to `width` characters.
///
/// Text already `width` characters or longer (including any text when
/// `width` is zero) is returned unchanged.
pub fn pad_start(text: &str, width: usize, fill: char) -> String {
    let missing = width.saturating_sub(text.chars().count());
    let mut padded = String::with_capacity(text.len() + missing * fill.len_utf8());
    padded.extend(std::iter::repeat_n(fill, missing));
    padded.push_str(text);
    padded
}
