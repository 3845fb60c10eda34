//! # Buffered Printer
//!
//! [`Printer`] implements [`Device`] by recording IR ops. Nothing reaches the
//! transport until the caller takes the finished job, so a note is always
//! handed over as one complete byte buffer.
//!
//! ## Job Lifecycle
//!
//! ```text
//! render commands ──► ops ──execute()──► sealed job ──take_job()──► bytes
//!                                                    └─clear()──► discarded
//! ```

use super::{Alignment, BarcodeKind, Device, TextSize, justify};
use crate::ir::{Op, Program};
use crate::printer::PrinterConfig;
use crate::protocol::barcode::qr::QrErrorLevel;

/// A receipt printer that buffers operations as IR.
///
/// ## Example
///
/// ```
/// use taskslip::device::{Device, Printer};
/// use taskslip::printer::PrinterConfig;
///
/// let mut printer = Printer::new(PrinterConfig::default());
/// printer.set_bold(true);
/// printer.append("hello");
/// printer.set_bold(false);
/// printer.execute();
///
/// let bytes = printer.take_job();
/// assert_eq!(&bytes[..2], &[0x1B, 0x40]);
/// ```
#[derive(Debug, Clone)]
pub struct Printer {
    config: PrinterConfig,
    ops: Vec<Op>,
    sealed: Vec<Program>,
}

impl Printer {
    pub fn new(config: PrinterConfig) -> Self {
        Self {
            config,
            ops: Vec::new(),
            sealed: Vec::new(),
        }
    }

    pub fn config(&self) -> &PrinterConfig {
        &self.config
    }

    /// Ops recorded since the last [`Device::execute`].
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    /// Number of sealed jobs waiting to be taken.
    pub fn pending_jobs(&self) -> usize {
        self.sealed.len()
    }

    /// Compile and remove all sealed jobs.
    ///
    /// Each job starts with `Init` so it never inherits style state from the
    /// one before it. Ops that were not sealed stay buffered.
    pub fn take_job(&mut self) -> Vec<u8> {
        self.sealed
            .drain(..)
            .flat_map(|program| program.to_bytes())
            .collect()
    }
}

impl Device for Printer {
    fn width(&self) -> usize {
        self.config.columns
    }

    fn append(&mut self, text: &str) {
        self.ops.push(Op::Text(text.to_string()));
    }

    fn println(&mut self, text: &str) {
        self.ops.push(Op::Text(text.to_string()));
        self.ops.push(Op::Newline);
    }

    fn newline(&mut self) {
        self.ops.push(Op::Newline);
    }

    fn cut(&mut self) {
        self.ops.push(Op::Cut);
    }

    fn execute(&mut self) {
        if self.ops.is_empty() {
            return;
        }
        let mut program = Program::with_init();
        program.extend(self.ops.drain(..));
        self.sealed.push(program);
    }

    fn clear(&mut self) {
        self.ops.clear();
        self.sealed.clear();
    }

    fn set_bold(&mut self, enabled: bool) {
        self.ops.push(Op::SetBold(enabled));
    }

    fn set_underline(&mut self, enabled: bool) {
        self.ops.push(Op::SetUnderline(enabled));
    }

    fn set_align(&mut self, alignment: Alignment) {
        self.ops.push(Op::SetAlign(alignment));
    }

    fn set_text_size(&mut self, size: TextSize) {
        let mult = match size {
            TextSize::Normal => 0,
            TextSize::Quad => 1,
        };
        self.ops.push(Op::SetSize {
            height: mult,
            width: mult,
        });
    }

    fn draw_line(&mut self) {
        self.ops.push(Op::Text("-".repeat(self.config.columns)));
        self.ops.push(Op::Newline);
    }

    fn qr_code(&mut self, data: &str) {
        self.ops.push(Op::QrCode {
            data: data.to_string(),
            cell_size: self.config.qr_cell_size,
            error_level: QrErrorLevel::M,
        });
    }

    fn barcode(&mut self, kind: BarcodeKind, data: &str) {
        self.ops.push(Op::Barcode1D {
            kind,
            data: data.to_string(),
            height: self.config.barcode_height,
        });
    }

    fn pdf417(&mut self, data: &str) {
        self.ops.push(Op::Pdf417 {
            data: data.to_string(),
            module_width: self.config.pdf417_module_width,
            ecc_level: self.config.pdf417_ecc_level,
        });
    }

    fn left_right(&mut self, left: &str, right: &str) {
        let line = justify(left, right, self.config.columns);
        self.ops.push(Op::Text(line));
        self.ops.push(Op::Newline);
    }
}
