//! # IR Opcodes
//!
//! The device adapter does not write bytes as commands render. It records
//! one [`Op`] per primitive operation so a whole note can be inspected (and
//! tested) before [`Program::to_bytes`] turns it into StarPRNT bytes.
//!
//! ```text
//! PrinterCommand → Device (Printer) → Vec<Op> → Codegen → Bytes
//! ```

use crate::protocol::barcode::qr::QrErrorLevel;
use crate::protocol::text::Alignment;

/// 1D barcode symbology.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarcodeKind {
    Code39,
    Code128,
}

/// IR opcodes, one per primitive printer operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    // ========== Printer Control ==========
    /// Initialize printer (ESC @). Resets to default state.
    Init,

    /// Feed to the cutter and cut the paper through.
    Cut,

    // ========== Style Changes ==========
    /// Set text alignment.
    SetAlign(Alignment),

    /// Enable/disable bold.
    SetBold(bool),

    /// Enable/disable underline.
    SetUnderline(bool),

    /// Set character size multiplier (ESC i n1 n2).
    /// height/width: 0 = 1x, 1 = 2x, ... 7 = 8x
    SetSize { height: u8, width: u8 },

    // ========== Content ==========
    /// Raw text (no trailing newline).
    Text(String),

    /// Line feed (newline).
    Newline,

    // ========== Barcodes ==========
    /// QR code.
    QrCode {
        data: String,
        cell_size: u8,
        error_level: QrErrorLevel,
    },

    /// PDF417 2D barcode.
    Pdf417 {
        data: String,
        module_width: u8,
        ecc_level: u8,
    },

    /// 1D barcode (Code39, Code128).
    Barcode1D {
        kind: BarcodeKind,
        data: String,
        height: u8,
    },
}

/// A sequence of ops that compiles to one printer job.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub ops: Vec<Op>,
}

impl Program {
    /// Create a program with an initial Init op.
    pub fn with_init() -> Self {
        Self {
            ops: vec![Op::Init],
        }
    }

    /// Add an op to the program.
    pub fn push(&mut self, op: Op) {
        self.ops.push(op);
    }

    /// Add multiple ops to the program.
    pub fn extend(&mut self, ops: impl IntoIterator<Item = Op>) {
        self.ops.extend(ops);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_with_init() {
        let program = Program::with_init();
        assert_eq!(program.ops, vec![Op::Init]);
    }

    #[test]
    fn test_extend_keeps_init_first() {
        let mut program = Program::with_init();
        program.extend([Op::SetBold(true), Op::Text("x".into()), Op::SetBold(false)]);
        assert_eq!(program.ops.len(), 4);
        assert_eq!(program.ops[0], Op::Init);
    }
}
