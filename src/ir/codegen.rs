//! # Code Generation
//!
//! Converts IR programs to StarPRNT protocol bytes.

use super::ops::{BarcodeKind, Op, Program};
use crate::protocol::{barcode, commands, text};

impl Program {
    /// Compile the IR program to StarPRNT bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();

        for op in &self.ops {
            match op {
                // ===== Printer Control =====
                Op::Init => out.extend(commands::init()),
                Op::Cut => out.extend(commands::cut_full_feed()),

                // ===== Style Changes =====
                Op::SetAlign(align) => out.extend(text::align(*align)),
                Op::SetBold(enabled) => {
                    if *enabled {
                        out.extend(text::bold_on());
                    } else {
                        out.extend(text::bold_off());
                    }
                }
                Op::SetUnderline(enabled) => {
                    if *enabled {
                        out.extend(text::underline_on());
                    } else {
                        out.extend(text::underline_off());
                    }
                }
                Op::SetSize { height, width } => out.extend(text::size(*height, *width)),

                // ===== Content =====
                Op::Text(s) => out.extend(s.as_bytes()),
                Op::Newline => out.extend(commands::line_feed()),

                // ===== Barcodes =====
                Op::QrCode {
                    data,
                    cell_size,
                    error_level,
                } => {
                    out.extend(barcode::qr::generate(
                        data.as_bytes(),
                        *cell_size,
                        *error_level,
                    ));
                }
                Op::Pdf417 {
                    data,
                    module_width,
                    ecc_level,
                } => {
                    out.extend(barcode::pdf417::generate(
                        data.as_bytes(),
                        *module_width,
                        *ecc_level,
                    ));
                }
                Op::Barcode1D { kind, data, height } => {
                    let barcode_fn = match kind {
                        BarcodeKind::Code39 => barcode::barcode1d::code39,
                        BarcodeKind::Code128 => barcode::barcode1d::code128,
                    };
                    out.extend(barcode_fn(data.as_bytes(), *height));
                }
            }
        }

        out
    }
}
