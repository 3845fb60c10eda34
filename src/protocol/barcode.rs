//! # StarPRNT Barcode Commands
//!
//! Linear barcodes (Code39, Code128), QR codes and PDF417 symbols.
//!
//! ## QR Code Sequence
//!
//! QR printing is a configure, load, print sequence:
//!
//! ```
//! use taskslip::protocol::barcode::qr;
//!
//! let cmd = qr::generate(b"https://example.com", 6, qr::QrErrorLevel::M);
//! assert!(cmd.ends_with(&[0x1B, 0x1D, b'y', b'P']));
//! ```
//!
//! ## Reference
//!
//! "StarPRNT Command Specifications Rev. 4.10", Sections 2.3.14-2.3.16.

use super::commands::{ESC, GS, RS, u16_le};

// ============================================================================
// 1D BARCODE COMMANDS (ESC b)
// ============================================================================

/// Linear barcode command builders
pub mod barcode1d {
    use super::{ESC, RS};

    /// Symbology codes (`n1` of `ESC b`)
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[repr(u8)]
    pub enum Symbology {
        /// A-Z, 0-9, space and `-.$/%+`
        Code39 = 52,
        /// Full ASCII
        Code128 = 54,
    }

    /// HRI below the bars in font A, line feed after printing ('2')
    const HRI_BELOW_WITH_FEED: u8 = 50;

    /// Narrowest module width, 2 dots ('1')
    const MODE_NARROW: u8 = 49;

    /// # Print 1D Barcode (ESC b n1 n2 n3 n4 data RS)
    ///
    /// | Format | Bytes |
    /// |--------|-------|
    /// | ASCII  | ESC b n1 n2 n3 n4 data RS |
    /// | Hex    | 1B 62 n1 n2 n3 n4 data 1E |
    ///
    /// `n4` is the bar height in dots; zero is raised to one.
    pub fn barcode(symbology: Symbology, data: &[u8], height: u8) -> Vec<u8> {
        let mut cmd = Vec::with_capacity(7 + data.len());
        cmd.extend([
            ESC,
            b'b',
            symbology as u8,
            HRI_BELOW_WITH_FEED,
            MODE_NARROW,
            height.max(1),
        ]);
        cmd.extend_from_slice(data);
        cmd.push(RS);
        cmd
    }

    /// Code39 with human-readable text below
    pub fn code39(data: &[u8], height: u8) -> Vec<u8> {
        barcode(Symbology::Code39, data, height)
    }

    /// Code128 with human-readable text below
    pub fn code128(data: &[u8], height: u8) -> Vec<u8> {
        barcode(Symbology::Code128, data, height)
    }
}

// ============================================================================
// QR CODE COMMANDS (ESC GS y)
// ============================================================================

/// QR code command builders
pub mod qr {
    use super::{ESC, GS, u16_le};

    /// Error correction level
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub enum QrErrorLevel {
        /// ~7% recovery
        L = 0,
        /// ~15% recovery
        #[default]
        M = 1,
        /// ~25% recovery
        Q = 2,
        /// ~30% recovery
        H = 3,
    }

    /// Select model 2 (ESC GS y S 0 2)
    pub fn set_model2() -> Vec<u8> {
        vec![ESC, GS, b'y', b'S', b'0', 2]
    }

    /// Set error correction (ESC GS y S 1 n)
    pub fn set_error_correction(level: QrErrorLevel) -> Vec<u8> {
        vec![ESC, GS, b'y', b'S', b'1', level as u8]
    }

    /// Set cell size in dots, clamped to 1-8 (ESC GS y S 2 n)
    pub fn set_cell_size(size: u8) -> Vec<u8> {
        vec![ESC, GS, b'y', b'S', b'2', size.clamp(1, 8)]
    }

    /// Load data with automatic mode analysis (ESC GS y D 1 0 nL nH data)
    pub fn set_data(data: &[u8]) -> Vec<u8> {
        let len = data.len().min(u16::MAX as usize) as u16;
        let mut cmd = vec![ESC, GS, b'y', b'D', b'1', 0];
        cmd.extend(u16_le(len));
        cmd.extend_from_slice(&data[..len as usize]);
        cmd
    }

    /// Print the loaded symbol (ESC GS y P)
    pub fn print() -> Vec<u8> {
        vec![ESC, GS, b'y', b'P']
    }

    /// Full configure, load and print sequence.
    pub fn generate(data: &[u8], cell_size: u8, error_level: QrErrorLevel) -> Vec<u8> {
        let mut cmd = Vec::new();
        cmd.extend(set_model2());
        cmd.extend(set_error_correction(error_level));
        cmd.extend(set_cell_size(cell_size));
        cmd.extend(set_data(data));
        cmd.extend(print());
        cmd
    }
}

// ============================================================================
// PDF417 COMMANDS (ESC GS x)
// ============================================================================

/// PDF417 command builders
pub mod pdf417 {
    use super::{ESC, GS, u16_le};

    /// ECC level 0-8 (ESC GS x S 1 n)
    pub fn set_ecc_level(level: u8) -> Vec<u8> {
        vec![ESC, GS, b'x', b'S', b'1', level.min(8)]
    }

    /// Module width 1-15 dots (ESC GS x S 2 n)
    pub fn set_module_width(width: u8) -> Vec<u8> {
        vec![ESC, GS, b'x', b'S', b'2', width.clamp(1, 15)]
    }

    /// Module aspect ratio 1-10 (ESC GS x S 3 n)
    pub fn set_module_aspect(aspect: u8) -> Vec<u8> {
        vec![ESC, GS, b'x', b'S', b'3', aspect.clamp(1, 10)]
    }

    /// Load data (ESC GS x D nL nH data)
    pub fn set_data(data: &[u8]) -> Vec<u8> {
        let len = data.len().min(u16::MAX as usize) as u16;
        let mut cmd = vec![ESC, GS, b'x', b'D'];
        cmd.extend(u16_le(len));
        cmd.extend_from_slice(&data[..len as usize]);
        cmd
    }

    /// Print the loaded symbol (ESC GS x P)
    pub fn print() -> Vec<u8> {
        vec![ESC, GS, b'x', b'P']
    }

    /// Full configure, load and print sequence with aspect ratio 3.
    pub fn generate(data: &[u8], module_width: u8, ecc_level: u8) -> Vec<u8> {
        let mut cmd = Vec::new();
        cmd.extend(set_ecc_level(ecc_level));
        cmd.extend(set_module_width(module_width));
        cmd.extend(set_module_aspect(3));
        cmd.extend(set_data(data));
        cmd.extend(print());
        cmd
    }
}
