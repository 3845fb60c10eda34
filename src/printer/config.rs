//! # Printer Configuration
//!
//! Hardware and layout settings for the printer a note is sent to.
//!
//! ## Built-in Profiles
//!
//! | Profile | Columns | QR cell | Barcode height |
//! |---------|---------|---------|----------------|
//! | TSP650II | 48 | 6 dots | 80 dots |
//! | default (notes) | 41 | 6 dots | 80 dots |
//!
//! ## Loading From JSON
//!
//! ```no_run
//! use taskslip::printer::PrinterConfig;
//!
//! let config = PrinterConfig::from_json_file("profiles/kitchen.json")?;
//! println!("{} prints {} columns", config.name, config.columns);
//! # Ok::<(), taskslip::error::SlipError>(())
//! ```
//!
//! Missing fields fall back to the default profile:
//!
//! ```json
//! { "name": "Kitchen", "columns": 42 }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SlipError;

/// Line width used for notes unless a profile says otherwise.
pub const DEFAULT_COLUMNS: usize = 41;

/// # Printer Configuration
///
/// ## Layout
///
/// - **columns**: characters per line in the normal font. The device adapter
///   reports this as its width, and the preview uses it for rules and
///   left/right padding.
///
/// ## Symbols
///
/// - **qr_cell_size**: QR module size in dots (1-8)
/// - **barcode_height**: 1D barcode bar height in dots
/// - **pdf417_module_width** / **pdf417_ecc_level**: PDF417 tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrinterConfig {
    /// Printer model or profile name
    pub name: String,

    /// Characters per line
    pub columns: usize,

    /// QR code cell size in dots
    pub qr_cell_size: u8,

    /// Height of linear barcodes in dots
    pub barcode_height: u8,

    /// PDF417 module width in dots
    pub pdf417_module_width: u8,

    /// PDF417 error correction level (0-8)
    pub pdf417_ecc_level: u8,
}

impl PrinterConfig {
    /// # Star TSP650II Configuration
    ///
    /// 80mm paper, 48 columns in font A.
    pub fn tsp650ii() -> Self {
        Self {
            name: "Star TSP650II".to_string(),
            columns: 48,
            qr_cell_size: 6,
            barcode_height: 80,
            pdf417_module_width: 3,
            pdf417_ecc_level: 2,
        }
    }

    /// Override the line width.
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    /// Load a profile from a JSON file.
    ///
    /// ## Errors
    ///
    /// Returns [`SlipError::Config`] if the file cannot be parsed or
    /// describes an unusable layout (zero columns, QR cell size outside 1-8).
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, SlipError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text).map_err(|e| {
            SlipError::Config(format!("Invalid profile {}: {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the layout values are printable.
    pub fn validate(&self) -> Result<(), SlipError> {
        if self.columns == 0 {
            return Err(SlipError::Config("columns must be at least 1".into()));
        }
        if !(1..=8).contains(&self.qr_cell_size) {
            return Err(SlipError::Config(format!(
                "qr_cell_size must be 1-8, got {}",
                self.qr_cell_size
            )));
        }
        if self.pdf417_ecc_level > 8 {
            return Err(SlipError::Config(format!(
                "pdf417_ecc_level must be 0-8, got {}",
                self.pdf417_ecc_level
            )));
        }
        Ok(())
    }
}

impl Default for PrinterConfig {
    /// The TSP650II narrowed to 41 columns, which leaves a margin on both
    /// sides of a note.
    fn default() -> Self {
        Self::tsp650ii().with_columns(DEFAULT_COLUMNS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_is_41_columns() {
        let config = PrinterConfig::default();
        assert_eq!(config.columns, 41);
        assert_eq!(config.qr_cell_size, 6);
    }

    #[test]
    fn test_tsp650ii_width() {
        let config = PrinterConfig::tsp650ii();
        assert_eq!(config.columns, 48);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial_profile() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "name": "Kitchen", "columns": 42 }}"#).unwrap();

        let config = PrinterConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.name, "Kitchen");
        assert_eq!(config.columns, 42);
        assert_eq!(config.qr_cell_size, PrinterConfig::default().qr_cell_size);
    }

    #[test]
    fn test_from_json_rejects_zero_columns() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "columns": 0 }}"#).unwrap();

        let err = PrinterConfig::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, SlipError::Config(_)));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        assert!(matches!(
            PrinterConfig::from_json_file(file.path()),
            Err(SlipError::Config(_))
        ));
    }
}
