//! # Intermediate Representation (IR)
//!
//! The "bytecode" between note commands and raw StarPRNT bytes.
//!
//! ```text
//! ┌──────────────┐     ┌─────────────┐     ┌──────────┐
//! │   Printer    │ ──► │     IR      │ ──► │ Codegen  │
//! │ (Device impl)│     │  (Vec<Op>)  │     │ (bytes)  │
//! └──────────────┘     └─────────────┘     └──────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use taskslip::ir::{Op, Program};
//!
//! let mut program = Program::with_init();
//! program.push(Op::SetBold(true));
//! program.push(Op::Text("MILK".into()));
//! program.push(Op::SetBold(false));
//! program.push(Op::Newline);
//! program.push(Op::Cut);
//!
//! let bytes = program.to_bytes();
//! assert_eq!(&bytes[..2], &[0x1B, 0x40]);
//! ```

mod codegen;
mod ops;

pub use ops::*;
