//! # Note Markup
//!
//! The line-oriented markup operators type into a note, and its compilation
//! to [`PrinterCommand`](crate::command::PrinterCommand)s.
//!
//! ```text
//! "buy **milk**" ──lex──► [Word, Whitespace, Bold, EndOfInput]
//!                ──compile──► [Append, Append, Bold, NewLine]
//! ```

mod compile;
mod lexer;

pub use compile::{compile, compile_line};
pub use lexer::{LexError, Lexer, Token, TokenKind, TokenValue, lex};
