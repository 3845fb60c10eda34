//! Token to command compilation.

use super::lexer::{Token, TokenKind, TokenValue, lex};
use crate::command::PrinterCommand;

/// Map one token to one command.
///
/// A token whose payload does not fit its kind (a `Link` token holding plain
/// text, say) becomes [`PrinterCommand::Noop`], so every token still yields
/// exactly one command.
pub fn compile(token: Token) -> PrinterCommand {
    match (token.kind, token.value) {
        (TokenKind::Word | TokenKind::Whitespace, TokenValue::Text(s)) => {
            PrinterCommand::Append(s)
        }
        (TokenKind::Qr, TokenValue::Text(s)) => PrinterCommand::QrCode(s),
        (TokenKind::Title, TokenValue::Text(s)) => PrinterCommand::Title(s),
        (TokenKind::Bold, TokenValue::Text(s)) => PrinterCommand::Bold(s),
        (TokenKind::Underline, TokenValue::Text(s)) => PrinterCommand::Underline(s),
        (TokenKind::Centered, TokenValue::Text(s)) => PrinterCommand::Centered(s),
        (TokenKind::Link, TokenValue::Link { text, url }) => PrinterCommand::Link { text, url },
        (TokenKind::HorizontalRule, _) => PrinterCommand::Rule {
            append_newline: false,
        },
        (TokenKind::Newline | TokenKind::EndOfInput, _) => PrinterCommand::NewLine,
        _ => PrinterCommand::Noop,
    }
}

/// Lex and compile one line.
///
/// A line the lexer rejects is printed verbatim as a single
/// [`PrinterCommand::PrintLine`].
///
/// ```
/// use taskslip::command::PrinterCommand;
/// use taskslip::markup::compile_line;
///
/// assert_eq!(
///     compile_line("**Hello**"),
///     vec![PrinterCommand::Bold("Hello".into()), PrinterCommand::NewLine]
/// );
/// assert_eq!(
///     compile_line("Hello, world"),
///     vec![PrinterCommand::PrintLine("Hello, world".into())]
/// );
/// ```
pub fn compile_line(line: &str) -> Vec<PrinterCommand> {
    match lex(line) {
        Ok(tokens) => tokens.into_iter().map(compile).collect(),
        Err(_) => vec![PrinterCommand::PrintLine(line.to_string())],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::preview_all;
    use pretty_assertions::assert_eq;

    fn token(kind: TokenKind, value: TokenValue) -> Token {
        Token {
            kind,
            value,
            span: 0..0,
        }
    }

    #[test]
    fn test_word_and_whitespace_append() {
        assert_eq!(
            compile_line("a b"),
            vec![
                PrinterCommand::Append("a".into()),
                PrinterCommand::Append(" ".into()),
                PrinterCommand::Append("b".into()),
                PrinterCommand::NewLine,
            ]
        );
    }

    #[test]
    fn test_every_markup_form() {
        assert_eq!(compile_line("# Title")[0], PrinterCommand::Title("Title".into()));
        assert_eq!(compile_line("__u__")[0], PrinterCommand::Underline("u".into()));
        assert_eq!(compile_line("||qr:abc||")[0], PrinterCommand::QrCode("abc".into()));
        assert_eq!(compile_line(":-- c --:")[0], PrinterCommand::Centered("c".into()));
        assert_eq!(
            compile_line("[Docs](http://x)")[0],
            PrinterCommand::Link {
                text: "Docs".into(),
                url: "http://x".into()
            }
        );
        assert_eq!(
            compile_line("---")[0],
            PrinterCommand::Rule {
                append_newline: false
            }
        );
    }

    #[test]
    fn test_newline_token_compiles_to_newline() {
        assert_eq!(
            compile_line("a\nb"),
            vec![
                PrinterCommand::Append("a".into()),
                PrinterCommand::NewLine,
                PrinterCommand::Append("b".into()),
                PrinterCommand::NewLine,
            ]
        );
    }

    #[test]
    fn test_one_command_per_token() {
        let line = "buy **milk** and __eggs__";
        let tokens = lex(line).unwrap();
        assert_eq!(compile_line(line).len(), tokens.len());
    }

    #[test]
    fn test_mismatched_payload_is_noop() {
        assert_eq!(
            compile(token(TokenKind::Link, TokenValue::Text("x".into()))),
            PrinterCommand::Noop
        );
        assert_eq!(
            compile(token(TokenKind::Word, TokenValue::None)),
            PrinterCommand::Noop
        );
    }

    #[test]
    fn test_lex_failure_falls_back_to_print_line() {
        let commands = compile_line("Total: $4.50");
        assert_eq!(commands, vec![PrinterCommand::PrintLine("Total: $4.50".into())]);
        assert_eq!(preview_all(&commands, 41), "Total: $4.50\n");
    }

    #[test]
    fn test_accented_words_print_verbatim() {
        assert_eq!(
            compile_line("café au lait"),
            vec![PrinterCommand::PrintLine("café au lait".into())]
        );
        assert_eq!(
            compile_line("**café**"),
            vec![PrinterCommand::Bold("café".into()), PrinterCommand::NewLine]
        );
    }

    #[test]
    fn test_preview_round_trips_canonical_markup() {
        let rule = "-".repeat(41);
        for line in [
            "**Hello**",
            "[Docs](http://x)",
            "# Title",
            "__under__",
            "plain words here",
            rule.as_str(),
        ] {
            assert_eq!(preview_all(&compile_line(line), 41), format!("{}\n", line));
        }
    }

    #[test]
    fn test_centered_round_trip_is_lossy() {
        let preview = preview_all(&compile_line(":--- a ---:"), 41);
        assert_eq!(preview, ":-- a --:\n\n");
    }
}
