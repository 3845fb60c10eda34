//! # Markup Lexer
//!
//! Splits one line of note input into typed tokens.
//!
//! ## Rules
//!
//! Rules are tried in declaration order at the cursor. The first rule that
//! matches wins, even if a later rule would match a longer span. The winning
//! span is consumed and scanning resumes after it.
//!
//! | # | Rule | Syntax | Token |
//! |---|------|--------|-------|
//! | 1 | link | `[text](url)` | [`TokenKind::Link`] |
//! | 2 | qr | `\|\|qr:payload\|\|` | [`TokenKind::Qr`] |
//! | 3 | bold | `**text**` | [`TokenKind::Bold`] |
//! | 4 | underline | `__text__` | [`TokenKind::Underline`] |
//! | 5 | line break | `\n`, `\r\n` | [`TokenKind::Newline`] |
//! | 6 | heading | `# text` (start of input) | [`TokenKind::Title`] |
//! | 7 | rule | `-----` (whole input) | [`TokenKind::HorizontalRule`] |
//! | 8 | centered | `:-- text --:` | [`TokenKind::Centered`] |
//! | 9 | whitespace | spaces, tabs | [`TokenKind::Whitespace`] |
//! | 10 | word | letters, digits, `_` | [`TokenKind::Word`] |
//!
//! Link and bold payloads are greedy: `**a** and **b**` is one bold token
//! holding `a** and **b`. QR payloads cannot contain `|` and underline
//! payloads cannot contain `_`.
//!
//! Any character no rule accepts (punctuation outside markup, for example)
//! fails the whole line with a [`LexError`].
//!
//! ## Example
//!
//! ```
//! use taskslip::markup::{lex, TokenKind};
//!
//! let kinds: Vec<_> = lex("buy **milk**").unwrap().into_iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     vec![TokenKind::Word, TokenKind::Whitespace, TokenKind::Bold, TokenKind::EndOfInput]
//! );
//! ```

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use thiserror::Error;

/// Token classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Word,
    Whitespace,
    Qr,
    Title,
    Bold,
    Underline,
    HorizontalRule,
    Link,
    Centered,
    Newline,
    EndOfInput,
}

/// Token payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenValue {
    /// Rules, line breaks and end of input carry nothing.
    None,
    Text(String),
    Link { text: String, url: String },
}

/// A classified span of one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    /// Byte range in the line. Empty for [`TokenKind::EndOfInput`].
    pub span: Range<usize>,
}

impl Token {
    /// The text payload, if this token has one.
    pub fn text(&self) -> Option<&str> {
        match &self.value {
            TokenValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// No rule matches at `position`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no markup rule matches {found:?} at byte {position}")]
pub struct LexError {
    pub position: usize,
    pub found: char,
}

// ============================================================================
// RULE TABLE
// ============================================================================

struct RuleMatch {
    len: usize,
    value: TokenValue,
}

enum Matcher {
    /// Regex anchored at the cursor with `\A`.
    Pattern {
        regex: Regex,
        value: fn(&Captures) -> TokenValue,
    },
    /// `:<n dashes>text<n dashes>:`, which needs a backreference.
    Centered,
}

struct Rule {
    kind: TokenKind,
    matcher: Matcher,
    /// Only tried when the cursor is at the start of the input.
    at_start: bool,
}

impl Rule {
    fn pattern(kind: TokenKind, pattern: &str, value: fn(&Captures) -> TokenValue) -> Self {
        let regex = Regex::new(pattern).expect("markup rule patterns are valid regexes");
        Self {
            kind,
            matcher: Matcher::Pattern { regex, value },
            at_start: false,
        }
    }

    fn at_start(mut self) -> Self {
        self.at_start = true;
        self
    }

    fn try_match(&self, rest: &str) -> Option<RuleMatch> {
        match &self.matcher {
            Matcher::Pattern { regex, value } => {
                let caps = regex.captures(rest)?;
                Some(RuleMatch {
                    len: caps.get(0)?.end(),
                    value: value(&caps),
                })
            }
            Matcher::Centered => match_centered(rest),
        }
    }
}

fn group(caps: &Captures, i: usize) -> String {
    caps.get(i).map_or_else(String::new, |m| m.as_str().to_string())
}

fn first_group(caps: &Captures) -> TokenValue {
    TokenValue::Text(group(caps, 1))
}

fn first_group_trimmed(caps: &Captures) -> TokenValue {
    TokenValue::Text(group(caps, 1).trim().to_string())
}

fn whole_match(caps: &Captures) -> TokenValue {
    TokenValue::Text(group(caps, 0))
}

fn no_value(_: &Captures) -> TokenValue {
    TokenValue::None
}

fn link_value(caps: &Captures) -> TokenValue {
    TokenValue::Link {
        text: group(caps, 1),
        url: group(caps, 2),
    }
}

static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::pattern(TokenKind::Link, r"\A\[(.+)\]\((.+)\)", link_value),
        Rule::pattern(TokenKind::Qr, r"\A\|\|qr:([^|]+)\|\|", first_group),
        Rule::pattern(TokenKind::Bold, r"\A\*\*(.+)\*\*", first_group),
        Rule::pattern(TokenKind::Underline, r"\A__([^_]+)__", first_group),
        Rule::pattern(TokenKind::Newline, r"\A(?:\n|\r\n)", no_value),
        Rule::pattern(TokenKind::Title, r"\A#+(.+)", first_group_trimmed).at_start(),
        Rule::pattern(TokenKind::HorizontalRule, r"\A-+\z", no_value).at_start(),
        Rule {
            kind: TokenKind::Centered,
            matcher: Matcher::Centered,
            at_start: false,
        },
        Rule::pattern(TokenKind::Whitespace, r"\A\s+", whole_match),
        Rule::pattern(TokenKind::Word, r"\A(?-u:\w)+", whole_match),
    ]
});

/// Match `:<n dashes><text><n dashes>:` at the start of `rest`.
///
/// The opening run is tried longest first and the text is greedy, so the
/// last closing delimiter on the line wins. Leftover opening dashes become
/// part of the text. The text is at least one character and stops at a
/// line break.
fn match_centered(rest: &str) -> Option<RuleMatch> {
    let after_colon = rest.strip_prefix(':')?;
    let run = after_colon.bytes().take_while(|&b| b == b'-').count();
    let line_end = after_colon.find('\n').unwrap_or(after_colon.len());

    for n in (1..=run).rev() {
        let body = &after_colon[n..line_end];
        let closing = format!("{}:", "-".repeat(n));
        if let Some(idx) = body.rfind(&closing)
            && idx > 0
        {
            return Some(RuleMatch {
                len: 1 + n + idx + closing.len(),
                value: TokenValue::Text(body[..idx].trim().to_string()),
            });
        }
    }
    None
}

// ============================================================================
// SCANNER
// ============================================================================

/// Scan state for one line.
///
/// Each call to [`Lexer::new`] starts a fresh scan; nothing is shared between
/// lexers except the immutable rule table. Cloning a lexer (or calling
/// [`Lexer::restart`]) replays the scan from the copied position.
///
/// The iterator ends after yielding [`TokenKind::EndOfInput`] or the first
/// error.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    cursor: usize,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            cursor: 0,
            finished: false,
        }
    }

    /// Rewind to the start of the line.
    pub fn restart(&mut self) {
        self.cursor = 0;
        self.finished = false;
    }

    fn next_token(&mut self) -> Result<Token, LexError> {
        let start = self.cursor;
        if start == self.input.len() {
            self.finished = true;
            return Ok(Token {
                kind: TokenKind::EndOfInput,
                value: TokenValue::None,
                span: start..start,
            });
        }

        let rest = &self.input[start..];
        for rule in RULES.iter() {
            if rule.at_start && start != 0 {
                continue;
            }
            if let Some(m) = rule.try_match(rest)
                && m.len > 0
            {
                self.cursor = start + m.len;
                return Ok(Token {
                    kind: rule.kind,
                    value: m.value,
                    span: start..self.cursor,
                });
            }
        }

        self.finished = true;
        Err(LexError {
            position: start,
            found: rest.chars().next().unwrap_or('\0'),
        })
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        Some(self.next_token())
    }
}

/// Tokenize one line. The last token is always [`TokenKind::EndOfInput`].
pub fn lex(line: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(line).collect()
}
