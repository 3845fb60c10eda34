//! # Print Commands
//!
//! [`PrinterCommand`] is the closed set of directives a note is made of.
//! Every variant renders two ways:
//!
//! - [`PrinterCommand::render_to_device`] issues primitive operations on a
//!   [`Device`]
//! - [`PrinterCommand::render_to_preview`] returns the markup-equivalent
//!   text shown to the operator
//!
//! Both are exhaustive matches, so a new variant does not compile until it
//! has both renderings.
//!
//! ## Previews
//!
//! | Command | Preview |
//! |---------|---------|
//! | `Append("x")` | `x` |
//! | `PrintLine("x")` | `x\n` |
//! | `Bold("x")` | `**x**` |
//! | `Underline("x")` | `__x__` |
//! | `Title("x")` | `# x` |
//! | `Link { "a", "u" }` | `[a](u)` |
//! | `Centered("x")` | `:-- x --:\n` |
//! | `Rule` | `-` × columns (+ `\n`) |
//! | `NewLine` | `\n` |
//! | `Cut`, `Noop`, `Execute` | nothing |

use crate::device::{Alignment, BarcodeKind, Device, TextSize, justify};

/// Left delimiter of the centered-text preview; the right one is its reverse.
const CENTER_DELIMITER: &str = ":-- ";

/// A print directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrinterCommand {
    // ========== Control ==========
    /// Seal the buffered operations as a finished job.
    Execute,
    NewLine,
    Cut,
    /// A line of dashes as wide as the device.
    Rule { append_newline: bool },
    /// Renders nothing on either channel.
    Noop,

    // ========== Data ==========
    /// Text on the current line.
    Append(String),
    /// Text followed by a line advance.
    PrintLine(String),
    Bold(String),
    Underline(String),
    /// Heading, printed at four times the normal area.
    Title(String),
    Centered(String),
    /// Two strings pushed to opposite margins (the note's time and date).
    LeftRight { left: String, right: String },
    /// QR code of `url` with the link text and url printed below it.
    Link { text: String, url: String },
    QrCode(String),
    Code128(String),
    Code39(String),
    Pdf417(String),
}

impl PrinterCommand {
    /// Issue this command's operations on `device`.
    ///
    /// Styles switched on here (bold, underline, alignment, size) are always
    /// switched off again before returning.
    pub fn render_to_device(&self, device: &mut dyn Device) {
        match self {
            Self::Execute => device.execute(),
            Self::NewLine => device.newline(),
            Self::Cut => device.cut(),
            Self::Rule { append_newline } => {
                let line = "-".repeat(device.width());
                device.append(&line);
                if *append_newline {
                    device.newline();
                }
            }
            Self::Noop => {}

            Self::Append(data) => device.append(data),
            Self::PrintLine(data) => device.println(data),
            Self::Bold(data) => {
                device.set_bold(true);
                device.append(data);
                device.set_bold(false);
            }
            Self::Underline(data) => {
                device.set_underline(true);
                device.append(data);
                device.set_underline(false);
            }
            Self::Title(data) => {
                device.set_text_size(TextSize::Quad);
                device.println(data);
                device.set_text_size(TextSize::Normal);
            }
            Self::Centered(data) => {
                device.set_align(Alignment::Center);
                device.println(data);
                device.set_align(Alignment::Left);
            }
            Self::LeftRight { left, right } => device.left_right(left, right),
            Self::Link { text, url } => {
                device.qr_code(url);
                device.set_bold(true);
                device.println(text);
                device.set_bold(false);
                device.println(url);
            }
            Self::QrCode(data) => {
                device.draw_line();
                device.qr_code(data);
                device.println(data);
                device.draw_line();
            }
            Self::Code128(data) => device.barcode(BarcodeKind::Code128, data),
            Self::Code39(data) => device.barcode(BarcodeKind::Code39, data),
            Self::Pdf417(data) => device.pdf417(data),
        }
    }

    /// The markup-equivalent text for this command on a line of `columns`
    /// characters.
    pub fn render_to_preview(&self, columns: usize) -> String {
        match self {
            Self::Execute | Self::Cut | Self::Noop => String::new(),
            Self::NewLine => "\n".to_string(),
            Self::Rule { append_newline } => {
                let mut line = "-".repeat(columns);
                if *append_newline {
                    line.push('\n');
                }
                line
            }

            Self::Append(data) => data.clone(),
            Self::PrintLine(data) => format!("{}\n", data),
            Self::Bold(data) => format!("**{}**", data),
            Self::Underline(data) => format!("__{}__", data),
            Self::Title(data) => format!("# {}", data),
            Self::Centered(data) => {
                let closing: String = CENTER_DELIMITER.chars().rev().collect();
                format!("{}{}{}\n", CENTER_DELIMITER, data, closing)
            }
            Self::LeftRight { left, right } => format!("{}\n", justify(left, right, columns)),
            Self::Link { text, url } => format!("[{}]({})", text, url),
            Self::QrCode(data) => {
                let rule = "-".repeat(columns);
                format!("{rule}\n||qr:{data}||\n{data}\n{rule}\n\n")
            }
            Self::Code128(data) => format!("||128:{}||\n", data),
            Self::Code39(data) => format!("||39:{}||\n", data),
            Self::Pdf417(data) => format!("||417:{}||\n", data),
        }
    }
}

/// Concatenate the previews of `commands`.
pub fn preview_all(commands: &[PrinterCommand], columns: usize) -> String {
    commands
        .iter()
        .map(|command| command.render_to_preview(columns))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::Printer;
    use crate::ir::Op;
    use crate::printer::PrinterConfig;
    use pretty_assertions::assert_eq;

    fn device_ops(command: &PrinterCommand) -> Vec<Op> {
        let mut printer = Printer::new(PrinterConfig::default());
        command.render_to_device(&mut printer);
        printer.ops().to_vec()
    }

    #[test]
    fn test_text_previews() {
        assert_eq!(PrinterCommand::Append("a b".into()).render_to_preview(41), "a b");
        assert_eq!(PrinterCommand::PrintLine("raw, line".into()).render_to_preview(41), "raw, line\n");
        assert_eq!(PrinterCommand::Bold("Hello".into()).render_to_preview(41), "**Hello**");
        assert_eq!(PrinterCommand::Underline("u".into()).render_to_preview(41), "__u__");
        assert_eq!(PrinterCommand::Title("Title".into()).render_to_preview(41), "# Title");
        assert_eq!(
            PrinterCommand::Link {
                text: "Docs".into(),
                url: "http://x".into()
            }
            .render_to_preview(41),
            "[Docs](http://x)"
        );
    }

    #[test]
    fn test_centered_preview_uses_fixed_delimiters() {
        assert_eq!(
            PrinterCommand::Centered("Lunch".into()).render_to_preview(41),
            ":-- Lunch --:\n"
        );
    }

    #[test]
    fn test_control_previews() {
        assert_eq!(PrinterCommand::NewLine.render_to_preview(41), "\n");
        assert_eq!(PrinterCommand::Cut.render_to_preview(41), "");
        assert_eq!(PrinterCommand::Noop.render_to_preview(41), "");
        assert_eq!(PrinterCommand::Execute.render_to_preview(41), "");
    }

    #[test]
    fn test_rule_preview_width_and_newline() {
        let bare = PrinterCommand::Rule {
            append_newline: false,
        };
        assert_eq!(bare.render_to_preview(41), "-".repeat(41));

        let with_newline = PrinterCommand::Rule {
            append_newline: true,
        };
        assert_eq!(with_newline.render_to_preview(10), "----------\n");
    }

    #[test]
    fn test_left_right_preview() {
        let command = PrinterCommand::LeftRight {
            left: "12:05 AM".into(),
            right: "1 January 2026".into(),
        };
        let preview = command.render_to_preview(41);
        assert_eq!(preview.len(), 42);
        assert_eq!(
            preview,
            format!("12:05 AM{}1 January 2026\n", " ".repeat(41 - 8 - 14))
        );
    }

    #[test]
    fn test_symbol_previews() {
        let rule = "-".repeat(5);
        assert_eq!(
            PrinterCommand::QrCode("abc".into()).render_to_preview(5),
            format!("{rule}\n||qr:abc||\nabc\n{rule}\n\n")
        );
        assert_eq!(PrinterCommand::Code128("A1".into()).render_to_preview(41), "||128:A1||\n");
        assert_eq!(PrinterCommand::Code39("A1".into()).render_to_preview(41), "||39:A1||\n");
        assert_eq!(PrinterCommand::Pdf417("A1".into()).render_to_preview(41), "||417:A1||\n");
    }

    #[test]
    fn test_preview_is_idempotent() {
        let commands = [
            PrinterCommand::Bold("x".into()),
            PrinterCommand::QrCode("q".into()),
            PrinterCommand::LeftRight {
                left: "l".into(),
                right: "r".into(),
            },
        ];
        for command in &commands {
            let first = command.render_to_preview(41);
            let second = command.render_to_preview(41);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_bold_bracket() {
        assert_eq!(
            device_ops(&PrinterCommand::Bold("Hello".into())),
            vec![
                Op::SetBold(true),
                Op::Text("Hello".into()),
                Op::SetBold(false)
            ]
        );
    }

    #[test]
    fn test_underline_bracket() {
        assert_eq!(
            device_ops(&PrinterCommand::Underline("u".into())),
            vec![
                Op::SetUnderline(true),
                Op::Text("u".into()),
                Op::SetUnderline(false)
            ]
        );
    }

    #[test]
    fn test_centered_bracket() {
        assert_eq!(
            device_ops(&PrinterCommand::Centered("c".into())),
            vec![
                Op::SetAlign(Alignment::Center),
                Op::Text("c".into()),
                Op::Newline,
                Op::SetAlign(Alignment::Left)
            ]
        );
    }

    #[test]
    fn test_title_restores_normal_size() {
        let ops = device_ops(&PrinterCommand::Title("T".into()));
        assert_eq!(
            ops.first(),
            Some(&Op::SetSize {
                height: 1,
                width: 1
            })
        );
        assert_eq!(
            ops.last(),
            Some(&Op::SetSize {
                height: 0,
                width: 0
            })
        );
    }

    #[test]
    fn test_rule_uses_device_width() {
        let mut printer = Printer::new(PrinterConfig::tsp650ii());
        PrinterCommand::Rule {
            append_newline: false,
        }
        .render_to_device(&mut printer);
        assert_eq!(printer.ops(), &[Op::Text("-".repeat(48))]);
    }

    #[test]
    fn test_link_device_rendering() {
        let ops = device_ops(&PrinterCommand::Link {
            text: "Docs".into(),
            url: "http://x".into(),
        });
        assert!(matches!(&ops[0], Op::QrCode { data, .. } if data == "http://x"));
        assert_eq!(
            &ops[1..],
            &[
                Op::SetBold(true),
                Op::Text("Docs".into()),
                Op::Newline,
                Op::SetBold(false),
                Op::Text("http://x".into()),
                Op::Newline,
            ]
        );
    }

    #[test]
    fn test_qr_device_rendering_is_framed() {
        let ops = device_ops(&PrinterCommand::QrCode("q".into()));
        let line = Op::Text("-".repeat(41));
        assert_eq!(ops[0], line);
        assert!(matches!(&ops[2], Op::QrCode { data, .. } if data == "q"));
        // payload line advances, like the `q\n` in the preview
        assert_eq!(ops[3], Op::Text("q".into()));
        assert_eq!(ops[4], Op::Newline);
        assert_eq!(ops[ops.len() - 2], line);
    }

    #[test]
    fn test_device_rendering_repeats_exactly() {
        let command = PrinterCommand::Link {
            text: "a".into(),
            url: "b".into(),
        };
        assert_eq!(device_ops(&command), device_ops(&command));
    }

    #[test]
    fn test_noop_renders_nothing() {
        assert!(device_ops(&PrinterCommand::Noop).is_empty());
    }

    #[test]
    fn test_preview_all() {
        let commands = [
            PrinterCommand::Bold("Hello".into()),
            PrinterCommand::NewLine,
        ];
        assert_eq!(preview_all(&commands, 41), "**Hello**\n");
    }
}
