//! # Note Assembly
//!
//! A note is one print job: a header (subject, time and date), a separator
//! rule, the compiled body lines and a cut.
//!
//! ```text
//! **Groceries**                      ← Bold(subject), NewLine
//! 09:15 AM             3 March 2026  ← LeftRight(time, date)
//! -----------------------------------------  ← Rule (with newline)
//! buy **milk**                       ← body, one line at a time
//!                                    ← Cut
//! ```
//!
//! Body lines are captured until the operator leaves two blank lines (see
//! [`NoteBody`]), then the trailing blanks are dropped.

use std::io::{self, Write};

use chrono::NaiveDateTime;

use crate::command::PrinterCommand;
use crate::device::Device;
use crate::markup::compile_line;

/// `hh:mm AM` on a 12-hour clock: midnight is `12:xx AM`, noon `12:xx PM`.
pub fn format_time(timestamp: &NaiveDateTime) -> String {
    timestamp.format("%I:%M %p").to_string()
}

/// Day of month, full month name and year: `3 March 2026`.
pub fn format_date(timestamp: &NaiveDateTime) -> String {
    timestamp.format("%-d %B %Y").to_string()
}

/// True once at least three lines are captured and the last two are blank.
pub fn is_end_of_note<S: AsRef<str>>(lines: &[S]) -> bool {
    match lines {
        [.., a, b] if lines.len() > 2 => a.as_ref().trim().is_empty() && b.as_ref().trim().is_empty(),
        _ => false,
    }
}

/// Drop blank lines from the end until the last line has content.
pub fn trim_trailing_blank(lines: &mut Vec<String>) {
    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }
}

/// Body lines captured so far.
///
/// ```
/// use taskslip::note::NoteBody;
///
/// let mut body = NoteBody::new();
/// assert!(!body.push("milk"));
/// assert!(!body.push(""));
/// assert!(body.push(""));
/// assert_eq!(body.finish(), vec!["milk".to_string()]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct NoteBody {
    lines: Vec<String>,
}

impl NoteBody {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture a line. Returns true when the note is complete.
    pub fn push(&mut self, line: impl Into<String>) -> bool {
        self.lines.push(line.into());
        self.is_complete()
    }

    pub fn is_complete(&self) -> bool {
        is_end_of_note(&self.lines)
    }

    /// The captured lines without trailing blanks.
    pub fn finish(mut self) -> Vec<String> {
        trim_trailing_blank(&mut self.lines);
        self.lines
    }
}

/// One print job.
#[derive(Debug, Clone)]
pub struct Note {
    subject: String,
    timestamp: NaiveDateTime,
    body: Vec<String>,
}

impl Note {
    /// `subject` is trimmed; an empty subject prints no subject line.
    pub fn new(subject: &str, timestamp: NaiveDateTime, body: Vec<String>) -> Self {
        Self {
            subject: subject.trim().to_string(),
            timestamp,
            body,
        }
    }

    /// Subject (if any) and the time/date line.
    pub fn header(&self) -> Vec<PrinterCommand> {
        let mut commands = Vec::new();
        if !self.subject.is_empty() {
            commands.push(PrinterCommand::Bold(self.subject.clone()));
            commands.push(PrinterCommand::NewLine);
        }
        commands.push(PrinterCommand::LeftRight {
            left: format_time(&self.timestamp),
            right: format_date(&self.timestamp),
        });
        commands
    }

    /// Every line compiled independently, in order.
    pub fn body_commands(&self) -> Vec<PrinterCommand> {
        self.body.iter().flat_map(|line| compile_line(line)).collect()
    }

    /// Header, separator rule, body, cut.
    pub fn commands(&self) -> Vec<PrinterCommand> {
        let mut commands = self.header();
        commands.push(PrinterCommand::Rule {
            append_newline: true,
        });
        commands.extend(self.body_commands());
        commands.push(PrinterCommand::Cut);
        commands
    }
}

/// Render `commands` to the preview and the device in lockstep.
///
/// Command `i` is written to `preview` and then rendered to `device` before
/// command `i + 1` is touched. Nothing is sealed or sent here.
pub fn render(
    commands: &[PrinterCommand],
    device: &mut dyn Device,
    preview: &mut dyn Write,
    columns: usize,
) -> io::Result<()> {
    for command in commands {
        preview.write_all(command.render_to_preview(columns).as_bytes())?;
        command.render_to_device(device);
    }
    preview.flush()
}
