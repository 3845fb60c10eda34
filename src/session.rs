//! # Interactive Note Session
//!
//! Prompts for a subject and body lines, prints the note, and repeats.
//!
//! ## Suspension Points
//!
//! | Point | Cancellable |
//! |-------|-------------|
//! | subject / line prompt | yes, the partial note is dropped |
//! | connectivity probe | no, runs once before the loop |
//! | job flush | no, always completes; shutdown is checked right after |
//!
//! A note's bytes are compiled in full before the transport is touched, so
//! the printer receives either the whole note or nothing.
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use taskslip::printer::PrinterConfig;
//! use taskslip::input::BlockingLines;
//! use taskslip::session::Session;
//! use taskslip::transport::BluetoothTransport;
//!
//! # async fn example() -> Result<(), taskslip::error::SlipError> {
//! let transport = Arc::new(BluetoothTransport::default());
//! let mut session = Session::connect(PrinterConfig::default(), transport).await?;
//!
//! let shutdown = async {
//!     let _ = tokio::signal::ctrl_c().await;
//! };
//! session
//!     .run_lines(BlockingLines::stdin(), &mut std::io::stdout(), shutdown)
//!     .await?;
//! # Ok(())
//! # }
//! ```

use std::future::Future;
use std::io::{self, Write};
use std::pin::Pin;
use std::sync::Arc;

use chrono::{Local, NaiveDateTime};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::command::PrinterCommand;
use crate::device::{Device, Printer};
use crate::error::SlipError;
use crate::input::LineInput;
use crate::note::{self, Note, NoteBody};
use crate::printer::PrinterConfig;
use crate::transport::Transport;

/// Subject echoed when the operator leaves the subject empty.
const DEFAULT_SUBJECT: &str = "Task";

/// Indent of echoed subject and rules in the transcript.
const ECHO_INDENT: &str = "    ";

/// Why [`Session::run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The shutdown future completed.
    Cancelled,
    /// Input reached end of file.
    InputClosed,
}

/// Outcome of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Notes delivered to the transport.
    pub printed: usize,
    /// Notes whose flush failed.
    pub failed: usize,
    pub reason: StopReason,
}

enum Prompted {
    Line(String),
    Closed,
    Cancelled,
}

/// An open connection to one printer and its job buffer.
pub struct Session {
    transport: Arc<dyn Transport>,
    printer: Printer,
    clock: fn() -> NaiveDateTime,
}

impl Session {
    /// Create a session without probing the printer.
    pub fn new(config: PrinterConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            printer: Printer::new(config),
            clock: local_now,
        }
    }

    /// Probe the printer, then create a session.
    ///
    /// ## Errors
    ///
    /// [`SlipError::NotConnected`] if the probe fails. Callers treat this as
    /// fatal.
    pub async fn connect(
        config: PrinterConfig,
        transport: Arc<dyn Transport>,
    ) -> Result<Self, SlipError> {
        println!("[printer] Connecting to {}...", transport.describe());

        let probe = Arc::clone(&transport);
        let result = tokio::task::spawn_blocking(move || probe.probe())
            .await
            .map_err(|e| SlipError::NotConnected(format!("probe task failed: {}", e)))?;

        match result {
            Ok(()) => println!("[printer] CONNECTED"),
            Err(e) => {
                println!("[printer] NOT CONNECTED");
                return Err(e);
            }
        }

        Ok(Self::new(config, transport))
    }

    /// Use a fixed clock for note timestamps.
    pub fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &PrinterConfig {
        self.printer.config()
    }

    /// Prompt for notes read from `input` until `shutdown` completes or
    /// input ends. See [`Session::run_lines`].
    pub async fn run<R, W, F>(
        &mut self,
        input: R,
        out: &mut W,
        shutdown: F,
    ) -> Result<SessionSummary, SlipError>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
        F: Future<Output = ()>,
    {
        self.run_lines(input.lines(), out, shutdown).await
    }

    /// Prompt for notes and print them until `shutdown` completes or input
    /// ends.
    ///
    /// Prompts, the echoed subject, each note's preview and the send status
    /// are written to `out`. A failed flush is reported and the loop moves
    /// on to the next note. A failed write to `out` ends the session.
    pub async fn run_lines<I, W, F>(
        &mut self,
        mut lines: I,
        out: &mut W,
        shutdown: F,
    ) -> Result<SessionSummary, SlipError>
    where
        I: LineInput,
        W: Write,
        F: Future<Output = ()>,
    {
        let mut shutdown = std::pin::pin!(shutdown);
        let mut summary = SessionSummary {
            printed: 0,
            failed: 0,
            reason: StopReason::InputClosed,
        };
        let rule = "-".repeat(self.config().columns);

        loop {
            write!(out, "Subject: ")?;
            out.flush()?;
            let subject = match prompt(&mut lines, &mut shutdown).await? {
                Prompted::Line(line) => line,
                Prompted::Closed => return Ok(summary),
                Prompted::Cancelled => return Ok(cancelled(summary)),
            };

            let shown = match subject.trim() {
                "" => DEFAULT_SUBJECT,
                trimmed => trimmed,
            };
            writeln!(out)?;
            writeln!(out, "{}{}", ECHO_INDENT, shown)?;
            writeln!(out, "{}{}", ECHO_INDENT, rule)?;

            let mut body = NoteBody::new();
            loop {
                write!(out, "  ")?;
                out.flush()?;
                match prompt(&mut lines, &mut shutdown).await? {
                    Prompted::Line(line) => {
                        if body.push(line) {
                            break;
                        }
                    }
                    Prompted::Closed => return Ok(summary),
                    Prompted::Cancelled => return Ok(cancelled(summary)),
                }
            }
            writeln!(out, "{}{}", ECHO_INDENT, rule)?;
            writeln!(out)?;

            let note = Note::new(&subject, (self.clock)(), body.finish());
            match self.print(&note, out).await {
                Ok(sent) => {
                    writeln!(out, "[printer] Sent {} bytes", sent)?;
                    summary.printed += 1;
                }
                Err(SlipError::Io(e)) => return Err(SlipError::Io(e)),
                Err(e) => {
                    writeln!(out, "[printer] Flush failed: {}", e)?;
                    summary.failed += 1;
                }
            }
        }
    }

    /// Render `note` to `preview` and the printer, then send it.
    ///
    /// The job buffer is empty afterwards whether or not the send worked.
    /// Returns the number of bytes sent.
    pub async fn print<W: Write>(&mut self, note: &Note, preview: &mut W) -> Result<usize, SlipError> {
        let columns = self.config().columns;
        let rendered = note::render(&note.commands(), &mut self.printer, preview, columns);
        if let Err(e) = rendered {
            self.printer.clear();
            return Err(e.into());
        }

        PrinterCommand::Execute.render_to_device(&mut self.printer);
        let job = self.printer.take_job();
        self.printer.clear();

        let sent = job.len();
        let transport = Arc::clone(&self.transport);
        tokio::task::spawn_blocking(move || transport.send(&job))
            .await
            .map_err(|e| SlipError::Transport(format!("flush task failed: {}", e)))??;
        Ok(sent)
    }
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

fn cancelled(summary: SessionSummary) -> SessionSummary {
    SessionSummary {
        reason: StopReason::Cancelled,
        ..summary
    }
}

/// Wait for the next input line, or for shutdown.
async fn prompt<I, F>(lines: &mut I, shutdown: &mut Pin<&mut F>) -> io::Result<Prompted>
where
    I: LineInput,
    F: Future<Output = ()>,
{
    tokio::select! {
        biased;
        _ = shutdown.as_mut() => Ok(Prompted::Cancelled),
        line = lines.next_line() => Ok(match line? {
            Some(line) => Prompted::Line(line),
            None => Prompted::Closed,
        }),
    }
}
