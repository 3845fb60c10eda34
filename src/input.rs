//! # Line Input
//!
//! Sources of operator input for the note session.
//!
//! Any [`tokio::io::Lines`] works as a source. Interactive stdin goes
//! through [`BlockingLines`] instead: the blocking reads happen on a
//! detached thread and reach the session over a channel. Dropping the
//! receiver never waits for a read in progress, so a cancelled session can
//! return (and the process exit) while the terminal is still waiting for a
//! line.

use std::future::Future;
use std::io::{self, BufRead};
use std::thread;

use tokio::io::{AsyncBufRead, Lines};
use tokio::sync::mpsc;

/// A stream of input lines without their terminators.
///
/// `next_line` must be cancel safe: dropping its future loses no line.
pub trait LineInput {
    /// The next line, or `None` at end of input.
    fn next_line(&mut self) -> impl Future<Output = io::Result<Option<String>>>;
}

impl<R: AsyncBufRead + Unpin> LineInput for Lines<R> {
    fn next_line(&mut self) -> impl Future<Output = io::Result<Option<String>>> {
        Lines::next_line(self)
    }
}

/// Lines read from a blocking reader on a background thread.
pub struct BlockingLines {
    rx: mpsc::UnboundedReceiver<io::Result<String>>,
}

impl BlockingLines {
    /// Read `reader` line by line on a new thread.
    ///
    /// The thread stops at end of input, after the first read error, or
    /// once the receiver is gone and another line arrives.
    pub fn spawn<R: BufRead + Send + 'static>(reader: R) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        thread::spawn(move || {
            for line in reader.lines() {
                let failed = line.is_err();
                if tx.send(line).is_err() || failed {
                    break;
                }
            }
        });
        Self { rx }
    }

    /// Process stdin.
    pub fn stdin() -> Self {
        Self::spawn(io::BufReader::new(io::stdin()))
    }
}

impl LineInput for BlockingLines {
    fn next_line(&mut self) -> impl Future<Output = io::Result<Option<String>>> {
        async move { self.rx.recv().await.transpose() }
    }
}
