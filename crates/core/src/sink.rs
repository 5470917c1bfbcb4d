//! Destinations for emitted lines of text.
//!
//! A [`Sink`] is write-only and append-only: lines arrive in call order and
//! nothing is acknowledged. Wrappers such as [`Emit`](crate::Emit) and the
//! handlers passed to [`Around`](crate::Around) or [`Guard`](crate::Guard)
//! write through a sink so the same composition can print to the terminal or
//! be recorded for inspection.

use std::{
    cell::RefCell,
    io::{self, Write},
    rc::Rc,
};

/// Receives lines of text in order.
pub trait Sink {
    /// Appends a single line.
    fn emit(&self, line: &str);
}

/// Discards every line.
impl Sink for () {
    fn emit(&self, _line: &str) {}
}

impl<S: Sink + ?Sized> Sink for &S {
    fn emit(&self, line: &str) {
        (**self).emit(line);
    }
}

/// Writes each line to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stdout;

impl Sink for Stdout {
    fn emit(&self, line: &str) {
        if let Err(err) = writeln!(io::stdout().lock(), "{line}") {
            tracing::warn!(%err, "failed to write line to stdout");
        }
    }
}

/// Keeps every emitted line in memory.
///
/// Clones share the same transcript, so one clone can be handed to the
/// wrappers while another is kept for reading.
///
/// # Example
///
/// ```rust
/// use veneer_core::{Recorder, Sink};
///
/// let recorder = Recorder::new();
/// let writer = recorder.clone();
///
/// writer.emit("first");
/// writer.emit("second");
///
/// assert_eq!(recorder.lines(), vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    lines: Rc<RefCell<Vec<String>>>,
}

impl Recorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the lines emitted so far.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Removes and returns the lines emitted so far.
    pub fn take(&self) -> Vec<String> {
        self.lines.take()
    }
}

impl Sink for Recorder {
    fn emit(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_owned());
    }
}
