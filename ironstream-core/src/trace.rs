//! Stack-trace diagnostics for failed stream operations.
//!
//! An optional aid: nothing in the stream core depends on it. Callers that
//! want a call-stack snapshot alongside an error wrap it in [`Traced`] at the
//! point of failure and render the snapshot to any output sink.

use std::backtrace::{Backtrace, BacktraceStatus};
use std::fmt;
use std::io::Write;

use crate::error::Error;

/// A call-stack snapshot.
///
/// Capture honors `RUST_BACKTRACE`; when disabled the snapshot carries no
/// frames and renders a placeholder.
#[derive(Debug)]
pub struct StackTrace {
    inner: Backtrace,
}

impl StackTrace {
    /// Captures the call stack at the current point of execution.
    #[must_use]
    pub fn capture() -> Self {
        Self {
            inner: Backtrace::capture(),
        }
    }

    /// True if frames were actually collected.
    #[must_use]
    pub fn is_captured(&self) -> bool {
        matches!(self.inner.status(), BacktraceStatus::Captured)
    }

    /// Renders the snapshot to the given sink.
    ///
    /// # Errors
    /// Propagates any failure from the sink.
    pub fn render(&self, sink: &mut dyn Write) -> std::io::Result<()> {
        writeln!(sink, "{}", self.inner)
    }
}

/// An error paired with the stack captured where it surfaced.
#[derive(Debug)]
pub struct Traced {
    error: Error,
    trace: StackTrace,
}

impl Traced {
    /// Wraps `error`, capturing the current call stack.
    #[must_use]
    pub fn new(error: Error) -> Self {
        Self {
            error,
            trace: StackTrace::capture(),
        }
    }

    /// The wrapped error.
    #[must_use]
    pub fn error(&self) -> &Error {
        &self.error
    }

    /// The captured snapshot.
    #[must_use]
    pub fn trace(&self) -> &StackTrace {
        &self.trace
    }

    /// Renders the captured snapshot to the given sink.
    ///
    /// # Errors
    /// Propagates any failure from the sink.
    pub fn print_stack_trace(&self, sink: &mut dyn Write) -> std::io::Result<()> {
        self.trace.render(sink)
    }
}

impl fmt::Display for Traced {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for Traced {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl From<Error> for Traced {
    fn from(error: Error) -> Self {
        Self::new(error)
    }
}
