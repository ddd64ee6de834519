//! Output sinks.
//!
//! Rendering writes through [`std::fmt::Write`]. Byte streams implementing
//! [`std::io::Write`] are adapted with [`IoSink`], which keeps the
//! underlying `io::Error` so it can be reported instead of the opaque
//! `fmt::Error`.

use std::{fmt, io};

use pctfmt_core::{FormatError, FormatResult};

/// Adapts an `io::Write` stream into a `fmt::Write` sink.
pub struct IoSink<'w, W: io::Write + ?Sized> {
    inner: &'w mut W,
    /// First stream failure, if any.
    error: Option<io::Error>,
}

impl<'w, W: io::Write + ?Sized> IoSink<'w, W> {
    /// Wrap a stream.
    pub fn new(inner: &'w mut W) -> Self {
        Self { inner, error: None }
    }

    /// Take the stream error recorded by a failed write, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// Turn the outcome of rendering into this sink into the final result,
    /// replacing a bare `fmt::Error` with the stream error that caused it.
    pub fn finish(mut self, result: FormatResult<()>) -> FormatResult<()> {
        match result {
            Err(FormatError::Write(err)) => Err(self
                .take_error()
                .map_or(FormatError::Write(err), FormatError::Io)),
            other => other,
        }
    }
}

impl<W: io::Write + ?Sized> fmt::Write for IoSink<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_all(s.as_bytes()).map_err(|err| {
            self.error = Some(err);
            fmt::Error
        })
    }
}
