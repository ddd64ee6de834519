//! Rendering driver and entry points.
//!
//! Every entry point funnels into [`write`]: lex the template piece by
//! piece and emit each piece into the sink as soon as it is recognized.
//! The first error stops rendering. Text already emitted stays in the sink.
//!
//! | arguments          | new `String`          | `fmt::Write` | `io::Write`    |
//! |--------------------|-----------------------|--------------|----------------|
//! | named + positional | [`format`]            | [`write`]    | [`write_io`]   |
//! | named only         | [`format_named`]      |              |                |
//! | positional only    | [`format_positional`] |              |                |
//! | none               | [`format_plain`]      |              |                |
//!
//! The [`fmt!`](crate::fmt), [`fmt_to!`](crate::fmt_to) and
//! [`fmt_io!`](crate::fmt_io) macros cover every argument shape for each
//! sink.

use std::{fmt, io};

use pctfmt_core::{FormatResult, NamedArgs, PositionalArgs};
use pctfmt_parser::{Lexer, Piece};

use crate::sink::IoSink;

/// Render `template` into a `fmt::Write` sink.
///
/// # Example
///
/// ```
/// use pctfmt::{NamedArgs, PositionalArgs, Value};
///
/// let mut out = String::from("> ");
/// let named = NamedArgs::from_pairs([("mila", Value::new(&"mila"))]);
/// let positional = PositionalArgs::new([Value::new(&"mama"), Value::new(&"ramu")]);
/// pctfmt::write(&mut out, "%0 %{mila} %1", &named, &positional).unwrap();
/// assert_eq!(out, "> mama mila ramu");
/// ```
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn write<W: fmt::Write + ?Sized, const N: usize>(
    out: &mut W,
    template: &str,
    named: &NamedArgs<'_>,
    positional: &PositionalArgs<'_, N>,
) -> FormatResult<()> {
    for piece in Lexer::new(template) {
        emit(out, piece?, named, positional)?;
    }
    Ok(())
}

/// Render `template` into an `io::Write` stream.
///
/// Stream failures are reported as [`FormatError::Io`](crate::FormatError::Io).
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn write_io<W: io::Write + ?Sized, const N: usize>(
    out: &mut W,
    template: &str,
    named: &NamedArgs<'_>,
    positional: &PositionalArgs<'_, N>,
) -> FormatResult<()> {
    let mut sink = IoSink::new(out);
    let result = write(&mut sink, template, named, positional);
    sink.finish(result)
}

/// Render `template` into a new `String`.
pub fn format<const N: usize>(
    template: &str,
    named: &NamedArgs<'_>,
    positional: &PositionalArgs<'_, N>,
) -> FormatResult<String> {
    let mut out = String::with_capacity(template.len());
    write(&mut out, template, named, positional)?;
    Ok(out)
}

/// Render a template that takes no arguments.
///
/// Only `%%` escapes are accepted; any placeholder fails its lookup.
pub fn format_plain(template: &str) -> FormatResult<String> {
    format(template, &NamedArgs::new(), &PositionalArgs::empty())
}

/// Render a template with named arguments only.
pub fn format_named(template: &str, named: &NamedArgs<'_>) -> FormatResult<String> {
    format(template, named, &PositionalArgs::empty())
}

/// Render a template with positional arguments only.
pub fn format_positional<const N: usize>(
    template: &str,
    positional: &PositionalArgs<'_, N>,
) -> FormatResult<String> {
    format(template, &NamedArgs::new(), positional)
}

/// Emit one piece, looking up its argument if it is a placeholder.
#[inline]
pub(crate) fn emit<W: fmt::Write + ?Sized, const N: usize>(
    out: &mut W,
    piece: Piece<'_>,
    named: &NamedArgs<'_>,
    positional: &PositionalArgs<'_, N>,
) -> FormatResult<()> {
    match piece {
        Piece::Literal { text, .. } => out.write_str(text)?,
        Piece::Percent { .. } => out.write_char('%')?,
        Piece::Named { key, .. } => named.render(out, key)?,
        Piece::Positional { index, .. } => positional.render(out, index)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pctfmt_core::{ArgumentError, FormatError, TemplateError, Value};

    #[test]
    fn write_appends_to_existing_text() {
        let mut out = String::from("[");
        write(&mut out, "%%]", &NamedArgs::new(), &PositionalArgs::empty()).unwrap();
        assert_eq!(out, "[%]");
    }

    #[test]
    fn write_accepts_unsized_sink() {
        let mut out = String::new();
        let sink: &mut dyn fmt::Write = &mut out;
        let positional = PositionalArgs::new([Value::new(&7)]);
        write(sink, "n=%0", &NamedArgs::new(), &positional).unwrap();
        assert_eq!(out, "n=7");
    }

    #[test]
    fn output_before_failure_is_kept() {
        let mut out = String::new();
        let positional = PositionalArgs::new([Value::new(&"mama")]);
        let err = write(&mut out, "%0 then %1 never", &NamedArgs::new(), &positional).unwrap_err();

        assert!(matches!(
            err,
            FormatError::Argument(ArgumentError::IndexOutOfRange { index: 1, len: 1 })
        ));
        assert_eq!(out, "mama then ");
    }

    #[test]
    fn template_error_stops_rendering() {
        let mut out = String::new();
        let err = write(
            &mut out,
            "ok %q %%",
            &NamedArgs::new(),
            &PositionalArgs::empty(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            FormatError::Template(TemplateError::InvalidEscape { ch: 'q', .. })
        ));
        assert_eq!(out, "ok ");
    }

    #[test]
    fn write_io_streams_bytes() {
        let mut out: Vec<u8> = Vec::new();
        let named = NamedArgs::from_pairs([("n", Value::new(&50))]);
        write_io(&mut out, "%{n}%%", &named, &PositionalArgs::empty()).unwrap();
        assert_eq!(out, b"50%");
    }

    #[test]
    fn write_io_reports_stream_failure() {
        struct Closed;

        impl io::Write for Closed {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let err = write_io(
            &mut Closed,
            "text",
            &NamedArgs::new(),
            &PositionalArgs::empty(),
        )
        .unwrap_err();
        match err {
            FormatError::Io(err) => assert_eq!(err.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn display_failure_is_write_error() {
        struct Broken;

        impl fmt::Display for Broken {
            fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
                Err(fmt::Error)
            }
        }

        let broken = Broken;
        let positional = PositionalArgs::new([Value::new(&broken)]);
        let err = format_positional("%0", &positional).unwrap_err();
        assert!(matches!(err, FormatError::Write(_)));
    }

    #[test]
    fn shape_helpers() {
        assert_eq!(format_plain("100%%").unwrap(), "100%");

        let named = NamedArgs::from_pairs([("who", Value::new(&"mama"))]);
        assert_eq!(format_named("%{who}!", &named).unwrap(), "mama!");

        let positional = PositionalArgs::new([Value::new(&1), Value::new(&2)]);
        assert_eq!(format_positional("%1%0", &positional).unwrap(), "21");
    }
}
