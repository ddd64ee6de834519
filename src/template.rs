//! Pre-parsed templates.
//!
//! [`Template::parse`] lexes a template once, reporting any syntax error up
//! front, and keeps the pieces for repeated rendering. Rendering a parsed
//! template can then only fail on argument lookups or the sink.
//!
//! # Example
//!
//! ```
//! use pctfmt::{NamedArgs, PositionalArgs, Template, Value};
//!
//! let template = Template::parse("%{who} has %0 new messages").unwrap();
//! assert_eq!(template.positional_count(), 1);
//!
//! for (who, count) in [("mama", 3), ("mila", 0)] {
//!     let named = NamedArgs::from_pairs([("who", Value::new(&who))]);
//!     let positional = PositionalArgs::new([Value::new(&count)]);
//!     let line = template.render(&named, &positional).unwrap();
//!     assert!(line.starts_with(who));
//! }
//! ```

use std::{fmt, io};

use pctfmt_core::{FormatResult, NamedArgs, PositionalArgs, Span, TemplateError};
use pctfmt_parser::{Lexer, Piece};

use crate::render::emit;
use crate::sink::IoSink;

/// A validated template borrowing its source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template<'t> {
    source: &'t str,
    pieces: Vec<Piece<'t>>,
}

impl<'t> Template<'t> {
    /// Lex and validate `source`.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn parse(source: &'t str) -> Result<Self, TemplateError> {
        let pieces = Lexer::tokenize(source)?;
        Ok(Self { source, pieces })
    }

    /// The original template text.
    pub fn source(&self) -> &'t str {
        self.source
    }

    /// The lexed pieces, in template order.
    pub fn pieces(&self) -> &[Piece<'t>] {
        &self.pieces
    }

    /// The template text `span` covers, e.g. the source form of a piece.
    pub fn text(&self, span: Span) -> Option<&'t str> {
        span.text(self.source)
    }

    /// Number of positional arguments the template needs: one more than the
    /// highest index it references, or 0 if it has no positional
    /// placeholders.
    pub fn positional_count(&self) -> usize {
        self.pieces
            .iter()
            .filter_map(|piece| match piece {
                Piece::Positional { index, .. } => Some(index.saturating_add(1)),
                _ => None,
            })
            .max()
            .unwrap_or(0)
    }

    /// Keys of the named placeholders, in template order. A key used more
    /// than once appears more than once.
    pub fn named_keys(&self) -> impl Iterator<Item = &'t str> + '_ {
        self.pieces.iter().filter_map(|piece| match piece {
            Piece::Named { key, .. } => Some(*key),
            _ => None,
        })
    }

    /// Render into a `fmt::Write` sink.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn render_to<W: fmt::Write + ?Sized, const N: usize>(
        &self,
        out: &mut W,
        named: &NamedArgs<'_>,
        positional: &PositionalArgs<'_, N>,
    ) -> FormatResult<()> {
        for piece in &self.pieces {
            emit(out, *piece, named, positional)?;
        }
        Ok(())
    }

    /// Render into an `io::Write` stream.
    pub fn render_io<W: io::Write + ?Sized, const N: usize>(
        &self,
        out: &mut W,
        named: &NamedArgs<'_>,
        positional: &PositionalArgs<'_, N>,
    ) -> FormatResult<()> {
        let mut sink = IoSink::new(out);
        let result = self.render_to(&mut sink, named, positional);
        sink.finish(result)
    }

    /// Render into a new `String`.
    pub fn render<const N: usize>(
        &self,
        named: &NamedArgs<'_>,
        positional: &PositionalArgs<'_, N>,
    ) -> FormatResult<String> {
        let mut out = String::with_capacity(self.source.len());
        self.render_to(&mut out, named, positional)?;
        Ok(out)
    }
}

impl<'t> TryFrom<&'t str> for Template<'t> {
    type Error = TemplateError;

    fn try_from(source: &'t str) -> Result<Self, Self::Error> {
        Template::parse(source)
    }
}

impl fmt::Display for Template<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pctfmt_core::{ArgumentError, FormatError, Value};

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn template_is_send_and_sync() {
        assert_send_sync::<Template<'static>>();
    }

    #[test]
    fn pieces_point_back_into_source() {
        let template = Template::parse("%{who} has %0'0%% left").unwrap();
        let texts: Vec<_> = template
            .pieces()
            .iter()
            .filter_map(|piece| template.text(piece.span()))
            .collect();
        assert_eq!(texts, ["%{who}", " has ", "%0'", "0", "%%", " left"]);
        assert_eq!(texts.concat(), template.source());
    }

    #[test]
    fn parse_rejects_bad_syntax_up_front() {
        // The error sits after a valid placeholder; parsing still fails.
        let err = Template::parse("%0 %{open").unwrap_err();
        assert!(matches!(err, TemplateError::UnterminatedNamedArg { .. }));
    }

    #[test]
    fn positional_count() {
        assert_eq!(Template::parse("no args").unwrap().positional_count(), 0);
        assert_eq!(Template::parse("%0").unwrap().positional_count(), 1);
        assert_eq!(Template::parse("%2 %0 %2").unwrap().positional_count(), 3);
        assert_eq!(Template::parse("%{a} %%").unwrap().positional_count(), 0);
    }

    #[test]
    fn named_keys_in_order() {
        let template = Template::parse("%{b} %0 %{a} %{b}").unwrap();
        let keys: Vec<_> = template.named_keys().collect();
        assert_eq!(keys, ["b", "a", "b"]);
    }

    #[test]
    fn renders_repeatedly() {
        let template = Template::parse("%0'0%%").unwrap();
        for n in 1..=3 {
            let positional = PositionalArgs::new([Value::new(&n)]);
            let out = template.render(&NamedArgs::new(), &positional).unwrap();
            assert_eq!(out, format!("{n}0%"));
        }
    }

    #[test]
    fn render_failures_are_lookups() {
        let template = Template::parse("%{who} %0").unwrap();
        let err = template
            .render(&NamedArgs::new(), &PositionalArgs::empty())
            .unwrap_err();
        assert!(matches!(
            err,
            FormatError::Argument(ArgumentError::UnknownKey { ref key }) if key == "who"
        ));
    }

    #[test]
    fn render_io_and_display() {
        let template: Template<'_> = "%{x}!".try_into().unwrap();
        let named = NamedArgs::from_pairs([("x", Value::new(&'y'))]);

        let mut out = Vec::new();
        template.render_io(&mut out, &named, &PositionalArgs::empty()).unwrap();
        assert_eq!(out, b"y!");
        assert_eq!(template.to_string(), "%{x}!");
        assert_eq!(template.source(), "%{x}!");
        assert_eq!(template.pieces().len(), 2);
    }
}
