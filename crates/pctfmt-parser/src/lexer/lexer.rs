//! Template lexer.
//!
//! The [`Lexer`] walks a template left to right and yields [`Piece`]s:
//! literal runs up to the next `%`, and whatever the `%` introduces.
//! Dispatch is on the single character after `%`:
//!
//! | after `%`     | result                                   |
//! |---------------|------------------------------------------|
//! | end of input  | `UnexpectedEnd`                          |
//! | `%`           | [`Piece::Percent`]                       |
//! | `{`           | [`Piece::Named`] up to the next `}`      |
//! | ASCII digit   | [`Piece::Positional`], optional `'` eaten |
//! | anything else | `InvalidEscape`                          |
//!
//! The lexer is fused: after the template is exhausted or an error has been
//! yielded, it only returns `None`.

use pctfmt_core::TemplateError;

use super::cursor::{Cursor, Mark, is_digit};
use super::piece::Piece;

const ARG_START: char = '%';
const NAMED_START: char = '{';
const NAMED_STOP: char = '}';
const POSITIONAL_BREAK: char = '\'';

/// Lexer for percent-placeholder templates.
///
/// Yields `Result<Piece, TemplateError>`; the first error ends the stream.
pub struct Lexer<'t> {
    /// Low-level character cursor.
    cursor: Cursor<'t>,
    /// Set once the input is exhausted or an error was returned.
    finished: bool,
}

impl<'t> Lexer<'t> {
    /// Create a new lexer for the given template.
    pub fn new(template: &'t str) -> Self {
        Self {
            cursor: Cursor::new(template),
            finished: false,
        }
    }

    /// The template being lexed.
    pub fn source(&self) -> &'t str {
        self.cursor.source()
    }

    /// Lex the whole template, stopping at the first error.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn tokenize(template: &'t str) -> Result<Vec<Piece<'t>>, TemplateError> {
        Lexer::new(template).collect()
    }

    // =========================================
    // Internal: Piece scanning
    // =========================================

    /// Scan the next piece, or `None` at end of input.
    fn scan_piece(&mut self) -> Result<Option<Piece<'t>>, TemplateError> {
        if self.cursor.is_eof() {
            return Ok(None);
        }

        let start = self.cursor.mark();

        if self.cursor.check(|c| c == ARG_START) {
            return self.scan_placeholder(start).map(Some);
        }

        let text = self.cursor.eat_until(ARG_START);
        Ok(Some(Piece::Literal {
            text,
            span: self.cursor.span_from(start),
        }))
    }

    /// Scan whatever follows a `%`.
    fn scan_placeholder(&mut self, start: Mark) -> Result<Piece<'t>, TemplateError> {
        self.cursor.advance(); // consume '%'

        match self.cursor.peek() {
            None => Err(TemplateError::UnexpectedEnd {
                span: self.cursor.span_from(start),
            }),

            Some(ARG_START) => {
                self.cursor.advance();
                Ok(Piece::Percent {
                    span: self.cursor.span_from(start),
                })
            }

            Some(NAMED_START) => {
                self.cursor.advance();
                self.scan_named(start)
            }

            Some(c) if c.is_ascii_digit() => self.scan_positional(start),

            Some(ch) => {
                // Consumed only to cover it in the span; the lexer stops here.
                self.cursor.advance();
                Err(TemplateError::InvalidEscape {
                    ch,
                    span: self.cursor.span_from(start),
                })
            }
        }
    }

    /// Scan the key of a `%{key}` placeholder. The cursor is past the `{`.
    fn scan_named(&mut self, start: Mark) -> Result<Piece<'t>, TemplateError> {
        let key = self.cursor.eat_until(NAMED_STOP);

        if !self.cursor.eat(NAMED_STOP) {
            return Err(TemplateError::UnterminatedNamedArg {
                span: self.cursor.span_from(start),
            });
        }

        let span = self.cursor.span_from(start);
        if key.is_empty() {
            return Err(TemplateError::EmptyNamedKey { span });
        }

        Ok(Piece::Named { key, span })
    }

    /// Scan the digits of a `%<digits>` placeholder. The cursor is on the
    /// first digit.
    fn scan_positional(&mut self, start: Mark) -> Result<Piece<'t>, TemplateError> {
        let digits = self.cursor.eat_while_ascii(is_digit);

        // Indices too large for usize saturate and are rejected by the
        // positional list as out of range.
        let index = digits.bytes().fold(0usize, |acc, b| {
            acc.saturating_mul(10).saturating_add(usize::from(b - b'0'))
        });

        self.cursor.eat(POSITIONAL_BREAK);

        Ok(Piece::Positional {
            index,
            span: self.cursor.span_from(start),
        })
    }
}

impl<'t> Iterator for Lexer<'t> {
    type Item = Result<Piece<'t>, TemplateError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.scan_piece() {
            Ok(Some(piece)) => Some(Ok(piece)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use pctfmt_core::Span;

    fn pieces(template: &str) -> Vec<Piece<'_>> {
        Lexer::tokenize(template).unwrap()
    }

    fn error(template: &str) -> TemplateError {
        Lexer::tokenize(template).unwrap_err()
    }

    /// Span on the first line starting at `col`, `len` bytes long.
    fn at(col: usize, len: usize) -> Span {
        Span::new(1, col, col - 1..col - 1 + len)
    }

    fn literal(text: &str, col: usize) -> Piece<'_> {
        Piece::Literal {
            text,
            span: at(col, text.len()),
        }
    }

    #[test]
    fn empty_template() {
        assert!(pieces("").is_empty());
    }

    #[test]
    fn plain_text_is_one_literal() {
        assert_eq!(pieces("just text"), [literal("just text", 1)]);
    }

    #[test]
    fn escaped_percent() {
        assert_eq!(
            pieces("a%%b"),
            [
                literal("a", 1),
                Piece::Percent {
                    span: at(2, 2)
                },
                literal("b", 4),
            ]
        );
    }

    #[test]
    fn named_placeholder() {
        assert_eq!(
            pieces("hi %{who}!"),
            [
                literal("hi ", 1),
                Piece::Named {
                    key: "who",
                    span: at(4, 6)
                },
                literal("!", 10),
            ]
        );
    }

    #[test]
    fn named_placeholder_at_end() {
        assert_eq!(
            pieces("%{last}"),
            [Piece::Named {
                key: "last",
                span: at(1, 7)
            }]
        );
    }

    #[test]
    fn named_key_keeps_any_characters() {
        let got = pieces("%{a b%{c}");
        assert_eq!(
            got,
            [Piece::Named {
                key: "a b%{c",
                span: at(1, 9)
            }]
        );
    }

    #[test]
    fn positional_placeholders() {
        assert_eq!(
            pieces("%0 %12"),
            [
                Piece::Positional {
                    index: 0,
                    span: at(1, 2)
                },
                literal(" ", 3),
                Piece::Positional {
                    index: 12,
                    span: at(4, 3)
                },
            ]
        );
    }

    #[test]
    fn apostrophe_terminates_digit_run() {
        assert_eq!(
            pieces("%0'5"),
            [
                Piece::Positional {
                    index: 0,
                    span: at(1, 3)
                },
                literal("5", 4),
            ]
        );
        assert_eq!(
            pieces("%05"),
            [Piece::Positional {
                index: 5,
                span: at(1, 3)
            }]
        );
    }

    #[test]
    fn only_one_apostrophe_is_consumed() {
        assert_eq!(
            pieces("%1''"),
            [
                Piece::Positional {
                    index: 1,
                    span: at(1, 3)
                },
                literal("'", 4),
            ]
        );
    }

    #[test]
    fn other_terminators_are_left_in_place() {
        assert_eq!(
            pieces("%3x"),
            [
                Piece::Positional {
                    index: 3,
                    span: at(1, 2)
                },
                literal("x", 3),
            ]
        );
    }

    #[test]
    fn apostrophe_after_named_is_literal() {
        assert_eq!(
            pieces("%{k}'"),
            [
                Piece::Named {
                    key: "k",
                    span: at(1, 4)
                },
                literal("'", 5),
            ]
        );
    }

    #[test]
    fn huge_index_saturates() {
        let got = pieces("%99999999999999999999999999");
        assert_eq!(got.len(), 1);
        assert!(matches!(got[0], Piece::Positional { index: usize::MAX, .. }));
    }

    #[test]
    fn percent_at_end_is_unexpected_end() {
        assert_eq!(
            error("abc %"),
            TemplateError::UnexpectedEnd {
                span: at(5, 1)
            }
        );
        assert!(matches!(error("%"), TemplateError::UnexpectedEnd { .. }));
    }

    #[test]
    fn unterminated_named() {
        assert_eq!(
            error("%{abc"),
            TemplateError::UnterminatedNamedArg {
                span: at(1, 5)
            }
        );
        assert!(matches!(error("x %{"), TemplateError::UnterminatedNamedArg { .. }));
    }

    #[test]
    fn empty_named_key() {
        assert_eq!(
            error("ok %{}"),
            TemplateError::EmptyNamedKey {
                span: at(4, 3)
            }
        );
    }

    #[test]
    fn invalid_escape() {
        assert_eq!(
            error("%q"),
            TemplateError::InvalidEscape {
                ch: 'q',
                span: at(1, 2)
            }
        );
        assert!(matches!(error("% 1"), TemplateError::InvalidEscape { ch: ' ', .. }));
        assert!(matches!(error("%é"), TemplateError::InvalidEscape { ch: 'é', .. }));
    }

    #[test]
    fn non_ascii_digits_are_not_indices() {
        assert!(matches!(error("%٣"), TemplateError::InvalidEscape { ch: '٣', .. }));
    }

    #[test]
    fn errors_report_line_and_column() {
        let err = error("first\nsecond %x");
        assert_eq!(err.span(), Span::new(2, 8, 13..15));
    }

    #[test]
    fn pieces_before_error_are_yielded() {
        let mut lexer = Lexer::new("a%0%q%1");
        assert!(matches!(lexer.next(), Some(Ok(Piece::Literal { text: "a", .. }))));
        assert!(matches!(lexer.next(), Some(Ok(Piece::Positional { index: 0, .. }))));
        assert!(matches!(lexer.next(), Some(Err(TemplateError::InvalidEscape { .. }))));
        // No resumption after a failure
        assert!(lexer.next().is_none());
        assert!(lexer.next().is_none());
    }

    #[test]
    fn spans_slice_back_into_template() {
        let template = "ünï %{key}\n%0'%%";
        let texts: Vec<_> = pieces(template)
            .iter()
            .map(|piece| piece.span().text(template))
            .collect();
        assert_eq!(
            texts,
            [Some("ünï "), Some("%{key}"), Some("\n"), Some("%0'"), Some("%%")]
        );
    }

    #[test]
    fn literal_runs_never_contain_percent() {
        let template = "a%%b%0c%{d}e%1'f";
        for piece in pieces(template) {
            if let Piece::Literal { text, .. } = piece {
                assert!(!text.contains('%'));
            }
        }
    }
}
