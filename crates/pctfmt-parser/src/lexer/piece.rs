//! Piece types produced by the template lexer.

use pctfmt_core::Span;
use std::fmt;

/// One lexed unit of a template.
///
/// The `'t` lifetime is the template string; literal text and keys are
/// slices of it, never copies.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Piece<'t> {
    /// A run of text without `%`, emitted verbatim.
    Literal { text: &'t str, span: Span },
    /// `%%`, emitted as a single `%`.
    Percent { span: Span },
    /// `%{key}`, substituted from the named table.
    Named { key: &'t str, span: Span },
    /// `%<digits>` with an optional `'` terminator, substituted from the
    /// positional list.
    Positional { index: usize, span: Span },
}

impl<'t> Piece<'t> {
    /// Location of this piece in the template.
    pub fn span(&self) -> Span {
        match self {
            Piece::Literal { span, .. }
            | Piece::Percent { span }
            | Piece::Named { span, .. }
            | Piece::Positional { span, .. } => *span,
        }
    }

    /// Whether this piece needs an argument to render.
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Piece::Named { .. } | Piece::Positional { .. })
    }
}

impl fmt::Debug for Piece<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Piece::Literal { text, span } => write!(f, "Literal({text:?} @ {span})"),
            Piece::Percent { span } => write!(f, "Percent(@ {span})"),
            Piece::Named { key, span } => write!(f, "Named({key:?} @ {span})"),
            Piece::Positional { index, span } => write!(f, "Positional({index} @ {span})"),
        }
    }
}
