//! Locations inside a template.
//!
//! A [`Span`] is the byte range a piece or an error covers in the template
//! text, together with the line and column it starts at. The range slices
//! back into the template; the line and column are for messages.

use std::fmt;
use std::ops::Range;

/// A byte range of template text and where it starts.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Byte offset of the first byte.
    pub start: usize,
    /// Byte offset one past the last byte.
    pub end: usize,
    /// Line of `start` (1-indexed).
    pub line: usize,
    /// Column of `start` (1-indexed, byte-based).
    pub col: usize,
}

impl Span {
    /// Create a span covering `range`, starting at `line:col`.
    #[inline]
    pub fn new(line: usize, col: usize, range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end,
            line,
            col,
        }
    }

    /// The covered byte range.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The covered text of `source`, or `None` if the range does not fit
    /// `source` or splits a character.
    pub fn text<'s>(&self, source: &'s str) -> Option<&'s str> {
        source.get(self.range())
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} [{}..{}]", self.line, self.col, self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}
