use pctfmt_core::Span;

/// A cursor over template text that tracks position.
///
/// The unprocessed remainder is a shrinking view into the original template;
/// nothing is copied. Tracks byte offset, line number, and column number as
/// it advances so errors can point at the offending placeholder.
pub struct Cursor<'t> {
    /// The template text being scanned.
    source: &'t str,
    /// Remaining template text (slice starting at current position).
    rest: &'t str,
    /// Current byte offset from start of template.
    offset: usize,
    /// Current line number (1-indexed).
    line: usize,
    /// Current column number (1-indexed, byte-based).
    column: usize,
}

/// A saved cursor position, the start of a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark {
    offset: usize,
    line: usize,
    column: usize,
}

impl<'t> Cursor<'t> {
    /// Create a new cursor at the start of the template.
    pub fn new(source: &'t str) -> Self {
        Self {
            source,
            rest: source,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Get the full template text.
    #[inline]
    pub fn source(&self) -> &'t str {
        self.source
    }

    /// Current byte offset from start of template.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Current line number (1-indexed).
    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Current column number (1-indexed, byte-based).
    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }

    /// Remember the current position.
    #[inline]
    pub fn mark(&self) -> Mark {
        Mark {
            offset: self.offset,
            line: self.line,
            column: self.column,
        }
    }

    /// Span from `start` up to the current position.
    #[inline]
    pub fn span_from(&self, start: Mark) -> Span {
        Span::new(start.line, start.column, start.offset..self.offset)
    }

    /// Check if we've reached the end of input.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.rest.is_empty()
    }

    /// Peek at the current character without consuming it.
    ///
    /// ASCII fast path avoids iterator creation for the common case.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        let bytes = self.rest.as_bytes();
        let first = *bytes.first()?;
        if first < 128 {
            Some(first as char)
        } else {
            self.rest.chars().next()
        }
    }

    /// Check if the current character satisfies a predicate.
    #[inline]
    pub fn check(&self, f: impl Fn(char) -> bool) -> bool {
        self.peek().is_some_and(f)
    }

    /// Consume the current character and advance.
    ///
    /// Returns the consumed character, or `None` if at EOF.
    /// Updates line/column tracking.
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        let len = ch.len_utf8();

        self.rest = &self.rest[len..];
        self.offset += len;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += len;
        }

        Some(ch)
    }

    /// Advance by `n` bytes, updating line/column tracking.
    ///
    /// `n` must land on a UTF-8 boundary. Returns the consumed text.
    pub fn advance_bytes(&mut self, n: usize) -> &'t str {
        let (taken, rest) = self.rest.split_at(n);

        match taken.rfind('\n') {
            Some(last) => {
                self.line += taken.bytes().filter(|&b| b == b'\n').count();
                self.column = taken.len() - last;
            }
            None => self.column += n,
        }

        self.rest = rest;
        self.offset += n;
        taken
    }

    /// Consume if the current character matches.
    #[inline]
    pub fn eat(&mut self, ch: char) -> bool {
        if self.peek() == Some(ch) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume everything before the next `ch`, or the whole remainder if
    /// `ch` does not occur.
    ///
    /// Returns the consumed slice. The cursor stops on `ch` itself.
    pub fn eat_until(&mut self, ch: char) -> &'t str {
        let n = self.rest.find(ch).unwrap_or(self.rest.len());
        self.advance_bytes(n)
    }

    /// Consume ASCII bytes while the predicate matches.
    ///
    /// Operates directly on bytes. Does NOT handle newlines; use only for
    /// runs like digits where newlines cannot match.
    #[inline]
    pub fn eat_while_ascii(&mut self, f: impl Fn(u8) -> bool) -> &'t str {
        let n = self
            .rest
            .bytes()
            .take_while(|&b| b < 128 && f(b))
            .count();
        let (taken, rest) = self.rest.split_at(n);
        self.rest = rest;
        self.offset += n;
        self.column += n;
        taken
    }
}

/// Check if a byte is a decimal digit.
///
/// Fixed to ASCII `0`-`9` regardless of locale.
#[inline]
pub fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}
