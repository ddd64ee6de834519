//! Positional argument list.

use std::fmt;

use crate::{ArgumentError, FormatResult, Value};

/// A fixed-size, order-preserving list of erased arguments.
///
/// Index 0 is the first argument in call order. The length is part of the
/// type and never changes after construction.
#[derive(Debug, Clone, Copy)]
pub struct PositionalArgs<'a, const N: usize> {
    values: [Value<'a>; N],
}

impl<'a> PositionalArgs<'a, 0> {
    /// The empty list. Every lookup fails with `IndexOutOfRange`.
    pub const fn empty() -> Self {
        Self { values: [] }
    }
}

impl<'a, const N: usize> PositionalArgs<'a, N> {
    /// Build the list from values in call order.
    pub const fn new(values: [Value<'a>; N]) -> Self {
        Self { values }
    }

    /// Number of arguments.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Whether the list holds no arguments.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Look up the argument at `index`.
    pub fn get(&self, index: usize) -> Result<Value<'a>, ArgumentError> {
        self.values
            .get(index)
            .copied()
            .ok_or(ArgumentError::IndexOutOfRange { index, len: N })
    }

    /// Render the argument at `index` into `sink`.
    pub fn render<W: fmt::Write + ?Sized>(&self, sink: &mut W, index: usize) -> FormatResult<()> {
        self.get(index)?.render(sink)?;
        Ok(())
    }

    /// Iterate over the arguments in call order.
    pub fn iter(&self) -> impl Iterator<Item = Value<'a>> + '_ {
        self.values.iter().copied()
    }
}

impl<'a, const N: usize> From<[Value<'a>; N]> for PositionalArgs<'a, N> {
    fn from(values: [Value<'a>; N]) -> Self {
        Self::new(values)
    }
}

impl Default for PositionalArgs<'_, 0> {
    fn default() -> Self {
        Self::empty()
    }
}
