//! Named argument table.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::{ArgumentError, FormatResult, Value};

/// A mapping from string keys to erased arguments.
///
/// Keys are compared byte-for-byte: case-sensitive, no normalization.
/// Inserting an existing key replaces its value, so the last pair wins when
/// building from a list with duplicates.
#[derive(Debug, Clone, Default)]
pub struct NamedArgs<'a> {
    map: FxHashMap<&'a str, Value<'a>>,
}

impl<'a> NamedArgs<'a> {
    /// Create an empty table. Every lookup fails with `UnknownKey`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from a fixed list of pairs.
    pub fn from_pairs<const N: usize>(pairs: [(&'a str, Value<'a>); N]) -> Self {
        pairs.into_iter().collect()
    }

    /// Add or replace an argument, returning the replaced value.
    pub fn insert(&mut self, key: &'a str, value: Value<'a>) -> Option<Value<'a>> {
        self.map.insert(key, value)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the table holds no arguments.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Whether `key` has an argument.
    pub fn contains_key(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Look up the argument for `key`.
    pub fn get(&self, key: &str) -> Result<Value<'a>, ArgumentError> {
        self.map
            .get(key)
            .copied()
            .ok_or_else(|| ArgumentError::UnknownKey { key: key.to_owned() })
    }

    /// Render the argument for `key` into `sink`.
    pub fn render<W: fmt::Write + ?Sized>(&self, sink: &mut W, key: &str) -> FormatResult<()> {
        self.get(key)?.render(sink)?;
        Ok(())
    }

    /// Iterate over the keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.map.keys().copied()
    }
}

impl<'a> FromIterator<(&'a str, Value<'a>)> for NamedArgs<'a> {
    fn from_iter<I: IntoIterator<Item = (&'a str, Value<'a>)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().collect(),
        }
    }
}

impl<'a> Extend<(&'a str, Value<'a>)> for NamedArgs<'a> {
    fn extend<I: IntoIterator<Item = (&'a str, Value<'a>)>>(&mut self, iter: I) {
        self.map.extend(iter);
    }
}
