//! Type-erased template arguments.
//!
//! A [`Value`] borrows a caller-owned argument and remembers how to render
//! it, so arguments of unrelated types can sit side by side in one
//! positional list or named table without the caller naming their types.
//!
//! # Example
//!
//! ```
//! use pctfmt_core::Value;
//!
//! let count = 42;
//! let name = String::from("mila");
//! let values = [Value::new(&count), Value::new(&name)];
//!
//! let mut out = String::new();
//! for value in &values {
//!     value.render(&mut out).unwrap();
//! }
//! assert_eq!(out, "42mila");
//! ```
//!
//! A value never outlives the argument it borrows:
//!
//! ```compile_fail
//! use pctfmt_core::Value;
//!
//! let value = {
//!     let count = 42;
//!     Value::new(&count)
//! };
//! println!("{value}");
//! ```

use std::fmt;

/// A borrowed argument paired with its rendering behavior.
///
/// The render behavior is fixed at construction through the `Display` vtable
/// of the concrete type, so there is no later type inspection and no heap
/// allocation. `Value` is `Copy`; copies share the same borrowed argument.
#[derive(Clone, Copy)]
pub struct Value<'a> {
    inner: &'a dyn fmt::Display,
}

impl<'a> Value<'a> {
    /// Erase `value` into a uniform handle.
    #[inline]
    pub fn new<A: fmt::Display>(value: &'a A) -> Self {
        Self { inner: value }
    }

    /// Write the argument's default textual form into `sink`.
    ///
    /// Errors come only from the sink or from the argument's own `Display`
    /// impl.
    #[inline]
    pub fn render<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        write!(sink, "{}", self.inner)
    }
}

impl<'a, A: fmt::Display> From<&'a A> for Value<'a> {
    fn from(value: &'a A) -> Self {
        Value::new(value)
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt(f)
    }
}

// Arguments only need `Display`, so show the rendered text.
impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Value")
            .field(&format_args!("{}", self.inner))
            .finish()
    }
}
