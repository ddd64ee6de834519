//! Variadic argument macros.
//!
//! Argument packs of any length and mix of types are erased into
//! [`Value`](crate::Value)s at the call site. The named table, when present,
//! is written as a brace block and always comes before the positional
//! arguments.
//!
//! Arguments are borrowed, so temporaries such as `x + 1` live only until
//! the end of the enclosing statement. That is enough for [`fmt!`],
//! [`fmt_to!`] and [`fmt_io!`]; a list built with [`args!`] or [`named!`]
//! and kept in a `let` binding needs its arguments to be variables or
//! literals.
//!
//! A brace block right after the template is always read as the named
//! table. A block expression meant as the first positional argument, like
//! `{ let n = 1; n }`, does not parse there; bind it to a variable or wrap
//! it in parentheses first.

/// Build a [`PositionalArgs`](crate::PositionalArgs) from a list of
/// arguments in call order.
///
/// ```
/// let mila = String::from("mila");
/// let positional = pctfmt::args!["mama", mila, 3];
/// assert_eq!(positional.len(), 3);
/// ```
#[macro_export]
macro_rules! args {
    ($($arg:expr),* $(,)?) => {
        $crate::PositionalArgs::new([$($crate::Value::new(&$arg)),*])
    };
}

/// Build a [`NamedArgs`](crate::NamedArgs) table from `key => value` pairs.
///
/// ```
/// let named = pctfmt::named! { "who" => "mama", "count" => 2 };
/// assert!(named.contains_key("count"));
/// ```
#[macro_export]
macro_rules! named {
    ($($key:expr => $value:expr),* $(,)?) => {
        $crate::NamedArgs::from_pairs([$(($key, $crate::Value::new(&$value))),*])
    };
}

/// Render a template into a new `String`.
///
/// A `{ ... }` directly after the template is the named table, never a
/// positional block expression. Wrap such a block in parentheses:
/// `fmt!("%0", ({ let n = 1; n }))`.
///
/// ```
/// use pctfmt::fmt;
///
/// assert_eq!(fmt!("100%%").unwrap(), "100%");
/// assert_eq!(fmt!("%0 + %1", 2, 3).unwrap(), "2 + 3");
/// assert_eq!(fmt!("%{who}", { "who" => "mama" }).unwrap(), "mama");
/// assert_eq!(
///     fmt!("%0 %{mila} %1", { "mila" => "mila" }, "mama", "ramu").unwrap(),
///     "mama mila ramu"
/// );
/// ```
#[macro_export]
macro_rules! fmt {
    ($template:expr, { $($key:expr => $value:expr),* $(,)? } $(, $arg:expr)*) => {
        $crate::format(
            $template,
            &$crate::named!($($key => $value),*),
            &$crate::args!($($arg),*),
        )
    };
    ($template:expr $(, $arg:expr)*) => {
        $crate::format($template, &$crate::NamedArgs::new(), &$crate::args!($($arg),*))
    };
}

/// Render a template into a `fmt::Write` sink.
///
/// A `{ ... }` directly after the template is the named table, never a
/// positional block expression. Wrap such a block in parentheses:
/// `fmt!("%0", ({ let n = 1; n }))`.
///
/// ```
/// let mut out = String::from("total: ");
/// pctfmt::fmt_to!(&mut out, "%0%%", 99).unwrap();
/// assert_eq!(out, "total: 99%");
/// ```
#[macro_export]
macro_rules! fmt_to {
    ($out:expr, $template:expr, { $($key:expr => $value:expr),* $(,)? } $(, $arg:expr)*) => {
        $crate::write(
            $out,
            $template,
            &$crate::named!($($key => $value),*),
            &$crate::args!($($arg),*),
        )
    };
    ($out:expr, $template:expr $(, $arg:expr)*) => {
        $crate::write($out, $template, &$crate::NamedArgs::new(), &$crate::args!($($arg),*))
    };
}

/// Render a template into an `io::Write` stream.
///
/// A `{ ... }` directly after the template is the named table, never a
/// positional block expression. Wrap such a block in parentheses:
/// `fmt!("%0", ({ let n = 1; n }))`.
///
/// ```
/// let mut out: Vec<u8> = Vec::new();
/// pctfmt::fmt_io!(&mut out, "%{k}=%0", { "k" => "n" }, 5).unwrap();
/// assert_eq!(out, b"n=5");
/// ```
#[macro_export]
macro_rules! fmt_io {
    ($out:expr, $template:expr, { $($key:expr => $value:expr),* $(,)? } $(, $arg:expr)*) => {
        $crate::write_io(
            $out,
            $template,
            &$crate::named!($($key => $value),*),
            &$crate::args!($($arg),*),
        )
    };
    ($out:expr, $template:expr $(, $arg:expr)*) => {
        $crate::write_io($out, $template, &$crate::NamedArgs::new(), &$crate::args!($($arg),*))
    };
}
