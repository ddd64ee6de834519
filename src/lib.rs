//! pctfmt: percent-placeholder string templating.
//!
//! Substitutes `%`-introduced placeholders in a template with the `Display`
//! text of positional and named arguments of any type.
//!
//! ## Template syntax
//!
//! | syntax        | meaning                                                      |
//! |---------------|--------------------------------------------------------------|
//! | `%%`          | a literal `%`                                                |
//! | `%{key}`      | the named argument `key` (any non-empty text up to `}`)      |
//! | `%3`          | the positional argument at zero-based index 3                |
//! | `%3'`         | the same; the `'` is dropped, so `%0'5` is arg 0 then `5`    |
//!
//! Any other character after `%`, a `%` at the very end, an unclosed `%{`,
//! or an empty `%{}` is a [`TemplateError`]. A placeholder without a
//! matching argument is an [`ArgumentError`]. Unused arguments are fine.
//!
//! ## Example
//!
//! ```
//! use pctfmt::fmt;
//!
//! let mila = String::from("mila");
//! let out = fmt!("%0 %{what} %1, %2 times", { "what" => mila }, "mama", "ramu", 10).unwrap();
//! assert_eq!(out, "mama mila ramu, 10 times");
//!
//! let err = fmt!("%{missing}").unwrap_err();
//! assert!(err.is_argument());
//! ```
//!
//! ## Crates
//!
//! - `pctfmt-core`: [`Value`], [`PositionalArgs`], [`NamedArgs`], errors
//! - `pctfmt-parser`: [`Lexer`] and [`Piece`]
//!
//! ## Features
//!
//! - `profiling`: instrument rendering and lexing with the `profiling` crate
//! - `profile-with-puffin`: route `profiling` scopes to puffin

mod macros;
mod render;
pub mod sink;
pub mod template;

pub use pctfmt_core::{
    ArgumentError, FormatError, FormatResult, NamedArgs, PositionalArgs, Span, TemplateError,
    Value,
};
pub use pctfmt_parser::{Lexer, Piece};

pub use render::{format, format_named, format_plain, format_positional, write, write_io};
pub use sink::IoSink;
pub use template::Template;
