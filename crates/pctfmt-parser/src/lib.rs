//! pctfmt template parser crate.
//!
//! This crate provides the lexer for percent-placeholder templates.
//! It includes:
//! - A position-tracking cursor over the template text
//! - [`Piece`] definitions (literal runs, `%%`, `%{key}`, `%<index>`)
//! - [`Lexer`], the scanner that turns a template into pieces
//!
//! # Example
//!
//! ```
//! use pctfmt_parser::{Lexer, Piece};
//!
//! let pieces = Lexer::tokenize("%0 says %{what}").unwrap();
//! assert!(matches!(pieces[0], Piece::Positional { index: 0, .. }));
//! assert!(matches!(pieces[2], Piece::Named { key: "what", .. }));
//! ```

pub mod lexer;

pub use lexer::{Lexer, Piece};
pub use pctfmt_core::{Span, TemplateError};
