//! Unified error types for template formatting.
//!
//! Formatting fails for one of three reasons: the template itself is
//! malformed, a placeholder refers to an argument that was not supplied, or
//! the sink rejected a write.
//!
//! ## Error Hierarchy
//!
//! ```text
//! FormatError (top-level wrapper)
//! ├── TemplateError  - Malformed placeholder syntax (with Span)
//! ├── ArgumentError  - Positional index or named key not supplied
//! ├── Write          - std::fmt::Write sink failure
//! └── Io             - std::io::Write stream failure
//! ```
//!
//! ## Usage
//!
//! Phase-specific errors convert into `FormatError` with `?`:
//!
//! ```ignore
//! use pctfmt_core::{FormatResult, Span};
//!
//! fn render(template: &str) -> FormatResult<String> {
//!     let pieces = lex(template)?;    // TemplateError -> FormatError
//!     let value = args.get(index)?;   // ArgumentError -> FormatError
//!     Ok(out)
//! }
//! ```

use std::{fmt, io};

use thiserror::Error;

use crate::Span;

// ============================================================================
// Template Errors
// ============================================================================

/// Errors in the placeholder syntax of a template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// The template ends right after a `%`.
    #[error("unexpected end of template after '%' at {span}")]
    UnexpectedEnd { span: Span },

    /// A `%{` has no closing `}`.
    #[error("unterminated named argument at {span}")]
    UnterminatedNamedArg { span: Span },

    /// A `%{}` with nothing between the braces.
    #[error("empty named argument key at {span}")]
    EmptyNamedKey { span: Span },

    /// A `%` followed by something other than `%`, `{` or a digit.
    #[error("invalid escape '%{ch}' at {span}, expected '%', '{{' or a digit")]
    InvalidEscape { ch: char, span: Span },
}

impl TemplateError {
    /// Get the span where this error occurred.
    pub fn span(&self) -> Span {
        match self {
            TemplateError::UnexpectedEnd { span } => *span,
            TemplateError::UnterminatedNamedArg { span } => *span,
            TemplateError::EmptyNamedKey { span } => *span,
            TemplateError::InvalidEscape { span, .. } => *span,
        }
    }
}

// ============================================================================
// Argument Errors
// ============================================================================

/// Errors looking up the argument a placeholder refers to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    /// A positional placeholder index past the supplied arguments.
    #[error("positional argument index out of range: index={index}, len={len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A named placeholder key missing from the table.
    #[error("unknown named argument: key={key}")]
    UnknownKey { key: String },
}

// ============================================================================
// Unified Error Type
// ============================================================================

/// Top-level error returned by every formatting entry point.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The template is malformed.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// A placeholder refers to an argument that was not supplied.
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    /// A `fmt::Write` sink, or an argument's `Display` impl, failed.
    #[error("failed to write formatted output")]
    Write(#[from] fmt::Error),

    /// An `io::Write` stream failed.
    #[error("failed to write formatted output: {0}")]
    Io(#[from] io::Error),
}

impl FormatError {
    /// Check if this is a template syntax error.
    pub fn is_template(&self) -> bool {
        matches!(self, FormatError::Template(_))
    }

    /// Check if this is an argument lookup error.
    pub fn is_argument(&self) -> bool {
        matches!(self, FormatError::Argument(_))
    }

    /// Check if the sink failed.
    pub fn is_write(&self) -> bool {
        matches!(self, FormatError::Write(_) | FormatError::Io(_))
    }

    /// Location of the offending placeholder, for template errors.
    pub fn span(&self) -> Option<Span> {
        match self {
            FormatError::Template(err) => Some(err.span()),
            _ => None,
        }
    }
}

/// Result alias used throughout the formatting API.
pub type FormatResult<T> = Result<T, FormatError>;
