//! pctfmt core types
//!
//! Shared building blocks for percent-placeholder templating.
//!
//! ## Modules
//!
//! - [`error`]: Error hierarchy (`TemplateError`, `ArgumentError`, `FormatError`)
//! - [`named`]: Named argument table keyed by string
//! - [`positional`]: Fixed-size positional argument list
//! - [`span`]: Template source locations
//! - [`value`]: Type-erased borrowed arguments

pub mod error;
pub mod named;
pub mod positional;
pub mod span;
pub mod value;

pub use error::{ArgumentError, FormatError, FormatResult, TemplateError};
pub use named::NamedArgs;
pub use positional::PositionalArgs;
pub use span::Span;
pub use value::Value;
