//! Lexical analysis of percent-placeholder templates.

mod cursor;
mod lexer;
mod piece;

pub use lexer::Lexer;
pub use piece::Piece;
