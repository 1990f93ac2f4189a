//! Lexer Common
//!
//! Source-location and lexeme types shared by the rule engine and the
//! language crates built on top of it.

pub mod position;
pub mod text_slice;

pub use position::Position;
pub use text_slice::TextSlice;
