//! # Error Types

use lexer_common::Position;

/// Errors from building rule tables and scanning input.
///
/// A candidate rejecting itself is never an error; only a malformed pattern
/// or an unmatched character the fallback does not recover from is.
#[derive(Debug, thiserror::Error)]
pub enum LexError {
    /// A rule's pattern failed to compile. Rules registered before it are
    /// unaffected.
    #[error("malformed pattern for rule #{index} `{pattern}`: {source}")]
    MalformedRule {
        /// Registration index the rule would have received.
        index: usize,
        /// The pattern source as written.
        pattern: String,
        /// The underlying compile error.
        source: Box<regex_automata::meta::BuildError>,
    },

    /// No rule accepted the input at `position` and the fallback gave up.
    #[error("unexpected character at index {}: {ch}", .position.offset)]
    Lexical {
        /// The offending character.
        ch: char,
        /// Where the character starts.
        position: Position,
    },
}

impl LexError {
    /// Builds the error reported for an unmatched character.
    pub fn unexpected(ch: char, position: Position) -> Self {
        LexError::Lexical { ch, position }
    }

    /// Byte offset of the offending character, for lexical errors.
    pub fn offset(&self) -> Option<usize> {
        match self {
            LexError::Lexical { position, .. } => Some(position.offset),
            LexError::MalformedRule { .. } => None,
        }
    }
}

/// Result type for lexer operations.
pub type LexResult<T> = Result<T, LexError>;
