use lexer_common::{Position, TextSlice};
use std::sync::Arc;

/// The scan cursor: an immutable shared input and a position that only
/// moves forward.
#[derive(Debug, Clone)]
pub struct Cursor {
    buffer: Arc<str>,
    position: Position,
}

impl Cursor {
    /// Creates a new cursor from the input string.
    pub fn new<S: Into<String>>(input: S) -> Self {
        let owned = input.into();
        Self::with_arc(Arc::<str>::from(owned))
    }

    /// Creates a cursor from an existing shared buffer.
    pub fn with_arc(buffer: Arc<str>) -> Self {
        Self {
            position: Position::new(),
            buffer,
        }
    }

    /// Returns the current position in the source.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the current offset in bytes.
    pub fn offset(&self) -> usize {
        self.position.offset
    }

    /// Returns true if the cursor is at the end of the input.
    pub fn is_eof(&self) -> bool {
        self.offset() >= self.buffer.len()
    }

    /// The whole input.
    pub fn buffer(&self) -> &Arc<str> {
        &self.buffer
    }

    /// Returns the next character without advancing the cursor.
    pub fn peek(&self) -> Option<char> {
        self.buffer[self.offset()..].chars().next()
    }

    /// Advances the cursor by one character.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position.advance(ch);
        Some(ch)
    }

    /// Advances the cursor past the next `len` bytes, which must end on a
    /// character boundary.
    pub fn advance_bytes(&mut self, len: usize) {
        let start = self.offset();
        let end = start + len;
        debug_assert!(self.buffer.is_char_boundary(end));
        self.position.advance_str(&self.buffer[start..end]);
    }

    /// Returns the remaining input from the current position.
    pub fn remaining(&self) -> TextSlice {
        TextSlice::new(self.buffer.clone(), self.offset(), self.buffer.len())
    }

    /// Starts over on new input.
    pub fn reset<S: Into<String>>(&mut self, input: S) {
        *self = Self::new(input);
    }
}
