use std::fmt;

/// A location in the scanned text.
///
/// Lines and columns count Unicode scalar values and start at 1; `offset`
/// is the byte offset into the input and is what the engine slices with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
    /// Byte offset from the start of the input
    pub offset: usize,
}

impl Position {
    /// Creates a new position at the start of the input.
    pub fn new() -> Self {
        Self {
            line: 1,
            column: 1,
            offset: 0,
        }
    }

    /// Creates a position with the given values.
    pub fn at(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    /// Moves past a single character.
    pub fn advance(&mut self, ch: char) {
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.offset += ch.len_utf8();
    }

    /// Moves past every character of `text`.
    pub fn advance_str(&mut self, text: &str) {
        for ch in text.chars() {
            self.advance(ch);
        }
    }

    /// Returns the position reached after `text`, leaving `self` untouched.
    pub fn after(mut self, text: &str) -> Self {
        self.advance_str(text);
        self
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_position_new() {
        let pos = Position::new();
        assert_eq!(pos.line, 1);
        assert_eq!(pos.column, 1);
        assert_eq!(pos.offset, 0);
    }

    #[test]
    fn test_position_default() {
        assert_eq!(Position::default(), Position::new());
    }

    #[test]
    fn test_advance_tracks_lines() {
        let mut pos = Position::new();
        pos.advance('a');
        pos.advance('\n');
        pos.advance('b');
        assert_eq!(pos, Position::at(2, 2, 3));
    }

    #[test]
    fn test_advance_counts_bytes_for_offset() {
        let pos = Position::new().after("é世");
        assert_eq!(pos.column, 3);
        assert_eq!(pos.offset, 5);
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::at(3, 7, 40).to_string(), "3:7");
    }
}
