use crate::traits::LexToken;
use lexer_common::{Position, TextSlice};
use std::borrow::Cow;
use std::fmt;
use std::ops::Range;

/// A classified lexeme: the category a rule assigned plus the exact text it
/// matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<K> {
    kind: K,
    lexeme: TextSlice,
    position: Position,
}

impl<K> Token<K> {
    pub fn new(kind: K, lexeme: TextSlice, position: Position) -> Self {
        Self {
            kind,
            lexeme,
            position,
        }
    }

    pub fn kind(&self) -> &K {
        &self.kind
    }

    pub fn lexeme(&self) -> &str {
        self.lexeme.as_str()
    }

    pub fn slice(&self) -> &TextSlice {
        &self.lexeme
    }

    /// Where the lexeme starts.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Byte range of the lexeme in the scanned input.
    pub fn span(&self) -> Range<usize> {
        self.lexeme.range()
    }

    pub fn into_parts(self) -> (K, TextSlice) {
        (self.kind, self.lexeme)
    }
}

impl<K: fmt::Display> fmt::Display for Token<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.kind, self.lexeme.as_str())
    }
}

impl<K> LexToken for Token<K>
where
    K: fmt::Display + fmt::Debug + Clone,
{
    fn category(&self) -> Cow<'_, str> {
        Cow::Owned(self.kind.to_string())
    }

    fn lexeme(&self) -> &str {
        self.lexeme.as_str()
    }

    fn position(&self) -> Option<Position> {
        Some(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_token_projection() {
        let buffer: Arc<str> = Arc::from("x := 42");
        let token = Token::new("INTEGER", TextSlice::new(buffer, 5, 7), Position::at(1, 6, 5));
        assert_eq!(token.lexeme(), "42");
        assert_eq!(token.span(), 5..7);
        assert_eq!(LexToken::category(&token), "INTEGER");
        assert_eq!(token.to_string(), "INTEGER \"42\"");
    }
}
