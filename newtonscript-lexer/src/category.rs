use serde::Serialize;
use std::fmt;

/// Lexical categories of NewtonScript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NsCategory {
    ReservedWord,
    Real,
    Integer,
    Character,
    String,
    Symbol,
    Operator,
    Delimiter,
    WhiteSpace,
    Comment,
}

impl NsCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            NsCategory::ReservedWord => "RESERVED_WORD",
            NsCategory::Real => "REAL",
            NsCategory::Integer => "INTEGER",
            NsCategory::Character => "CHARACTER",
            NsCategory::String => "STRING",
            NsCategory::Symbol => "SYMBOL",
            NsCategory::Operator => "OPERATOR",
            NsCategory::Delimiter => "DELIMITER",
            NsCategory::WhiteSpace => "WHITE_SPACE",
            NsCategory::Comment => "COMMENT",
        }
    }

    /// Whitespace and comments.
    pub fn is_trivia(self) -> bool {
        matches!(self, NsCategory::WhiteSpace | NsCategory::Comment)
    }
}

impl fmt::Display for NsCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_name_matches_display() {
        for category in [
            NsCategory::ReservedWord,
            NsCategory::WhiteSpace,
            NsCategory::Integer,
        ] {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{category}\""));
        }
    }
}
