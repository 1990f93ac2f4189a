use rule_lexer::LexError;

/// Errors from lexing and rendering NewtonScript.
#[derive(Debug, thiserror::Error)]
pub enum NsError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("failed to serialize tokens: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to format tokens: {0}")]
    Fmt(#[from] std::fmt::Error),

    #[error("unknown output format `{0}` (expected xml, json or array)")]
    UnknownFormat(String),
}

pub type NsResult<T> = Result<T, NsError>;
