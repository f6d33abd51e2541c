use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    #[error("unrecognized color format: `{0}`")]
    UnknownFormat(String),

    #[error("expected 6 hex digits, found {0}")]
    InvalidHexLength(usize),

    #[error("invalid hex digit at position {0}")]
    InvalidHexDigit(usize),

    #[error("missing closing parenthesis")]
    Unterminated,

    #[error("expected {expected} components, found {found}")]
    ComponentCount { expected: usize, found: usize },

    #[error("invalid color component `{0}`")]
    InvalidComponent(String),
}
