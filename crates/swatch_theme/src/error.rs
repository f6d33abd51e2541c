use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("invalid theme record: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown theme preset `{0}`")]
    UnknownPreset(String),
}

pub type Result<T> = std::result::Result<T, ThemeError>;
