use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArgumentError {
    #[error("argument key must be a non-empty string")]
    InvalidArgumentKey,

    #[error("invalid effect id '{0}': only decimal digits are allowed")]
    InvalidEffectId(String),

    #[error("failed to encode arguments as JSON: {0}")]
    Json(#[from] serde_json::Error),
}
