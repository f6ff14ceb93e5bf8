use thiserror::Error;

#[allow(dead_code)]
#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("invalid proposal: {0}")]
    Validation(String),

    #[error("invalid rubric: {0}")]
    RubricInvalid(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("telemetry init failed: {0}")]
    Telemetry(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScoreError>;
