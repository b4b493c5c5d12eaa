#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to reach inference API: {0}")]
    ApiError(String),

    #[error("Model error: {0}")]
    ModelError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::ApiError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
