use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid header config: {0}")]
    Config(String),

    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
