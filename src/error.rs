#[derive(Debug, thiserror::Error)]
pub enum SynergyError {
    #[error("Invalid deck shape: {0}")]
    InvalidDeck(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SynergyError>;
