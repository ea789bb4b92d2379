use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown lottery '{lottery}'")]
    UnknownLottery { lottery: String },

    #[error("Invalid invocation: {0}")]
    InvalidInvocation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type StatResult<T> = Result<T, StatError>;
