use thiserror::Error;

#[derive(Error, Debug)]
pub enum LexError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid turn: {0}")]
    InvalidTurn(String),

    #[error("Unknown topic: {0}")]
    UnknownTopic(String),

    #[error("Unknown response length: {0}")]
    UnknownLength(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl LexError {
    pub fn invalid_turn(message: impl Into<String>) -> Self {
        Self::InvalidTurn(message.into())
    }
}

pub type Result<T> = std::result::Result<T, LexError>;
