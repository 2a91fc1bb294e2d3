//! Error types for the carousel engine

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("invalid breakpoints: {0}")]
    Breakpoints(String),

    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn breakpoints(message: impl Into<String>) -> Self {
        Self::Breakpoints(message.into())
    }
}
