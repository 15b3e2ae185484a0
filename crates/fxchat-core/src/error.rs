use thiserror::Error;

/// Top-level error type for fxchat.
///
/// Subsystem crates define their own error types; the variants here cover
/// configuration, startup and server concerns shared by every crate.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FxError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing required environment variable: {0}")]
    MissingSecret(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for FxError {
    fn from(err: toml::de::Error) -> Self {
        FxError::Config(err.to_string())
    }
}

/// A specialized `Result` type for fxchat operations.
pub type Result<T> = std::result::Result<T, FxError>;
