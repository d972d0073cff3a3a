use thiserror::Error;

#[derive(Error, Debug)]
pub enum GrimoireError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    /// The card collection could not be retrieved. Fatal for the session.
    #[error("Could not load cards from {source_name}: {reason}")]
    CardSource { source_name: String, reason: String },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, GrimoireError>;
