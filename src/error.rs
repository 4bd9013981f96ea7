//! Error types for the federation store

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, FederationError>;

#[derive(Error, Debug)]
pub enum FederationError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Failed to parse configuration file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to connect to MongoDB: {source}")]
    Connection {
        #[source]
        source: mongodb::error::Error,
    },

    #[error("Bootstrap step '{step}' failed: {source}")]
    Bootstrap {
        step: String,
        #[source]
        source: mongodb::error::Error,
    },

    #[error("Database operation failed: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Invalid document id: {id}")]
    InvalidId { id: String },

    #[error("Invalid document field '{field}': {message}")]
    InvalidDocument { field: String, message: String },

    #[error("Invalid rating '{value}': expected ATTRIBUTE=SCORE")]
    InvalidRating { value: String },

    #[error("Database connection has been closed")]
    Closed,
}

impl FederationError {
    /// Shorthand for a configuration error with a message.
    pub fn configuration(message: impl Into<String>) -> Self {
        FederationError::Configuration {
            message: message.into(),
        }
    }

    /// Shorthand for a field that is present but has the wrong shape.
    pub fn invalid_document(field: impl Into<String>, message: impl Into<String>) -> Self {
        FederationError::InvalidDocument {
            field: field.into(),
            message: message.into(),
        }
    }
}
