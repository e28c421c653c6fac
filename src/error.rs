//! Domain-specific error types for agent-architect

use thiserror::Error;

/// Main error type for the agent-architect advisor
#[derive(Error, Debug)]
pub enum ArchitectError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<anyhow::Error> for ArchitectError {
    fn from(err: anyhow::Error) -> Self {
        ArchitectError::Internal {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ArchitectError {
    fn from(err: serde_json::Error) -> Self {
        ArchitectError::Serialization {
            message: err.to_string(),
        }
    }
}

/// Result type alias for agent-architect operations
pub type Result<T> = std::result::Result<T, ArchitectError>;
