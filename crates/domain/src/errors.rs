//! Error types used throughout the client

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Jenkins API operations
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum JenkinsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid tag: {0}")]
    InvalidTag(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Create failed: {0}")]
    CreateFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),
}

/// Result type alias for Jenkins API operations
pub type Result<T> = std::result::Result<T, JenkinsError>;
