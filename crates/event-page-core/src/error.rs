//! Error Types
//!
//! Errors raised while talking to the server or the browser store.
//! None of them reach the user; callers log and drop them.

use serde::{Deserialize, Serialize};

/// Common result type for page operations
pub type GlueResult<T> = Result<T, GlueError>;

/// Page-level errors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GlueError {
    /// Request could not be sent or returned a non-success status
    Network(String),
    /// Response body did not match the expected shape
    Decode(String),
    /// Key-value store rejected a read or write
    Storage(String),
}

impl std::fmt::Display for GlueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GlueError::Network(msg) => write!(f, "Network error: {}", msg),
            GlueError::Decode(msg) => write!(f, "Decode error: {}", msg),
            GlueError::Storage(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for GlueError {}

impl From<serde_json::Error> for GlueError {
    fn from(e: serde_json::Error) -> Self {
        GlueError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes() {
        assert_eq!(GlueError::Network("timeout".into()).to_string(), "Network error: timeout");
        assert_eq!(GlueError::Storage("quota".into()).to_string(), "Storage error: quota");
    }

    #[test]
    fn test_from_json_error() {
        let err = serde_json::from_str::<u32>("nope").unwrap_err();
        assert!(matches!(GlueError::from(err), GlueError::Decode(_)));
    }
}
