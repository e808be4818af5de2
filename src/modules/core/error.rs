//! Error types for fishgen

use thiserror::Error;

/// Main error type for fishgen operations
#[derive(Error, Debug)]
pub enum FishgenError {
    /// Definition file could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Definition file parsed but describes an unusable tree
    #[error("Validation error: {0}")]
    Validation(String),

    /// Tree handed to a generator violates its structural contract
    #[error("Generation error: {0}")]
    Generation(String),

    /// Environment variable referenced by a definition file is not set
    #[error("Environment variable not found: {0}")]
    EnvVarNotFound(String),

    /// Output sink or file system error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl FishgenError {
    /// Returns true if the error points at the user's input rather than the
    /// environment or the program itself
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            FishgenError::Config(_)
                | FishgenError::Validation(_)
                | FishgenError::EnvVarNotFound(_)
        )
    }

    /// Process exit code for the CLI
    pub fn exit_code(&self) -> i32 {
        match self {
            FishgenError::Config(_)
            | FishgenError::Validation(_)
            | FishgenError::EnvVarNotFound(_) => 2,
            FishgenError::Io(_) => 74,
            _ => 1,
        }
    }
}

/// Result type alias using FishgenError
pub type Result<T> = std::result::Result<T, FishgenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_exit_codes() {
        assert_eq!(FishgenError::Config("bad".into()).exit_code(), 2);
        assert_eq!(FishgenError::Validation("bad".into()).exit_code(), 2);
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        assert_eq!(FishgenError::from(io).exit_code(), 74);
        assert_eq!(FishgenError::Generation("loop".into()).exit_code(), 1);
    }

    #[test]
    fn test_error_is_user_error() {
        assert!(FishgenError::Validation("name".into()).is_user_error());
        assert!(FishgenError::EnvVarNotFound("HOME".into()).is_user_error());
        assert!(!FishgenError::Internal("oops".into()).is_user_error());
    }

    #[test]
    fn test_io_error_message_is_preserved() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = FishgenError::from(io);
        assert_eq!(err.to_string(), "IO error: pipe closed");
    }
}
