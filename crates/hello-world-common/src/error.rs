//! Error types for hello-world.
//!
//! The entry sequence itself is total; the only failures are at its edges:
//! writing to the console, and a [`SequenceConfig`](crate::SequenceConfig)
//! whose bounds would overflow an `i32` result.

use std::io;

use thiserror::Error;

/// Top-level program errors.
#[derive(Error, Debug)]
pub enum ProgramError {
    /// Writing or flushing console output failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Invalid configuration was provided.
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the configuration error.
        reason: String,
    },
}

impl ProgramError {
    /// Create a new `InvalidConfig` error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Returns `true` if this error came from the output stream.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }

    /// Returns `true` if the output stream was closed by the reader.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProgramError::invalid_config("fibonacci_input 50 exceeds 45");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: fibonacci_input 50 exceeds 45"
        );

        let err = ProgramError::from(io::Error::other("disk gone"));
        assert_eq!(err.to_string(), "IO error: disk gone");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "closed");
        let err: ProgramError = io_err.into();

        assert!(err.is_io());
        assert!(err.is_broken_pipe());
    }

    #[test]
    fn test_is_io() {
        assert!(!ProgramError::invalid_config("bad").is_io());
        assert!(!ProgramError::invalid_config("bad").is_broken_pipe());
        assert!(!ProgramError::from(io::Error::other("x")).is_broken_pipe());
    }
}
