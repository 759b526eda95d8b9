//! Error taxonomy for one question/answer cycle
//!
//! Validation errors are shown to the user as-is. Transport and malformed
//! response errors never reach the user verbatim: the controller swaps them
//! for a demo answer. Cancellation is its own variant so the controller can
//! tell a user abort apart from a failure.

use thiserror::Error;

/// Why a question was refused before anything was sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please type a question")]
    Empty,
    #[error("The question must be at least {min} characters long")]
    TooShort { min: usize },
}

/// Errors surfaced by the answer service and the request lifecycle
#[derive(Debug, Error)]
pub enum OracleError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Network unreachable, non-success status or timeout
    #[error("transport failure: {0}")]
    Transport(String),

    /// Body arrived but could not be parsed
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The cancellation handle was aborted by a clear action
    #[error("request cancelled")]
    Cancelled,
}

impl OracleError {
    /// Errors that route to the demo fallback
    pub fn is_fallback(&self) -> bool {
        matches!(
            self,
            OracleError::Transport(_) | OracleError::MalformedResponse(_)
        )
    }
}

impl From<reqwest::Error> for OracleError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            OracleError::MalformedResponse(err.to_string())
        } else {
            OracleError::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_are_user_facing() {
        assert_eq!(ValidationError::Empty.to_string(), "Please type a question");
        assert_eq!(
            ValidationError::TooShort { min: 10 }.to_string(),
            "The question must be at least 10 characters long"
        );
    }

    #[test]
    fn only_transport_and_malformed_fall_back() {
        assert!(OracleError::Transport("down".into()).is_fallback());
        assert!(OracleError::MalformedResponse("bad json".into()).is_fallback());
        assert!(!OracleError::Cancelled.is_fallback());
        assert!(!OracleError::from(ValidationError::Empty).is_fallback());
    }
}
