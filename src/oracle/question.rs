//! Question validation
//!
//! A question is the trimmed input text. It must hold at least
//! [`MIN_QUESTION_CHARS`] characters; the count is in Unicode scalar values,
//! not bytes, so accented questions are not penalised.

use super::error::ValidationError;
use std::fmt;

/// Minimum number of characters after trimming
pub const MIN_QUESTION_CHARS: usize = 10;

/// A validated, trimmed question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question(String);

impl Question {
    /// Trim and validate raw input
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty);
        }
        if trimmed.chars().count() < MIN_QUESTION_CHARS {
            return Err(ValidationError::TooShort {
                min: MIN_QUESTION_CHARS,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Cheap check used by the UI to enable the submit control
    pub fn is_acceptable(raw: &str) -> bool {
        raw.trim().chars().count() >= MIN_QUESTION_CHARS
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
