//! Error types for rotavox

use thiserror::Error;

use crate::code::OptionCode;
use crate::question::QuestionId;

/// Main error type for rotavox operations
#[derive(Debug, Error)]
pub enum RotavoxError {
    /// Malformed caller-supplied arrangement arguments
    #[error("Configuration error: {0}")]
    Config(String),

    /// A referenced question is not mounted in the store
    #[error("Unknown question: {0}")]
    UnknownQuestion(QuestionId),

    /// A referenced option code does not exist in its question
    #[error("Unknown option code {code} in {question}")]
    UnknownCode {
        /// Question the lookup ran against.
        question: QuestionId,
        /// The missing code.
        code: OptionCode,
    },

    /// Strict synchronization found target codes absent from the base
    #[error("Mismatched codes in {target}: {codes:?} not present in base {base}")]
    MismatchedCodes {
        /// Question whose order was to be copied.
        base: QuestionId,
        /// Question that was to be reordered.
        target: QuestionId,
        /// The target codes with no counterpart in the base.
        codes: Vec<OptionCode>,
    },

    /// Internal error (should not occur in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for rotavox operations
pub type Result<T> = std::result::Result<T, RotavoxError>;
