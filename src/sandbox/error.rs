//! Error types for the code execution sandbox.

use std::time::Duration;

/// Errors that can occur while validating or executing a snippet.
#[derive(Debug, thiserror::Error)]
pub enum SandboxError {
    /// Submitted code or language string was empty/blank.
    #[error("Code and language must not be empty")]
    EmptyInput,

    /// Submitted code exceeds the maximum accepted length.
    #[error("Code length exceeds maximum limit of {limit} characters")]
    TooLong { limit: usize },

    /// The requested language is not in the registry.
    #[error("Unsupported language: {language}")]
    UnsupportedLanguage { language: String },

    /// A denylisted construct appears verbatim in the submitted code.
    #[error("Usage of '{construct}' is not allowed for security reasons")]
    DisallowedConstruct { construct: String },

    /// The interpreter binary could not be resolved or started.
    #[error("Failed to start interpreter '{interpreter}': {reason}")]
    Spawn { interpreter: String, reason: String },

    /// The child process exceeded the wall-clock budget.
    #[error("Execution timed out")]
    Timeout(Duration),

    /// Ephemeral source file could not be created or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SandboxError {
    /// Whether this error is a pre-execution validation failure, i.e. the
    /// caller can fix the input and resubmit without anything having been
    /// spawned.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SandboxError::EmptyInput
                | SandboxError::TooLong { .. }
                | SandboxError::UnsupportedLanguage { .. }
                | SandboxError::DisallowedConstruct { .. }
        )
    }
}

/// Result type for sandbox operations.
pub type Result<T> = std::result::Result<T, SandboxError>;
