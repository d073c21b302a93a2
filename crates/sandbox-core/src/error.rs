//! Error types for sandbox generation

use crate::questions::QuestionKey;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for sandbox-core operations
pub type Result<T> = std::result::Result<T, SandboxError>;

#[derive(Debug, Error)]
pub enum SandboxError {
    /// Required credential variable is unset or empty
    #[error("Failed to find your {var:?}, please make sure to have the environment variable set")]
    MissingCredential { var: &'static str },

    /// Provider is known by name but has no implementation yet
    #[error("Provider {0:?} not implemented")]
    NotImplemented(String),

    #[error("Found file/directory with the same name as {}", .0.display())]
    TargetExists(PathBuf),

    #[error("Selector question {0:?} has no options")]
    EmptyOptions(String),

    #[error("No answer recorded for {0}")]
    MissingAnswer(QuestionKey),

    #[error("Expected an answer for {expected}, got {got}")]
    OutOfOrder {
        expected: QuestionKey,
        got: QuestionKey,
    },

    #[error("Bundled asset not found: {0}")]
    MissingAsset(String),

    #[error("Failed to {action} {}: {source}", path.display())]
    Io {
        /// What was being attempted, e.g. "create directory"
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to execute the template {template:?}: {source}")]
    Render {
        template: String,
        #[source]
        source: tera::Error,
    },
}

impl SandboxError {
    pub(crate) fn io(
        action: &'static str,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}
