//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ArtifactKind;
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// A validated configuration failed to bind into a template.
    ///
    /// This is a contract violation on our side, never a user input problem.
    #[error("Rendering {artifact} failed: {reason}")]
    RenderingFailed {
        artifact: ArtifactKind,
        reason: String,
    },

    /// The embedded templates could not be registered.
    #[error("Template setup failed: {reason}")]
    TemplateSetup { reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::RenderingFailed { artifact, .. } => vec![
                format!("The {artifact} template could not be rendered from a valid configuration"),
                "This is a bug in erc20gen, please report it with the command you ran".into(),
            ],
            Self::TemplateSetup { .. } => vec![
                "The built-in templates failed to load".into(),
                "This is a bug in erc20gen, please report it".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Choose another directory with --out".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Internal
    }
}
