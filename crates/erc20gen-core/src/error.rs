//! Unified error handling for erc20gen core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for erc20gen core operations.
///
/// Exactly two kinds reach callers: validation failures (user-correctable)
/// and rendering/writing failures (internal, not user-correctable).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Erc20genError {
    /// Errors from the domain layer (invalid token configuration).
    #[error("validation error:\n  - {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (rendering, writing).
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl Erc20genError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// `true` for user-input problems the caller can fix and retry.
    pub fn is_validation(&self) -> bool {
        self.category() == ErrorCategory::Validation
    }

    /// `true` when a validated configuration failed to bind into a template.
    pub fn is_render(&self) -> bool {
        matches!(
            self,
            Self::Application(
                ApplicationError::RenderingFailed { .. } | ApplicationError::TemplateSetup { .. }
            )
        )
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}

/// Convenient result type alias.
pub type Erc20genResult<T> = Result<T, Erc20genError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ArtifactKind;

    #[test]
    fn validation_errors_are_user_facing() {
        let err: Erc20genError = DomainError::Validation {
            messages: vec!["token name is required".into(), "decimals must be between 0 and 18".into()],
        }
        .into();

        assert!(err.is_validation());
        assert!(!err.is_render());
        assert_eq!(
            err.to_string(),
            "validation error:\n  - token name is required\n  - decimals must be between 0 and 18"
        );
    }

    #[test]
    fn render_errors_are_internal() {
        let err: Erc20genError = ApplicationError::RenderingFailed {
            artifact: ArtifactKind::Contract,
            reason: "Variable `name` not found".into(),
        }
        .into();

        assert_eq!(err.category(), ErrorCategory::Internal);
        assert!(err.is_render());
        assert!(err.suggestions().iter().any(|s| s.contains("bug")));
    }
}
