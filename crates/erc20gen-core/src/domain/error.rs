// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (the CLI formats them more than once)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    /// One or more token configuration rules were violated.
    ///
    /// Messages are kept in field-declaration order so the user sees every
    /// problem at once, in a stable order.
    #[error("{}", .messages.join("\n  - "))]
    Validation { messages: Vec<String> },

    #[error("unknown access control type '{0}': must be ownable, roles, or none")]
    UnknownAccessControl(String),

    #[error("unknown feature '{0}'")]
    UnknownFeature(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Validation { messages } => {
                let mut out = Vec::with_capacity(messages.len() + 1);
                out.push(format!(
                    "Fix the {} problem(s) listed above and run the command again",
                    messages.len()
                ));
                out.push("Run: erc20gen generate --help for accepted values".into());
                out
            }
            Self::UnknownAccessControl(_) => vec![
                "Supported access control models:".into(),
                "  • ownable - single owner (Ownable)".into(),
                "  • roles   - role-based (AccessControl)".into(),
                "  • none    - no restrictions".into(),
            ],
            Self::UnknownFeature(_) => vec![
                "Supported features: mintable, burnable, pausable, permit, snapshot, votes".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Validation
    }

    /// Individual rule violations, one per line of the report.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Validation { messages } => messages.clone(),
            other => vec![other.to_string()],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
}
