// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for erc20gen.
//!
//! This module contains pure business logic. All I/O and templating concerns
//! are handled via ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No mutable statics**: the only statics are compiled regexes
//! - **Value semantics**: every type is Clone + PartialEq
//!
// Public API - what the world sees
pub mod checklist;
pub mod composition;
pub mod error;
pub mod token_config;
pub mod validation;
pub mod value_objects;

// Re-exports for convenience
pub use checklist::security_checklist;
pub use error::{DomainError, ErrorCategory};
pub use token_config::TokenConfig;
pub use validation::{DEFAULT_LICENSE, DEFAULT_SOLIDITY_VERSION, validate};
pub use value_objects::{AccessControl, ArtifactKind, Feature};

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    // ========================================================================
    // Value Object Tests
    // ========================================================================

    #[test]
    fn access_control_parses_exact_names() {
        assert_eq!(AccessControl::from_str("ownable").unwrap(), AccessControl::Ownable);
        assert_eq!(AccessControl::from_str("roles").unwrap(), AccessControl::Roles);
        assert_eq!(AccessControl::from_str("none").unwrap(), AccessControl::None);
        assert!(AccessControl::from_str("").is_err());
        assert!(AccessControl::from_str("Ownable").is_err());
    }

    #[test]
    fn feature_parses_aliases() {
        assert_eq!(Feature::from_str("Mintable").unwrap(), Feature::Mintable);
        assert_eq!(Feature::from_str("burn").unwrap(), Feature::Burnable);
        assert_eq!(Feature::from_str("eip2612").unwrap(), Feature::Permit);
        assert!(matches!(
            Feature::from_str("capped"),
            Err(DomainError::UnknownFeature(_))
        ));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for feature in Feature::ALL {
            assert_eq!(Feature::from_str(&feature.to_string()).unwrap(), feature);
        }
        for access in AccessControl::ALL {
            assert_eq!(AccessControl::from_str(access.as_str()).unwrap(), access);
        }
    }

    // ========================================================================
    // Validation Contract Tests
    // ========================================================================

    #[test]
    fn validation_error_joins_messages_in_order() {
        let mut cfg = TokenConfig::default();
        let err = cfg.validate().unwrap_err();

        assert_eq!(
            err.to_string(),
            "token name is required\n  - token symbol is required"
        );
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(err.messages().len(), 2);
    }

    #[test]
    fn votes_auto_enables_snapshot() {
        let mut cfg = TokenConfig::new("TestToken", "TST").with_feature(Feature::Votes);
        assert!(!cfg.snapshot);

        cfg.validate().unwrap();
        assert!(cfg.snapshot, "votes should auto-enable snapshot");
    }

    #[test]
    fn revalidation_is_a_no_op() {
        let mut cfg = TokenConfig::new("TestToken", "TST")
            .with_feature(Feature::Votes)
            .with_initial_supply(" 1000 ");
        cfg.validate().unwrap();

        let normalized = cfg.clone();
        cfg.validate().unwrap();
        assert_eq!(cfg, normalized);
    }

    #[test]
    fn empty_access_control_defaults_to_ownable() {
        let mut cfg = TokenConfig::new("TestToken", "TST");
        cfg.validate().unwrap();
        assert_eq!(cfg.access(), Some(AccessControl::Ownable));
        assert_eq!(cfg.access_control, "ownable");
    }

    #[test]
    fn validate_by_value_returns_normalized_config() {
        let (cfg, messages) = validate(TokenConfig::new("TestToken", "TST"));
        assert!(messages.is_empty());
        assert_eq!(cfg.license, DEFAULT_LICENSE);
        assert_eq!(cfg.solidity_version, DEFAULT_SOLIDITY_VERSION);
    }
}
