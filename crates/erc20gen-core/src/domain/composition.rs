//! Composition rules: which OpenZeppelin imports and base contracts a token
//! configuration implies, and in what order.
//!
//! Both lists are pure functions of the configuration. Order is part of the
//! contract: the inheritance list mirrors the linearization the generated
//! contract relies on, and snapshot-style consumers compare import lists
//! verbatim.

use crate::domain::token_config::TokenConfig;

pub const ERC20_IMPORT: &str = "@openzeppelin/contracts/token/ERC20/ERC20.sol";
pub const BURNABLE_IMPORT: &str =
    "@openzeppelin/contracts/token/ERC20/extensions/ERC20Burnable.sol";
pub const PAUSABLE_IMPORT: &str =
    "@openzeppelin/contracts/token/ERC20/extensions/ERC20Pausable.sol";
pub const PAUSE_UTILITY_IMPORT: &str = "@openzeppelin/contracts/utils/Pausable.sol";
pub const PERMIT_IMPORT: &str = "@openzeppelin/contracts/token/ERC20/extensions/ERC20Permit.sol";
pub const SNAPSHOT_IMPORT: &str =
    "@openzeppelin/contracts/token/ERC20/extensions/ERC20Snapshot.sol";
pub const VOTES_IMPORT: &str = "@openzeppelin/contracts/token/ERC20/extensions/ERC20Votes.sol";
pub const CAPPED_IMPORT: &str = "@openzeppelin/contracts/token/ERC20/extensions/ERC20Capped.sol";
pub const OWNABLE_IMPORT: &str = "@openzeppelin/contracts/access/Ownable.sol";
pub const ROLES_IMPORT: &str = "@openzeppelin/contracts/access/AccessControl.sol";

/// All required import paths. The base `ERC20` entry is always first.
pub fn import_paths(config: &TokenConfig) -> Vec<&'static str> {
    let mut imports = vec![ERC20_IMPORT];

    if config.burnable {
        imports.push(BURNABLE_IMPORT);
    }
    if config.pausable {
        imports.push(PAUSABLE_IMPORT);
        imports.push(PAUSE_UTILITY_IMPORT);
    }
    if config.permit {
        imports.push(PERMIT_IMPORT);
    }
    if config.snapshot {
        imports.push(SNAPSHOT_IMPORT);
    }
    if config.votes {
        imports.push(VOTES_IMPORT);
    }
    if config.is_capped() {
        imports.push(CAPPED_IMPORT);
    }
    if config.needs_ownable() {
        imports.push(OWNABLE_IMPORT);
    }
    if config.needs_roles() {
        imports.push(ROLES_IMPORT);
    }

    imports
}

/// Base contracts after `ERC20`: capped first, access control last.
pub fn inheritance_list(config: &TokenConfig) -> Vec<&'static str> {
    let mut list = Vec::new();

    if config.is_capped() {
        list.push("ERC20Capped");
    }
    if config.burnable {
        list.push("ERC20Burnable");
    }
    if config.pausable {
        list.push("ERC20Pausable");
    }
    if config.permit {
        list.push("ERC20Permit");
    }
    if config.snapshot {
        list.push("ERC20Snapshot");
    }
    if config.votes {
        list.push("ERC20Votes");
    }
    if config.needs_ownable() {
        list.push("Ownable");
    }
    if config.needs_roles() {
        list.push("AccessControl");
    }

    list
}

/// Bases that each redefine the `_update` transfer hook, in inheritance
/// order. When non-empty the generated contract must override `_update`
/// naming `ERC20` plus all of these.
pub fn update_hook_overrides(config: &TokenConfig) -> Vec<&'static str> {
    inheritance_list(config)
        .into_iter()
        .filter(|base| {
            matches!(
                *base,
                "ERC20Capped" | "ERC20Pausable" | "ERC20Snapshot" | "ERC20Votes"
            )
        })
        .collect()
}

/// `ERC20Permit` and `ERC20Votes` both inherit `Nonces`; combining them
/// requires an explicit `nonces` override.
pub fn needs_nonces_override(config: &TokenConfig) -> bool {
    config.permit && config.votes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{AccessControl, Feature};

    fn base_config() -> TokenConfig {
        TokenConfig::new("TestToken", "TST")
            .with_initial_supply("1000000")
            .with_access(AccessControl::Ownable)
    }

    fn all_features(cfg: TokenConfig) -> TokenConfig {
        Feature::ALL.into_iter().fold(cfg, TokenConfig::with_feature)
    }

    #[test]
    fn base_only_imports() {
        assert_eq!(import_paths(&base_config()), vec![ERC20_IMPORT, OWNABLE_IMPORT]);
    }

    #[test]
    fn all_feature_imports_in_declaration_order() {
        let cfg = all_features(base_config()).with_max_supply("10000000");
        assert_eq!(
            import_paths(&cfg),
            vec![
                ERC20_IMPORT,
                BURNABLE_IMPORT,
                PAUSABLE_IMPORT,
                PAUSE_UTILITY_IMPORT,
                PERMIT_IMPORT,
                SNAPSHOT_IMPORT,
                VOTES_IMPORT,
                CAPPED_IMPORT,
                OWNABLE_IMPORT,
            ]
        );
    }

    #[test]
    fn base_import_is_first_and_unique() {
        for access in AccessControl::ALL {
            let cfg = all_features(base_config().with_access(access)).with_max_supply("1");
            let imports = import_paths(&cfg);
            assert_eq!(imports[0], ERC20_IMPORT);
            assert_eq!(imports.iter().filter(|i| **i == ERC20_IMPORT).count(), 1);
        }
    }

    #[test]
    fn access_control_imports_are_exclusive() {
        let roles = import_paths(&base_config().with_access(AccessControl::Roles));
        assert!(roles.contains(&ROLES_IMPORT));
        assert!(!roles.contains(&OWNABLE_IMPORT));

        let none = import_paths(&base_config().with_access(AccessControl::None));
        assert_eq!(none, vec![ERC20_IMPORT]);
    }

    #[test]
    fn mintable_adds_no_import() {
        let cfg = base_config().with_feature(Feature::Mintable);
        assert_eq!(import_paths(&cfg), import_paths(&base_config()));
    }

    #[test]
    fn capped_follows_max_supply_presence() {
        let cfg = base_config().with_max_supply("");
        assert!(!import_paths(&cfg).contains(&CAPPED_IMPORT));

        let cfg = base_config().with_max_supply("5");
        assert!(import_paths(&cfg).contains(&CAPPED_IMPORT));
    }

    #[test]
    fn inheritance_order_matters() {
        let cfg = base_config()
            .with_feature(Feature::Burnable)
            .with_feature(Feature::Pausable)
            .with_feature(Feature::Permit);
        assert_eq!(
            inheritance_list(&cfg),
            vec!["ERC20Burnable", "ERC20Pausable", "ERC20Permit", "Ownable"]
        );
    }

    #[test]
    fn capped_is_first_regardless_of_flag_order() {
        let mut cfg = base_config().with_feature(Feature::Votes);
        cfg.burnable = true;
        cfg.max_supply = Some("1000000000".into());
        cfg.snapshot = true;

        let list = inheritance_list(&cfg);
        assert_eq!(list[0], "ERC20Capped");
        assert_eq!(
            list,
            vec![
                "ERC20Capped",
                "ERC20Burnable",
                "ERC20Snapshot",
                "ERC20Votes",
                "Ownable"
            ]
        );
    }

    #[test]
    fn access_entry_is_last() {
        let cfg = all_features(base_config().with_access(AccessControl::Roles));
        assert_eq!(inheritance_list(&cfg).last(), Some(&"AccessControl"));
    }

    #[test]
    fn composition_is_idempotent() {
        let cfg = all_features(base_config()).with_max_supply("9");
        assert_eq!(import_paths(&cfg), import_paths(&cfg));
        assert_eq!(inheritance_list(&cfg), inheritance_list(&cfg));
    }

    #[test]
    fn update_hook_overrides_follow_inheritance() {
        let cfg = all_features(base_config()).with_max_supply("9");
        assert_eq!(
            update_hook_overrides(&cfg),
            vec!["ERC20Capped", "ERC20Pausable", "ERC20Snapshot", "ERC20Votes"]
        );
        assert!(update_hook_overrides(&base_config().with_feature(Feature::Burnable)).is_empty());
    }

    #[test]
    fn nonces_override_needs_permit_and_votes() {
        assert!(!needs_nonces_override(&base_config().with_feature(Feature::Permit)));
        let cfg = base_config()
            .with_feature(Feature::Permit)
            .with_feature(Feature::Votes);
        assert!(needs_nonces_override(&cfg));
    }
}
