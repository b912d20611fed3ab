//! The `TokenConfig` entity: every parameter of one token generation.
//!
//! A `TokenConfig` is built once per invocation (from flags, from the
//! interactive collector, or from config-file defaults), validated exactly
//! once, then treated as read-only input to rendering.
//!
//! # Domain purity
//!
//! This module must not import `tracing`. Observability is the responsibility
//! of the application and CLI layers, not the domain.

use serde::{Deserialize, Serialize};

use crate::domain::{
    composition,
    error::DomainError,
    validation,
    value_objects::{AccessControl, ArtifactKind, Feature},
};

/// All parameters for ERC-20 token generation.
///
/// Fields are public because the record is assembled piecemeal by its
/// collaborators; [`TokenConfig::validate`] is the single gate that enforces
/// the invariants before anything is rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenConfig {
    // Core ERC-20 fields
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    /// Whole tokens minted to the deployer, as a decimal string.
    pub initial_supply: Option<String>,
    /// Supply cap in whole tokens; `None` means unlimited.
    pub max_supply: Option<String>,

    // Feature flags
    pub mintable: bool,
    pub burnable: bool,
    pub pausable: bool,
    /// EIP-2612
    pub permit: bool,
    pub snapshot: bool,
    pub votes: bool,

    /// Raw access control selection. Empty until validation applies the
    /// `ownable` default; see [`TokenConfig::access`] for the typed view.
    pub access_control: String,

    // Metadata
    pub license: String,
    pub solidity_version: String,

    // Output options
    pub with_deploy: bool,
    pub with_test: bool,
}

impl TokenConfig {
    /// Start a configuration with the Ethereum-standard 18 decimals.
    pub fn new(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            decimals: 18,
            ..Self::default()
        }
    }

    pub fn with_decimals(mut self, decimals: u8) -> Self {
        self.decimals = decimals;
        self
    }

    pub fn with_initial_supply(mut self, supply: impl Into<String>) -> Self {
        self.initial_supply = Some(supply.into());
        self
    }

    pub fn with_max_supply(mut self, supply: impl Into<String>) -> Self {
        self.max_supply = Some(supply.into());
        self
    }

    pub fn with_access(mut self, access: AccessControl) -> Self {
        self.access_control = access.as_str().to_string();
        self
    }

    pub fn with_feature(mut self, feature: Feature) -> Self {
        self.set_feature(feature, true);
        self
    }

    /// Validate in place.
    ///
    /// Defaults and auto-corrections (access control, license, pragma,
    /// votes → snapshot, trimmed supplies) are applied even when the result
    /// is an error, so a caller inspecting the config afterwards always sees
    /// the normalized values.
    pub fn validate(&mut self) -> Result<(), DomainError> {
        let messages = validation::check(self);
        if messages.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation { messages })
        }
    }

    // ── Access control ────────────────────────────────────────────────────

    /// Typed access control, or `None` when the raw value is empty or invalid.
    pub fn access(&self) -> Option<AccessControl> {
        self.access_control.parse().ok()
    }

    /// Returns true if any access control is active.
    pub fn has_access_control(&self) -> bool {
        matches!(
            self.access(),
            Some(AccessControl::Ownable | AccessControl::Roles)
        )
    }

    pub fn needs_ownable(&self) -> bool {
        self.access() == Some(AccessControl::Ownable)
    }

    pub fn needs_roles(&self) -> bool {
        self.access() == Some(AccessControl::Roles)
    }

    // ── Features ──────────────────────────────────────────────────────────

    pub const fn has_feature(&self, feature: Feature) -> bool {
        match feature {
            Feature::Mintable => self.mintable,
            Feature::Burnable => self.burnable,
            Feature::Pausable => self.pausable,
            Feature::Permit => self.permit,
            Feature::Snapshot => self.snapshot,
            Feature::Votes => self.votes,
        }
    }

    pub fn set_feature(&mut self, feature: Feature, enabled: bool) {
        let flag = match feature {
            Feature::Mintable => &mut self.mintable,
            Feature::Burnable => &mut self.burnable,
            Feature::Pausable => &mut self.pausable,
            Feature::Permit => &mut self.permit,
            Feature::Snapshot => &mut self.snapshot,
            Feature::Votes => &mut self.votes,
        };
        *flag = enabled;
    }

    /// Enabled features in declaration order.
    pub fn features(&self) -> Vec<Feature> {
        Feature::ALL
            .into_iter()
            .filter(|f| self.has_feature(*f))
            .collect()
    }

    // ── Supply ────────────────────────────────────────────────────────────

    /// Initial supply in whole tokens, if one is set.
    pub fn initial_mint(&self) -> Option<&str> {
        present(&self.initial_supply)
    }

    /// Supply cap in whole tokens, if one is set.
    pub fn cap(&self) -> Option<&str> {
        present(&self.max_supply)
    }

    /// Capped inclusion is driven by the presence of a max supply.
    pub fn is_capped(&self) -> bool {
        self.cap().is_some()
    }

    /// `false` for the ERC-20 default of 18, which needs no override.
    pub const fn uses_custom_decimals(&self) -> bool {
        self.decimals != 18
    }

    // ── Composition ───────────────────────────────────────────────────────

    /// All required OpenZeppelin import paths, base standard first.
    pub fn import_paths(&self) -> Vec<&'static str> {
        composition::import_paths(self)
    }

    /// Solidity inheritance list, excluding the base `ERC20`.
    pub fn inheritance_list(&self) -> Vec<&'static str> {
        composition::inheritance_list(self)
    }

    // ── Naming ────────────────────────────────────────────────────────────

    /// Filesystem- and identifier-safe version of the token name.
    ///
    /// Every character that is not a letter or digit becomes `_`.
    pub fn safe_name(&self) -> String {
        self.name
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { '_' })
            .collect()
    }

    /// Expected Solidity filename.
    pub fn contract_file_name(&self) -> String {
        format!("{}.sol", self.safe_name())
    }

    pub fn deploy_script_file_name(&self) -> String {
        format!("deploy_{}.js", self.safe_name())
    }

    pub fn test_file_name(&self) -> String {
        format!("{}.test.js", self.safe_name())
    }

    pub fn file_name(&self, kind: ArtifactKind) -> String {
        match kind {
            ArtifactKind::Contract => self.contract_file_name(),
            ArtifactKind::DeployScript => self.deploy_script_file_name(),
            ArtifactKind::TestSkeleton => self.test_file_name(),
        }
    }

    /// Artifacts this configuration asks for. The contract is always included.
    pub fn requested_artifacts(&self) -> Vec<ArtifactKind> {
        ArtifactKind::ALL
            .into_iter()
            .filter(|kind| match kind {
                ArtifactKind::Contract => true,
                ArtifactKind::DeployScript => self.with_deploy,
                ArtifactKind::TestSkeleton => self.with_test,
            })
            .collect()
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}
