//! Domain value objects: AccessControl, Feature, ArtifactKind.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! This file's only job is to define the types, their string
//! representations, and their `FromStr` parsers. Which imports and base
//! contracts a value implies lives in `composition.rs`.
//!
//! # Adding a New Feature
//!
//! 1. Add the enum variant here and to `Feature::ALL`
//! 2. Add the `as_str`, `description` and `FromStr` arms here
//! 3. Add a boolean field to `TokenConfig` and wire `has_feature`/`set_feature`
//! 4. Add its import path and base contract in `composition.rs`

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── AccessControl ─────────────────────────────────────────────────────────────

/// Authorization strategy gating privileged functions in the generated token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessControl {
    /// Single owner (`Ownable`).
    #[default]
    Ownable,
    /// Role-based (`AccessControl`).
    Roles,
    /// No restrictions.
    None,
}

impl AccessControl {
    pub const ALL: [AccessControl; 3] = [Self::Ownable, Self::Roles, Self::None];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ownable => "ownable",
            Self::Roles => "roles",
            Self::None => "none",
        }
    }

    /// One-line explanation shown by the interactive collector.
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Ownable => "single owner",
            Self::Roles => "multi-role with AccessControl",
            Self::None => "no restrictions",
        }
    }
}

impl fmt::Display for AccessControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessControl {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ownable" => Ok(Self::Ownable),
            "roles" => Ok(Self::Roles),
            "none" => Ok(Self::None),
            other => Err(DomainError::UnknownAccessControl(other.to_string())),
        }
    }
}

// ── Feature ───────────────────────────────────────────────────────────────────

/// An optional capability block of the generated token.
///
/// This is the closed set of feature identifiers; each maps one-to-one onto a
/// boolean field of `TokenConfig`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feature {
    Mintable,
    Burnable,
    Pausable,
    Permit,
    Snapshot,
    Votes,
}

impl Feature {
    /// Every feature, in declaration order.
    pub const ALL: [Feature; 6] = [
        Self::Mintable,
        Self::Burnable,
        Self::Pausable,
        Self::Permit,
        Self::Snapshot,
        Self::Votes,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mintable => "mintable",
            Self::Burnable => "burnable",
            Self::Pausable => "pausable",
            Self::Permit => "permit",
            Self::Snapshot => "snapshot",
            Self::Votes => "votes",
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            Self::Mintable => "owner can mint new tokens",
            Self::Burnable => "holders can burn their tokens",
            Self::Pausable => "owner can pause all transfers",
            Self::Permit => "EIP-2612 gasless approvals",
            Self::Snapshot => "balance snapshots for governance",
            Self::Votes => "on-chain voting power",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Feature {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mintable" | "mint" => Ok(Self::Mintable),
            "burnable" | "burn" => Ok(Self::Burnable),
            "pausable" | "pause" => Ok(Self::Pausable),
            "permit" | "eip2612" => Ok(Self::Permit),
            "snapshot" => Ok(Self::Snapshot),
            "votes" => Ok(Self::Votes),
            other => Err(DomainError::UnknownFeature(other.to_string())),
        }
    }
}

// ── ArtifactKind ──────────────────────────────────────────────────────────────

/// The three text outputs produced from one validated configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    Contract,
    DeployScript,
    TestSkeleton,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 3] = [Self::Contract, Self::DeployScript, Self::TestSkeleton];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Contract => "contract",
            Self::DeployScript => "deploy-script",
            Self::TestSkeleton => "test-skeleton",
        }
    }

    /// Human label used in progress output.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Contract => "Contract",
            Self::DeployScript => "Deploy script",
            Self::TestSkeleton => "Test skeleton",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
