//! Centralized token configuration validation.
//!
//! Every rule runs independently and contributes at most one message, so the
//! caller receives all violations at once. Messages are emitted in
//! field-declaration order: name, symbol, decimals, initial supply, max
//! supply, access control.

use std::sync::LazyLock;

use num_bigint::BigUint;
use regex::Regex;

use crate::domain::{token_config::TokenConfig, value_objects::AccessControl};

pub const DEFAULT_LICENSE: &str = "MIT";
pub const DEFAULT_SOLIDITY_VERSION: &str = "^0.8.24";
pub const MAX_DECIMALS: u8 = 18;

static SYMBOL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9]{1,11}$").expect("symbol pattern is valid"));
static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9 _\-]{1,64}$").expect("name pattern is valid"));
static DECIMAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+$").expect("decimal pattern is valid"));

/// Validate a configuration by value.
///
/// Returns the normalized configuration together with every violated rule.
/// An empty list means the configuration is valid.
pub fn validate(mut config: TokenConfig) -> (TokenConfig, Vec<String>) {
    let messages = check(&mut config);
    (config, messages)
}

/// Apply defaults in place and collect rule violations.
pub(crate) fn check(config: &mut TokenConfig) -> Vec<String> {
    let mut errs = Vec::new();

    // Name
    if config.name.trim().is_empty() {
        errs.push("token name is required".to_string());
    } else if !NAME_RE.is_match(&config.name) {
        errs.push(
            "token name must be 1-64 alphanumeric characters (spaces, hyphens, underscores allowed)"
                .to_string(),
        );
    }

    // Symbol
    if config.symbol.trim().is_empty() {
        errs.push("token symbol is required".to_string());
    } else if !SYMBOL_RE.is_match(&config.symbol) {
        errs.push("token symbol must be 1-11 uppercase letters/digits (e.g. MTK, USDC)".to_string());
    }

    // Decimals
    if config.decimals > MAX_DECIMALS {
        errs.push(format!("decimals must be between 0 and {MAX_DECIMALS}"));
    }

    // Supplies
    let initial = normalize_supply(&mut config.initial_supply);
    let max = normalize_supply(&mut config.max_supply);

    let initial = initial.and_then(|s| match parse_supply(&s) {
        Ok(n) => Some(n),
        Err(reason) => {
            errs.push(format!("initial supply: {reason}"));
            None
        }
    });
    let max = max.and_then(|s| match parse_supply(&s) {
        Ok(n) => Some(n),
        Err(reason) => {
            errs.push(format!("max supply: {reason}"));
            None
        }
    });
    if let (Some(initial), Some(max)) = (&initial, &max) {
        if initial > max {
            errs.push("initial supply cannot exceed max supply".to_string());
        }
    }

    // Access control
    if config.access_control.is_empty() {
        config.access_control = AccessControl::default().as_str().to_string();
    } else if config.access().is_none() {
        errs.push(format!(
            "invalid access control type {:?} - must be: ownable, roles, or none",
            config.access_control
        ));
    }

    // Votes requires Snapshot (OpenZeppelin coupling)
    if config.votes && !config.snapshot {
        config.snapshot = true;
    }

    if config.license.is_empty() {
        config.license = DEFAULT_LICENSE.to_string();
    }
    if config.solidity_version.is_empty() {
        config.solidity_version = DEFAULT_SOLIDITY_VERSION.to_string();
    }

    errs
}

/// Trim a supply in place.
///
/// Only an empty string means "absent"; whitespace trims to `""` and is then
/// rejected by [`parse_supply`].
fn normalize_supply(value: &mut Option<String>) -> Option<String> {
    if value.as_deref() == Some("") {
        *value = None;
    }
    let trimmed = value.as_deref().map(|s| s.trim().to_string());
    if let (Some(slot), Some(t)) = (value.as_mut(), trimmed.as_ref()) {
        slot.clone_from(t);
    }
    trimmed
}

/// Parse a non-negative decimal integer of any size.
fn parse_supply(s: &str) -> Result<BigUint, String> {
    if !DECIMAL_RE.is_match(s) {
        return Err(format!("{s:?} is not a valid positive integer"));
    }
    BigUint::parse_bytes(s.as_bytes(), 10).ok_or_else(|| format!("{s:?} cannot be parsed as an integer"))
}
