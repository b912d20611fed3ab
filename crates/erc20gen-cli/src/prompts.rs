//! Interactive token configuration collector.
//!
//! Only compiled with the `interactive` feature. The collector asks for every
//! field in a fixed order and returns an unvalidated [`TokenConfig`]; the
//! caller validates it like any flag-built configuration.

use std::io;

use dialoguer::{Confirm, Input, MultiSelect, Select, theme::ColorfulTheme};
use tracing::debug;

use erc20gen_core::domain::{AccessControl, Feature, TokenConfig};

use crate::{
    commands::default_features,
    config::TokenDefaults,
    error::{CliError, CliResult},
};

const DECIMAL_CHOICES: [u8; 4] = [18, 6, 8, 0];
const LICENSE_CHOICES: [&str; 4] = ["MIT", "GPL-3.0", "UNLICENSED", "Apache-2.0"];
const DEFAULT_INITIAL_SUPPLY: &str = "1000000";
const DEFAULT_CAP: &str = "10000000";

/// Walk the user through every token parameter.
///
/// Choices pre-select the matching `[defaults]` entry where one exists.
pub fn collect(defaults: &TokenDefaults) -> CliResult<TokenConfig> {
    let theme = ColorfulTheme::default();

    // Identity
    let name: String = Input::with_theme(&theme)
        .with_prompt("Token name (e.g. MyAwesomeToken)")
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.trim().is_empty() {
                Err("a token name is required")
            } else {
                Ok(())
            }
        })
        .interact_text()
        .map_err(prompt_error)?;

    let symbol: String = Input::with_theme(&theme)
        .with_prompt("Token symbol (e.g. MTK, max 11 chars)")
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.trim().is_empty() {
                Err("a token symbol is required")
            } else {
                Ok(())
            }
        })
        .interact_text()
        .map_err(prompt_error)?;

    let decimal_labels: Vec<String> = DECIMAL_CHOICES.iter().map(u8::to_string).collect();
    let decimals_idx = Select::with_theme(&theme)
        .with_prompt("Decimals (18 is the Ethereum standard, 6 suits stablecoins)")
        .items(&decimal_labels)
        .default(choice_index(&DECIMAL_CHOICES, &defaults.decimals))
        .interact()
        .map_err(prompt_error)?;

    let initial_supply: String = Input::with_theme(&theme)
        .with_prompt("Initial supply (whole tokens)")
        .default(DEFAULT_INITIAL_SUPPLY.to_string())
        .interact_text()
        .map_err(prompt_error)?;

    // Supply cap
    let has_cap = Confirm::with_theme(&theme)
        .with_prompt("Set a maximum supply cap?")
        .default(false)
        .interact()
        .map_err(prompt_error)?;

    let max_supply = if has_cap {
        let cap: String = Input::with_theme(&theme)
            .with_prompt("Maximum supply (whole tokens)")
            .default(DEFAULT_CAP.to_string())
            .interact_text()
            .map_err(prompt_error)?;
        Some(cap)
    } else {
        None
    };

    // Features
    let preselected = default_features(defaults)?;
    let feature_labels: Vec<String> = Feature::ALL.iter().map(feature_label).collect();
    let checked: Vec<bool> = Feature::ALL
        .iter()
        .map(|f| preselected.contains(f))
        .collect();
    let chosen = MultiSelect::with_theme(&theme)
        .with_prompt("Select token features (space to toggle, enter to confirm)")
        .items(&feature_labels)
        .defaults(&checked)
        .interact()
        .map_err(prompt_error)?;

    // Access control
    let access_labels: Vec<String> = AccessControl::ALL
        .iter()
        .map(|a| format!("{:<8} {}", a.as_str(), a.description()))
        .collect();
    let access_names: Vec<&str> = AccessControl::ALL.iter().map(|a| a.as_str()).collect();
    let access_idx = Select::with_theme(&theme)
        .with_prompt("Access control model")
        .items(&access_labels)
        .default(choice_index(&access_names, &defaults.access.as_str()))
        .interact()
        .map_err(prompt_error)?;

    // Output
    let with_deploy = Confirm::with_theme(&theme)
        .with_prompt("Generate Hardhat deployment script?")
        .default(true)
        .interact()
        .map_err(prompt_error)?;

    let with_test = Confirm::with_theme(&theme)
        .with_prompt("Generate Hardhat test skeleton?")
        .default(true)
        .interact()
        .map_err(prompt_error)?;

    let license_idx = Select::with_theme(&theme)
        .with_prompt("License")
        .items(&LICENSE_CHOICES)
        .default(choice_index(&LICENSE_CHOICES, &defaults.license.as_str()))
        .interact()
        .map_err(prompt_error)?;

    let mut config = TokenConfig {
        name: name.trim().to_string(),
        symbol: symbol.trim().to_uppercase(),
        decimals: DECIMAL_CHOICES[decimals_idx],
        initial_supply: Some(initial_supply),
        max_supply,
        access_control: AccessControl::ALL[access_idx].as_str().to_string(),
        license: LICENSE_CHOICES[license_idx].to_string(),
        solidity_version: defaults.solidity_version.clone(),
        with_deploy,
        with_test,
        ..TokenConfig::default()
    };
    for idx in chosen {
        config.set_feature(Feature::ALL[idx], true);
    }

    debug!(name = %config.name, symbol = %config.symbol, "Interactive configuration collected");
    Ok(config)
}

/// `Mintable   owner can mint new tokens`
fn feature_label(feature: &Feature) -> String {
    let name = feature.as_str();
    let mut title = name[..1].to_uppercase();
    title.push_str(&name[1..]);
    format!("{title:<10} {}", feature.description())
}

/// Position of `value` in `choices`, or the first entry.
fn choice_index<T: PartialEq>(choices: &[T], value: &T) -> usize {
    choices.iter().position(|c| c == value).unwrap_or(0)
}

/// Ctrl-C inside a prompt surfaces as an interrupted read.
fn prompt_error(err: dialoguer::Error) -> CliError {
    match err {
        dialoguer::Error::IO(e) if e.kind() == io::ErrorKind::Interrupted => CliError::Cancelled,
        dialoguer::Error::IO(e) => CliError::io("interactive prompt failed", e),
    }
}
