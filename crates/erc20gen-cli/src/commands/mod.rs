//! Command handlers, one module per subcommand.
//!
//! Handlers translate parsed arguments into core calls and display results.
//! Token parameters are merged here so `generate` and `inspect` agree on how
//! flags and configuration defaults combine.

use std::str::FromStr;

use erc20gen_core::domain::{Feature, TokenConfig};

use crate::{
    cli::TokenArgs,
    config::TokenDefaults,
    error::{CliError, CliResult},
};

pub mod completions;
pub mod config;
pub mod generate;
pub mod init;
pub mod inspect;

/// Build a raw configuration from flags, falling back to `[defaults]`.
///
/// Feature flags are additive: a feature listed in `defaults.features` stays
/// on even when its flag is absent. Nothing is validated here.
pub fn build_config(args: &TokenArgs, defaults: &TokenDefaults) -> CliResult<TokenConfig> {
    let mut config = TokenConfig {
        name: args.name.clone().unwrap_or_default(),
        symbol: args.symbol.clone().unwrap_or_default(),
        decimals: args.decimals.unwrap_or(defaults.decimals),
        initial_supply: args.initial_supply.clone(),
        max_supply: args.max_supply.clone(),
        access_control: args
            .access
            .clone()
            .unwrap_or_else(|| defaults.access.clone()),
        license: args
            .license
            .clone()
            .unwrap_or_else(|| defaults.license.clone()),
        solidity_version: args
            .solidity_version
            .clone()
            .unwrap_or_else(|| defaults.solidity_version.clone()),
        with_deploy: defaults.with_deploy,
        with_test: defaults.with_test,
        ..TokenConfig::default()
    };

    for feature in default_features(defaults)? {
        config.set_feature(feature, true);
    }

    let flags = [
        (Feature::Mintable, args.mintable),
        (Feature::Burnable, args.burnable),
        (Feature::Pausable, args.pausable),
        (Feature::Permit, args.permit),
        (Feature::Snapshot, args.snapshot),
        (Feature::Votes, args.votes),
    ];
    for (feature, enabled) in flags {
        if enabled {
            config.set_feature(feature, true);
        }
    }

    Ok(config)
}

/// Parse `defaults.features`; an unknown name is a configuration error.
pub fn default_features(defaults: &TokenDefaults) -> CliResult<Vec<Feature>> {
    defaults
        .features
        .iter()
        .map(|name| {
            Feature::from_str(name.trim()).map_err(|e| CliError::ConfigError {
                message: format!("defaults.features: {e}"),
                source: Some(Box::new(e)),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(name: &str, symbol: &str) -> TokenArgs {
        TokenArgs {
            name: Some(name.into()),
            symbol: Some(symbol.into()),
            ..TokenArgs::default()
        }
    }

    #[test]
    fn flags_win_over_defaults() {
        let mut a = args("MyToken", "MTK");
        a.decimals = Some(6);
        a.access = Some("roles".into());
        a.license = Some("Apache-2.0".into());

        let cfg = build_config(&a, &TokenDefaults::default()).unwrap();
        assert_eq!(cfg.decimals, 6);
        assert_eq!(cfg.access_control, "roles");
        assert_eq!(cfg.license, "Apache-2.0");
    }

    #[test]
    fn defaults_fill_missing_flags() {
        let defaults = TokenDefaults {
            decimals: 8,
            license: "GPL-3.0".into(),
            with_test: true,
            ..TokenDefaults::default()
        };
        let cfg = build_config(&args("MyToken", "MTK"), &defaults).unwrap();
        assert_eq!(cfg.decimals, 8);
        assert_eq!(cfg.license, "GPL-3.0");
        assert_eq!(cfg.access_control, "ownable");
        assert!(cfg.with_test);
        assert!(!cfg.with_deploy);
    }

    #[test]
    fn default_features_combine_with_flags() {
        let defaults = TokenDefaults {
            features: vec!["burnable".into(), " Permit ".into()],
            ..TokenDefaults::default()
        };
        let mut a = args("MyToken", "MTK");
        a.mintable = true;

        let cfg = build_config(&a, &defaults).unwrap();
        assert!(cfg.mintable && cfg.burnable && cfg.permit);
        assert!(!cfg.pausable);
    }

    #[test]
    fn unknown_default_feature_is_config_error() {
        let defaults = TokenDefaults {
            features: vec!["capped".into()],
            ..TokenDefaults::default()
        };
        let err = build_config(&args("MyToken", "MTK"), &defaults).unwrap_err();
        assert!(matches!(err, CliError::ConfigError { .. }));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn missing_name_is_left_for_validation() {
        let cfg = build_config(&TokenArgs::default(), &TokenDefaults::default()).unwrap();
        assert!(cfg.name.is_empty());
        assert!(cfg.symbol.is_empty());
    }
}
