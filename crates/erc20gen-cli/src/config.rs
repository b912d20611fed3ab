//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `ERC20GEN_DEFAULTS__LICENSE=GPL-3.0`
//! 3. Config file: `--config FILE`, otherwise the platform config dir and
//!    `~/.erc20gen.toml`
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use erc20gen_core::domain::{DEFAULT_LICENSE, DEFAULT_SOLIDITY_VERSION};

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "ERC20GEN";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for generated tokens.
    pub defaults: TokenDefaults,
    /// Output settings.
    pub output: OutputConfig,
}

/// Token defaults used whenever a flag is not given.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenDefaults {
    pub decimals: u8,
    pub access: String,
    pub license: String,
    pub solidity_version: String,
    pub out_dir: PathBuf,
    pub with_deploy: bool,
    pub with_test: bool,
    /// Features switched on for every token, e.g. `["burnable", "permit"]`.
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for TokenDefaults {
    fn default() -> Self {
        Self {
            decimals: 18,
            access: "ownable".into(),
            license: DEFAULT_LICENSE.into(),
            solidity_version: DEFAULT_SOLIDITY_VERSION.into(),
            out_dir: PathBuf::from("./contracts"),
            with_deploy: false,
            with_test: false,
            features: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Load configuration, layering file and environment over the defaults.
    ///
    /// An explicit `config_file` must exist; the default locations are
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults = config::Config::try_from(&Self::default())
            .context("Failed to build default configuration")?;

        let mut builder = config::Config::builder().add_source(defaults);

        match config_file {
            Some(path) => {
                builder = builder.add_source(config::File::from(path.as_path()).required(true));
            }
            None => {
                for path in Self::search_paths() {
                    builder = builder.add_source(config::File::from(path).required(false));
                }
            }
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("defaults.features")
                .try_parsing(true),
        );

        let settings = builder.build().context("Failed to read configuration")?;
        settings
            .try_deserialize()
            .context("Configuration has invalid values")
    }

    /// Files consulted when no `--config` is given, lowest priority first.
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(home) = Self::home_config_path() {
            paths.push(home);
        }
        paths.push(Self::config_path());
        paths
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.erc20gen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("io", "erc20gen", "erc20gen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".erc20gen.toml"))
    }

    /// `~/.erc20gen.toml`, the legacy single-file location.
    pub fn home_config_path() -> Option<PathBuf> {
        directories::BaseDirs::new().map(|d| d.home_dir().join(".erc20gen.toml"))
    }

    /// The file that `load` would read for the given `--config` value, if any.
    pub fn active_path(config_file: Option<&PathBuf>) -> Option<PathBuf> {
        match config_file {
            Some(path) => Some(path.clone()),
            None => Self::search_paths()
                .into_iter()
                .rev()
                .find(|p| Path::new(p).is_file()),
        }
    }
}
