//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text.  No business logic lives here.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "erc20gen",
    bin_name = "erc20gen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "ERC-20 token generator: OpenZeppelin contracts, Hardhat deploy scripts and tests",
    long_about = "erc20gen generates ERC-20 Solidity contracts built on OpenZeppelin, \
                  with optional Hardhat deployment scripts and test skeletons.\n\
                  Supports Ownable or role-based access control, minting, burning, \
                  pausing, EIP-2612 permit, snapshots, votes and capped supply.",
    after_help = "EXAMPLES:\n\
        \x20 erc20gen generate\n\
        \x20 erc20gen generate --name MyToken --symbol MTK --initial-supply 1000000 --mintable\n\
        \x20 erc20gen inspect --name MyToken --symbol MTK --votes --output-format json\n\
        \x20 erc20gen completions bash > ~/.local/share/bash-completion/completions/erc20gen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a new ERC-20 token contract.
    #[command(
        visible_aliases = ["gen", "new"],
        about = "Generate a new ERC-20 token smart contract",
        after_help = "EXAMPLES:\n\
            \x20 erc20gen generate                      # interactive prompts\n\
            \x20 erc20gen generate --name MyToken --symbol MTK --decimals 18 \\\n\
            \x20     --initial-supply 1000000 --mintable --burnable --pausable --out ./contracts\n\
            \x20 erc20gen generate --interactive=false --name MyToken --symbol MTK --dry-run"
    )]
    Generate(GenerateArgs),

    /// Validate a configuration and show what would be generated.
    #[command(
        about = "Validate a token configuration and show its composition",
        after_help = "EXAMPLES:\n\
            \x20 erc20gen inspect --name MyToken --symbol MTK --permit --votes\n\
            \x20 erc20gen inspect --name MyToken --symbol MTK --output-format json"
    )]
    Inspect(InspectArgs),

    /// Initialise an erc20gen configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 erc20gen init                         # default location\n\
            \x20 erc20gen init --force                 # overwrite existing\n\
            \x20 erc20gen --config ./erc20gen.toml init"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 erc20gen completions bash > ~/.local/share/bash-completion/completions/erc20gen\n\
            \x20 erc20gen completions zsh  > ~/.zfunc/_erc20gen\n\
            \x20 erc20gen completions fish > ~/.config/fish/completions/erc20gen.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the erc20gen configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 erc20gen config get defaults.license\n\
            \x20 erc20gen config list\n\
            \x20 erc20gen config path"
    )]
    Config(ConfigCommands),
}

// ── token flags ───────────────────────────────────────────────────────────────

/// Token parameters shared by `generate` and `inspect`.
///
/// Options left unset fall back to the `[defaults]` section of the
/// configuration file.
#[derive(Debug, Clone, Default, Args)]
pub struct TokenArgs {
    /// Token name.
    #[arg(long = "name", value_name = "NAME", help = "Token name (e.g. MyToken)")]
    pub name: Option<String>,

    /// Token symbol.
    #[arg(long = "symbol", value_name = "SYMBOL", help = "Token symbol (e.g. MTK)")]
    pub symbol: Option<String>,

    /// Number of decimals.
    #[arg(long = "decimals", value_name = "N", help = "Number of decimals (0-18)")]
    pub decimals: Option<u8>,

    /// Initial supply minted to the deployer.
    #[arg(
        long = "initial-supply",
        value_name = "AMOUNT",
        help = "Initial supply (in whole tokens, e.g. 1000000)"
    )]
    pub initial_supply: Option<String>,

    /// Supply cap.
    #[arg(
        long = "max-supply",
        value_name = "AMOUNT",
        help = "Maximum supply cap (leave empty for unlimited)"
    )]
    pub max_supply: Option<String>,

    #[arg(long = "mintable", help = "Allow minting new tokens after deployment")]
    pub mintable: bool,

    #[arg(long = "burnable", help = "Allow token holders to burn their tokens")]
    pub burnable: bool,

    #[arg(long = "pausable", help = "Allow owner to pause all token transfers")]
    pub pausable: bool,

    #[arg(long = "permit", help = "Add EIP-2612 permit() for gasless approvals")]
    pub permit: bool,

    #[arg(long = "snapshot", help = "Add snapshot capability for governance")]
    pub snapshot: bool,

    #[arg(long = "votes", help = "Add ERC-20 Votes for on-chain governance (implies --snapshot)")]
    pub votes: bool,

    /// Access control model.
    ///
    /// Kept as a raw string so an unknown model is reported alongside every
    /// other validation problem.
    #[arg(
        long = "access",
        value_name = "MODEL",
        help = "Access control: ownable | roles | none"
    )]
    pub access: Option<String>,

    #[arg(long = "license", value_name = "SPDX", help = "SPDX license identifier")]
    pub license: Option<String>,

    #[arg(
        long = "solidity-version",
        value_name = "PRAGMA",
        help = "Solidity compiler version pragma (e.g. ^0.8.24)"
    )]
    pub solidity_version: Option<String>,
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `erc20gen generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub token: TokenArgs,

    /// Directory the contract is written to.  Deploy scripts and tests go
    /// into `scripts/` and `test/` next to it.
    #[arg(
        short = 'o',
        long = "out",
        value_name = "DIR",
        help = "Output directory for generated files (default: ./contracts)"
    )]
    pub out: Option<PathBuf>,

    #[arg(long = "with-deploy", help = "Also generate a Hardhat deployment script")]
    pub with_deploy: bool,

    #[arg(long = "with-test", help = "Also generate a Hardhat test file skeleton")]
    pub with_test: bool,

    /// Prompt for the configuration when `--name` is not given.
    #[arg(
        long = "interactive",
        action = ArgAction::Set,
        default_value_t = true,
        default_missing_value = "true",
        num_args = 0..=1,
        require_equals = true,
        value_name = "BOOL",
        help = "Use interactive prompts (disable with --interactive=false)"
    )]
    pub interactive: bool,

    /// Render everything but write nothing; artifacts are printed instead.
    #[arg(long = "dry-run", help = "Print generated files instead of writing them")]
    pub dry_run: bool,
}

// ── inspect ───────────────────────────────────────────────────────────────────

/// Arguments for `erc20gen inspect`.
#[derive(Debug, Args)]
pub struct InspectArgs {
    #[command(flatten)]
    pub token: TokenArgs,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `erc20gen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `erc20gen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `erc20gen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.license`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
