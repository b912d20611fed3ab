//! Implementation of the `erc20gen generate` command.
//!
//! Responsibility: assemble a `TokenConfig` (from flags or prompts), hand it
//! to the core `GenerateService`, and report what was written. No business
//! logic lives here.

use tracing::{debug, info, instrument};

use erc20gen_adapters::{LocalFilesystem, MemoryFilesystem, TeraRenderer};
use erc20gen_core::{
    application::{GenerateService, GenerationReport, OutputLayout},
    domain::{TokenConfig, security_checklist},
};

use crate::{
    cli::{GenerateArgs, GlobalArgs},
    commands::build_config,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `erc20gen generate` command.
///
/// Dispatch sequence:
/// 1. Collect the configuration (prompts when interactive and unnamed)
/// 2. Validate, render and write via `GenerateService`
/// 3. Report each written artifact
/// 4. Print the security checklist
#[instrument(skip_all, fields(dry_run = args.dry_run))]
pub fn execute(
    args: GenerateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Collect
    let token = collect_config(&args, &config)?;
    let out_dir = args
        .out
        .clone()
        .unwrap_or_else(|| config.defaults.out_dir.clone());
    let layout = OutputLayout::new(out_dir);

    debug!(
        name = %token.name,
        out = %layout.contracts_dir().display(),
        "Configuration collected"
    );

    // 2. Generate
    if args.dry_run {
        return dry_run(token, &layout, &output);
    }

    let renderer = Box::new(TeraRenderer::new()?);
    let filesystem = Box::new(LocalFilesystem::new());
    let service = GenerateService::new(renderer, filesystem);

    output.header(&format!("Generating {}...", display_name(&token)))?;
    let report = service.generate(token, &layout)?;
    info!(files = report.written.len(), "Generation finished");

    // 3. Report
    for (kind, path) in &report.written {
        output.success(&format!("{} written to {}", kind.label(), path.display()))?;
    }

    // 4. Checklist
    if !global.quiet {
        print_checklist(&report, &output)?;
    }

    Ok(())
}

/// Build the configuration from flags, or from prompts when allowed.
fn collect_config(args: &GenerateArgs, config: &AppConfig) -> CliResult<TokenConfig> {
    if args.interactive && args.token.name.is_none() {
        if let Some(token) = prompt_config(config)? {
            return Ok(token);
        }
    }

    let mut token = build_config(&args.token, &config.defaults)?;
    token.with_deploy |= args.with_deploy;
    token.with_test |= args.with_test;
    Ok(token)
}

#[cfg(feature = "interactive")]
fn prompt_config(config: &AppConfig) -> CliResult<Option<TokenConfig>> {
    crate::prompts::collect(&config.defaults).map(Some)
}

/// Without prompt support the flags are used as given; a missing name is
/// then reported by validation.
#[cfg(not(feature = "interactive"))]
fn prompt_config(_config: &AppConfig) -> CliResult<Option<TokenConfig>> {
    Ok(None)
}

/// Run the full pipeline against memory and print every artifact.
fn dry_run(token: TokenConfig, layout: &OutputLayout, output: &OutputManager) -> CliResult<()> {
    let filesystem = MemoryFilesystem::new();
    let service = GenerateService::new(Box::new(TeraRenderer::new()?), Box::new(filesystem.clone()));

    let report = service.generate(token, layout)?;
    for (kind, path) in &report.written {
        let Some(content) = filesystem.read_file(path) else {
            continue;
        };
        output.header(&format!("// ---- {} ({}) ----", kind.label(), path.display()))?;
        output.raw(&content)?;
    }

    output.print("")?;
    output.print("Dry run: no files were written.")?;
    Ok(())
}

fn print_checklist(report: &GenerationReport, output: &OutputManager) -> CliResult<()> {
    output.print("")?;
    output.header("Security checklist before mainnet:")?;
    for item in security_checklist(&report.config) {
        output.print(&format!("  {item}"))?;
    }
    output.print("")?;
    output.print(&next_step(&report.config))?;
    Ok(())
}

fn next_step(config: &TokenConfig) -> String {
    format!(
        "Next: copy {} into a Hardhat project, then run `npx hardhat test`",
        config.contract_file_name()
    )
}

fn display_name(config: &TokenConfig) -> String {
    if config.symbol.is_empty() {
        config.name.clone()
    } else {
        format!("{} ({})", config.name, config.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::TokenArgs;

    fn args(token: TokenArgs) -> GenerateArgs {
        GenerateArgs {
            token,
            out: None,
            with_deploy: false,
            with_test: false,
            interactive: false,
            dry_run: false,
        }
    }

    #[test]
    fn flags_build_config_when_not_interactive() {
        let mut a = args(TokenArgs {
            name: Some("MyToken".into()),
            symbol: Some("MTK".into()),
            ..TokenArgs::default()
        });
        a.with_deploy = true;

        let token = collect_config(&a, &AppConfig::default()).unwrap();
        assert_eq!(token.name, "MyToken");
        assert!(token.with_deploy);
        assert!(!token.with_test);
    }

    #[test]
    fn config_defaults_request_artifacts() {
        let mut config = AppConfig::default();
        config.defaults.with_test = true;

        let token = collect_config(
            &args(TokenArgs {
                name: Some("MyToken".into()),
                ..TokenArgs::default()
            }),
            &config,
        )
        .unwrap();
        assert!(token.with_test);
    }

    #[test]
    fn display_name_includes_symbol() {
        let cfg = TokenConfig::new("MyToken", "MTK");
        assert_eq!(display_name(&cfg), "MyToken (MTK)");
        assert_eq!(display_name(&TokenConfig::new("MyToken", "")), "MyToken");
    }

    #[test]
    fn next_step_names_contract_file() {
        let cfg = TokenConfig::new("My Token", "MTK");
        assert!(next_step(&cfg).contains("My_Token.sol"));
    }
}
