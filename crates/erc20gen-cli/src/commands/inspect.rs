//! `erc20gen inspect`: validate a configuration and show its composition.

use serde::Serialize;
use tracing::instrument;

use erc20gen_adapters::{MemoryFilesystem, TeraRenderer};
use erc20gen_core::{
    application::GenerateService,
    domain::{TokenConfig, security_checklist},
};

use crate::{
    cli::{InspectArgs, OutputFormat},
    commands::build_config,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Everything `generate` would derive from a configuration, without writing.
#[derive(Debug, Serialize)]
struct InspectReport<'a> {
    config: &'a TokenConfig,
    imports: Vec<&'static str>,
    inheritance: Vec<&'static str>,
    artifacts: Vec<String>,
    checklist: Vec<String>,
}

impl<'a> InspectReport<'a> {
    fn new(config: &'a TokenConfig) -> Self {
        Self {
            config,
            imports: config.import_paths(),
            inheritance: config.inheritance_list(),
            artifacts: config
                .requested_artifacts()
                .into_iter()
                .map(|kind| config.file_name(kind))
                .collect(),
            checklist: security_checklist(config),
        }
    }
}

#[instrument(skip_all)]
pub fn execute(args: InspectArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let raw = build_config(&args.token, &config.defaults)?;

    let service = GenerateService::new(
        Box::new(TeraRenderer::new()?),
        Box::new(MemoryFilesystem::new()),
    );
    let token = service.prepare(raw)?;
    let report = InspectReport::new(&token);

    if output.format() == OutputFormat::Json {
        output.json(&report)?;
        return Ok(());
    }

    output.header(&format!("{} ({})", token.name, token.symbol))?;
    output.print(&format!("  Decimals:       {}", token.decimals))?;
    output.print(&format!(
        "  Initial supply: {}",
        token.initial_mint().unwrap_or("none")
    ))?;
    output.print(&format!(
        "  Max supply:     {}",
        token.cap().unwrap_or("unlimited")
    ))?;
    output.print(&format!("  Access control: {}", token.access_control))?;
    output.print(&format!("  License:        {}", token.license))?;
    output.print(&format!("  Solidity:       {}", token.solidity_version))?;
    let features: Vec<&str> = token.features().iter().map(|f| f.as_str()).collect();
    output.print(&format!(
        "  Features:       {}",
        if features.is_empty() {
            "none".to_string()
        } else {
            features.join(", ")
        }
    ))?;

    output.print("")?;
    output.header("Imports")?;
    for path in &report.imports {
        output.print(&format!("  {path}"))?;
    }

    output.print("")?;
    output.header("Inheritance")?;
    output.print(&format!("  {}", inheritance_line(&report.inheritance)))?;

    output.print("")?;
    output.header("Artifacts")?;
    for file in &report.artifacts {
        output.print(&format!("  {file}"))?;
    }

    Ok(())
}

/// `ERC20, ERC20Capped, Ownable`
fn inheritance_line(bases: &[&str]) -> String {
    std::iter::once("ERC20")
        .chain(bases.iter().copied())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use erc20gen_core::domain::Feature;

    fn validated(mut cfg: TokenConfig) -> TokenConfig {
        cfg.validate().unwrap();
        cfg
    }

    #[test]
    fn report_lists_composition_and_files() {
        let mut cfg = TokenConfig::new("My Token", "MTK")
            .with_max_supply("1000")
            .with_feature(Feature::Votes);
        cfg.with_deploy = true;
        let cfg = validated(cfg);

        let report = InspectReport::new(&cfg);
        assert_eq!(report.imports[0], "@openzeppelin/contracts/token/ERC20/ERC20.sol");
        assert_eq!(report.inheritance[0], "ERC20Capped");
        assert_eq!(report.artifacts, vec!["My_Token.sol", "deploy_My_Token.js"]);
        assert!(report.checklist.iter().any(|c| c.contains("My_Token.sol")));
    }

    #[test]
    fn report_serializes_config_fields() {
        let cfg = validated(TokenConfig::new("MyToken", "MTK"));
        let json = serde_json::to_value(InspectReport::new(&cfg)).unwrap();
        assert_eq!(json["config"]["symbol"], "MTK");
        assert_eq!(json["config"]["access_control"], "ownable");
        assert!(json["imports"].is_array());
    }

    #[test]
    fn inheritance_line_starts_with_base() {
        assert_eq!(inheritance_line(&[]), "ERC20");
        assert_eq!(
            inheritance_line(&["ERC20Burnable", "Ownable"]),
            "ERC20, ERC20Burnable, Ownable"
        );
    }
}
