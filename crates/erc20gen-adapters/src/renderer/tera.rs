//! Tera-backed renderer with the templates compiled into the binary.

use std::error::Error as _;

use erc20gen_core::{
    application::{ApplicationError, ports::ArtifactRenderer},
    domain::{AccessControl, ArtifactKind, TokenConfig, composition},
    error::Erc20genResult,
};
use tera::{Context, Tera};
use tracing::{debug, instrument};

pub mod embedded {
    pub const CONTRACT_SOL: &str = include_str!("../../templates/contract.sol.tera");
    pub const DEPLOY_JS: &str = include_str!("../../templates/deploy.js.tera");
    pub const TEST_JS: &str = include_str!("../../templates/test.js.tera");
}

/// Renders the contract, deploy script and test skeleton.
///
/// Each renderer owns its own `Tera` instance; there is no shared template
/// registry.
pub struct TeraRenderer {
    tera: Tera,
}

impl TeraRenderer {
    /// Create a renderer with the embedded templates registered.
    pub fn new() -> Erc20genResult<Self> {
        let mut tera = Tera::default();
        for kind in ArtifactKind::ALL {
            tera.add_raw_template(template_name(kind), template_source(kind))
                .map_err(|e| ApplicationError::TemplateSetup {
                    reason: describe(&e),
                })?;
        }
        Ok(Self { tera })
    }

    /// Build the template context for a validated configuration.
    fn context(kind: ArtifactKind, config: &TokenConfig) -> Erc20genResult<Context> {
        let access = config.access().ok_or_else(|| ApplicationError::RenderingFailed {
            artifact: kind,
            reason: format!(
                "access control {:?} was not normalized by validation",
                config.access_control
            ),
        })?;

        let (mint_guard, pause_guard, snapshot_guard) = match access {
            AccessControl::Ownable => ("onlyOwner", "onlyOwner", "onlyOwner"),
            AccessControl::Roles => (
                "onlyRole(MINTER_ROLE)",
                "onlyRole(PAUSER_ROLE)",
                "onlyRole(SNAPSHOT_ROLE)",
            ),
            AccessControl::None => ("", "", ""),
        };

        let update_overrides = composition::update_hook_overrides(config);

        let mut ctx = Context::new();
        // Header
        ctx.insert("license", &config.license);
        ctx.insert("solidity_version", &config.solidity_version);
        ctx.insert("imports", &config.import_paths());
        ctx.insert("inheritance", &config.inheritance_list());

        // Identity
        ctx.insert("contract_name", &config.safe_name());
        ctx.insert("deploy_file", &config.deploy_script_file_name());
        ctx.insert("name", &config.name);
        ctx.insert("symbol", &config.symbol);
        ctx.insert("decimals", &config.decimals);
        ctx.insert("custom_decimals", &config.uses_custom_decimals());

        // Supply
        ctx.insert("has_initial_supply", &config.initial_mint().is_some());
        ctx.insert("initial_supply", config.initial_mint().unwrap_or_default());
        ctx.insert("capped", &config.is_capped());
        ctx.insert("max_supply", config.cap().unwrap_or_default());

        // Features
        ctx.insert("mintable", &config.mintable);
        ctx.insert("burnable", &config.burnable);
        ctx.insert("pausable", &config.pausable);
        ctx.insert("permit", &config.permit);
        ctx.insert("snapshot", &config.snapshot);
        ctx.insert("votes", &config.votes);

        // Access control
        ctx.insert("ownable", &config.needs_ownable());
        ctx.insert("roles", &config.needs_roles());
        ctx.insert("guarded", &config.has_access_control());
        ctx.insert(
            "role_constants",
            &(config.needs_roles() && (config.mintable || config.pausable || config.snapshot)),
        );
        ctx.insert("mint_guard", mint_guard);
        ctx.insert("pause_guard", pause_guard);
        ctx.insert("snapshot_guard", snapshot_guard);

        // Override glue
        ctx.insert("update_override", &!update_overrides.is_empty());
        ctx.insert("update_overrides", &update_overrides);
        ctx.insert("nonces_override", &composition::needs_nonces_override(config));

        Ok(ctx)
    }
}

impl ArtifactRenderer for TeraRenderer {
    #[instrument(skip_all, fields(artifact = %kind, token = %config.name))]
    fn render(&self, kind: ArtifactKind, config: &TokenConfig) -> Erc20genResult<String> {
        let ctx = Self::context(kind, config)?;
        let output = self
            .tera
            .render(template_name(kind), &ctx)
            .map_err(|e| ApplicationError::RenderingFailed {
                artifact: kind,
                reason: describe(&e),
            })?;
        debug!(bytes = output.len(), "Template rendered");
        Ok(output)
    }
}

fn template_name(kind: ArtifactKind) -> &'static str {
    match kind {
        ArtifactKind::Contract => "contract.sol",
        ArtifactKind::DeployScript => "deploy.js",
        ArtifactKind::TestSkeleton => "test.js",
    }
}

fn template_source(kind: ArtifactKind) -> &'static str {
    match kind {
        ArtifactKind::Contract => embedded::CONTRACT_SOL,
        ArtifactKind::DeployScript => embedded::DEPLOY_JS,
        ArtifactKind::TestSkeleton => embedded::TEST_JS,
    }
}

/// Tera puts the useful detail in the source chain, not the top-level message.
fn describe(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use erc20gen_core::domain::Feature;

    use super::*;

    fn validated(mut cfg: TokenConfig) -> TokenConfig {
        cfg.validate().unwrap();
        cfg
    }

    fn scenario_a() -> TokenConfig {
        TokenConfig::new("TestToken", "TST")
            .with_initial_supply("1000000")
            .with_access(AccessControl::Ownable)
    }

    fn contract(cfg: &TokenConfig) -> String {
        TeraRenderer::new()
            .unwrap()
            .render(ArtifactKind::Contract, cfg)
            .unwrap()
    }

    #[test]
    fn embedded_templates_register() {
        assert!(TeraRenderer::new().is_ok());
    }

    #[test]
    fn scenario_a_plain_ownable_token() {
        let out = contract(&validated(scenario_a()));

        assert!(out.starts_with("// SPDX-License-Identifier: MIT\npragma solidity ^0.8.24;\n"));
        assert!(out.contains("contract TestToken is ERC20, Ownable {"));
        assert!(out.contains("ERC20(\"TestToken\", \"TST\")"));
        assert!(out.contains("Ownable(msg.sender)"));
        assert!(out.contains("_mint(msg.sender, 1000000 * 10 ** decimals());"));
        assert!(!out.contains("function decimals()"));
        assert!(!out.contains("onlyOwner"));
        assert!(!out.contains("function _update"));
    }

    #[test]
    fn scenario_b_roles_gate_minting() {
        let out = contract(&validated(
            scenario_a()
                .with_access(AccessControl::Roles)
                .with_feature(Feature::Mintable),
        ));

        assert!(out.contains("contract TestToken is ERC20, AccessControl {"));
        assert!(out.contains("bytes32 public constant MINTER_ROLE = keccak256(\"MINTER_ROLE\");"));
        assert!(out.contains("_grantRole(DEFAULT_ADMIN_ROLE, msg.sender);"));
        assert!(out.contains("_grantRole(MINTER_ROLE, msg.sender);"));
        assert!(out.contains("function mint(address to, uint256 amount) public onlyRole(MINTER_ROLE) {"));
        assert!(!out.contains("onlyOwner"));
        assert!(!out.contains("PAUSER_ROLE"));
    }

    #[test]
    fn scenario_c_custom_decimals_override() {
        let out = contract(&validated(scenario_a().with_decimals(6)));

        assert!(out.contains("function decimals() public pure override returns (uint8) {"));
        assert!(out.contains("return 6;"));
    }

    #[test]
    fn scenario_d_capped_goes_first() {
        let out = contract(&validated(scenario_a().with_max_supply("10000000")));

        assert!(out.contains("import \"@openzeppelin/contracts/token/ERC20/extensions/ERC20Capped.sol\";"));
        assert!(out.contains("contract TestToken is ERC20, ERC20Capped, Ownable {"));
        assert!(out.contains("ERC20Capped(10000000 * 10 ** 18)"));
        assert!(out.contains("override(ERC20, ERC20Capped)"));
    }

    #[test]
    fn no_access_control_has_no_guards() {
        let out = contract(&validated(
            scenario_a()
                .with_access(AccessControl::None)
                .with_feature(Feature::Mintable)
                .with_feature(Feature::Pausable),
        ));

        assert!(out.contains("function mint(address to, uint256 amount) public {"));
        assert!(out.contains("function pause() public {"));
        assert!(!out.contains("Ownable"));
        assert!(!out.contains("onlyOwner"));
        assert!(!out.contains("onlyRole"));
    }

    #[test]
    fn imports_render_one_per_line_base_first() {
        let out = contract(&validated(scenario_a().with_feature(Feature::Burnable)));

        let imports: Vec<_> = out.lines().filter(|l| l.starts_with("import ")).collect();
        assert_eq!(
            imports,
            vec![
                "import \"@openzeppelin/contracts/token/ERC20/ERC20.sol\";",
                "import \"@openzeppelin/contracts/token/ERC20/extensions/ERC20Burnable.sol\";",
                "import \"@openzeppelin/contracts/access/Ownable.sol\";",
            ]
        );
    }

    #[test]
    fn permit_with_votes_needs_nonces_override() {
        let out = contract(&validated(
            scenario_a()
                .with_feature(Feature::Permit)
                .with_feature(Feature::Votes),
        ));

        assert!(out.contains("ERC20Permit(\"TestToken\")"));
        assert!(!out.contains("EIP712("));
        assert!(out.contains("override(ERC20Permit, Nonces)"));
        assert!(out.contains("override(ERC20, ERC20Snapshot, ERC20Votes)"));
    }

    #[test]
    fn votes_without_permit_initializes_eip712() {
        let out = contract(&validated(scenario_a().with_feature(Feature::Votes)));
        assert!(out.contains("EIP712(\"TestToken\", \"1\")"));
        assert!(!out.contains("function nonces"));
    }

    #[test]
    fn unnormalized_access_control_is_a_render_error() {
        let mut cfg = scenario_a();
        cfg.access_control = "superadmin".into();

        let err = TeraRenderer::new()
            .unwrap()
            .render(ArtifactKind::Contract, &cfg)
            .unwrap_err();
        assert!(err.is_render());
    }
}
