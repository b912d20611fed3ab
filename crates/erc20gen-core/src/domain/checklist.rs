//! Post-generation security review checklist.

use crate::domain::token_config::TokenConfig;

/// Review items to work through before a mainnet deployment.
///
/// The base list is fixed; permit, snapshot and votes each add an item.
pub fn security_checklist(config: &TokenConfig) -> Vec<String> {
    let mut checks = vec![
        "[ ] Review OpenZeppelin version in package.json - use latest stable".to_string(),
        "[ ] Audit mint() access control before mainnet deployment".to_string(),
        format!(
            "[ ] Run Slither static analysis: slither contracts/{}",
            config.contract_file_name()
        ),
        "[ ] Run Echidna fuzzer on token invariants".to_string(),
        "[ ] Verify initial supply is correct (decimals applied in contract)".to_string(),
        "[ ] Consider front-running risks if using Pausable".to_string(),
        "[ ] Test all edge cases: zero transfers, max uint256 approvals".to_string(),
    ];

    if config.permit {
        checks.push("[ ] Validate EIP-712 domain separator is network-specific".to_string());
    }
    if config.snapshot {
        checks.push("[ ] Snapshot IDs should not be guessable - avoid sequential abuse".to_string());
    }
    if config.votes {
        checks.push("[ ] Governance voting delay and quorum must be reviewed carefully".to_string());
    }

    checks
}
