//! Best-effort firewall rules.

use tracing::warn;

use crate::ports::{CommandRunner, CommandSpec};

/// Apply `ufw allow` for each rule, ignoring failures. Returns how many
/// rules were applied.
pub fn open_firewall(runner: &impl CommandRunner, rules: &[String]) -> usize {
    rules
        .iter()
        .filter(|rule| match runner.run(&CommandSpec::new("ufw").arg("allow").arg(rule.as_str())) {
            Ok(()) => true,
            Err(err) => {
                warn!(rule = rule.as_str(), %err, "firewall rule not applied");
                false
            }
        })
        .count()
}
