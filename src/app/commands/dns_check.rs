//! Advisory check that the domain resolves to the server address.

use std::net::IpAddr;

use tracing::{debug, warn};

use crate::domain::{AppError, DeploymentConfig};
use crate::ports::{NameResolver, OperatorConsole};

pub const PROMPT_CONTINUE_DESPITE_DNS: &str = "Continue anyway?";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DnsCheck {
    /// No real domain; nothing to verify.
    Skipped,
    Matches,
    Mismatch { resolved: Vec<IpAddr> },
}

/// Compare the hostname's addresses with the server address. Lookup
/// failures count as a mismatch, never as an error.
pub fn check_dns(resolver: &impl NameResolver, config: &DeploymentConfig) -> DnsCheck {
    if !config.use_domain() {
        return DnsCheck::Skipped;
    }

    let expected = resolver.lookup(config.server_address()).unwrap_or_else(|err| {
        warn!(address = config.server_address(), %err, "server address did not resolve");
        Vec::new()
    });
    let resolved = resolver.lookup(config.hostname()).unwrap_or_else(|err| {
        warn!(hostname = config.hostname(), %err, "hostname did not resolve");
        Vec::new()
    });
    debug!(?expected, ?resolved, "dns advisory");

    if resolved.iter().any(|address| expected.contains(address)) {
        DnsCheck::Matches
    } else {
        DnsCheck::Mismatch { resolved }
    }
}

/// Run the advisory and let the operator decide whether a mismatch is fatal.
pub fn dns_advisory(
    console: &impl OperatorConsole,
    resolver: &impl NameResolver,
    config: &DeploymentConfig,
) -> Result<DnsCheck, AppError> {
    let check = check_dns(resolver, config);

    if let DnsCheck::Mismatch { resolved } = &check {
        let found = if resolved.is_empty() {
            "no addresses".to_string()
        } else {
            resolved.iter().map(IpAddr::to_string).collect::<Vec<_>>().join(", ")
        };
        console.warn(&format!(
            "{} resolves to {}, not {}. Let's Encrypt and clients may not reach this server.",
            config.hostname(),
            found,
            config.server_address()
        ));
        if !console.confirm(PROMPT_CONTINUE_DESPITE_DNS, false)? {
            return Err(AppError::UserAbort(format!(
                "DNS for {} does not point to {}",
                config.hostname(),
                config.server_address()
            )));
        }
    }

    Ok(check)
}
