//! Resolution of raw answers into a consistent deployment configuration.

use std::net::Ipv6Addr;

use url::Url;

use crate::domain::AppError;
use crate::domain::answers::{Answers, UrlSource};

/// Hostname used when the operator has no real domain and leaves it blank.
pub const DEFAULT_LOCAL_HOSTNAME: &str = "gitlab.local";

/// Characters that would break the quoted Ruby literals written to `gitlab.rb`.
const FORBIDDEN_LITERAL_CHARS: &[char] = &['\'', '"', '\\', '/'];

/// Let's Encrypt settings; only present on the TLS path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetsEncrypt {
    contact_email: String,
}

impl LetsEncrypt {
    pub fn contact_email(&self) -> &str {
        &self.contact_email
    }
}

/// Final deployment parameters, consumed read-only by every pipeline step.
///
/// Only [`resolve`] constructs this type, so the following always hold:
/// TLS implies a real domain, the contact email exists exactly when TLS is
/// enabled, the hostname is non-empty and the external URL is
/// `scheme://host` without a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentConfig {
    server_address: String,
    hostname: String,
    use_domain: bool,
    lets_encrypt: Option<LetsEncrypt>,
    external_url: String,
}

impl DeploymentConfig {
    pub fn server_address(&self) -> &str {
        &self.server_address
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn use_domain(&self) -> bool {
        self.use_domain
    }

    pub fn use_tls(&self) -> bool {
        self.lets_encrypt.is_some()
    }

    pub fn lets_encrypt(&self) -> Option<&LetsEncrypt> {
        self.lets_encrypt.as_ref()
    }

    pub fn contact_email(&self) -> Option<&str> {
        self.lets_encrypt.as_ref().map(LetsEncrypt::contact_email)
    }

    pub fn external_url(&self) -> &str {
        &self.external_url
    }

    pub fn scheme(&self) -> &'static str {
        if self.use_tls() { "https" } else { "http" }
    }
}

/// Turn raw answers into a [`DeploymentConfig`], rejecting anything that
/// would violate its invariants.
pub fn resolve(answers: &Answers) -> Result<DeploymentConfig, AppError> {
    let server_address = require_server_address(&answers.server_address)?.to_string();

    let (use_domain, hostname, lets_encrypt, url_host) = if answers.wants_domain() {
        let hostname = require_hostname(&answers.hostname)?.to_string();
        let lets_encrypt = if answers.wants_tls() {
            let contact_email = require_contact_email(&answers.contact_email)?.to_string();
            Some(LetsEncrypt { contact_email })
        } else {
            None
        };
        (true, hostname.clone(), lets_encrypt, hostname)
    } else {
        let hostname = local_hostname(&answers.hostname).to_string();
        let url_host = match answers.url_source() {
            UrlSource::ServerAddress => server_address.clone(),
            UrlSource::LocalHostname => hostname.clone(),
        };
        (false, hostname, None, url_host)
    };

    check_host("address", &server_address)?;
    check_host("hostname", &hostname)?;

    let scheme = if lets_encrypt.is_some() { "https" } else { "http" };
    let external_url = format!("{}://{}", scheme, url_authority(&url_host));
    check_external_url(&external_url)?;

    Ok(DeploymentConfig { server_address, hostname, use_domain, lets_encrypt, external_url })
}

pub fn require_server_address(value: &str) -> Result<&str, AppError> {
    non_empty(value).ok_or_else(|| AppError::validation("Server address required"))
}

pub fn require_hostname(value: &str) -> Result<&str, AppError> {
    non_empty(value).ok_or_else(|| AppError::validation("Hostname required"))
}

pub fn require_contact_email(value: &str) -> Result<&str, AppError> {
    let email =
        non_empty(value).ok_or_else(|| AppError::validation("Contact email required for TLS"))?;
    let malformed = !email.contains('@')
        || email.starts_with('@')
        || email.ends_with('@')
        || email.chars().any(|c| c.is_whitespace() || FORBIDDEN_LITERAL_CHARS.contains(&c));
    if malformed {
        return Err(AppError::validation(format!("Invalid email: '{}'", email)));
    }
    Ok(email)
}

pub fn local_hostname(value: &str) -> &str {
    non_empty(value).unwrap_or(DEFAULT_LOCAL_HOSTNAME)
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn check_host(what: &str, value: &str) -> Result<(), AppError> {
    if value.chars().any(|c| c.is_whitespace() || FORBIDDEN_LITERAL_CHARS.contains(&c)) {
        return Err(AppError::validation(format!("Invalid {}: '{}'", what, value)));
    }
    let probe = format!("http://{}", url_authority(value));
    match Url::parse(&probe) {
        Ok(url) if is_bare_origin(&url) => Ok(()),
        _ => Err(AppError::validation(format!("Invalid {}: '{}'", what, value))),
    }
}

fn check_external_url(external_url: &str) -> Result<(), AppError> {
    match Url::parse(external_url) {
        Ok(url) if is_bare_origin(&url) && !external_url.ends_with('/') => Ok(()),
        _ => Err(AppError::validation(format!("Invalid external URL: '{}'", external_url))),
    }
}

fn is_bare_origin(url: &Url) -> bool {
    url.host().is_some()
        && url.username().is_empty()
        && url.password().is_none()
        && url.path() == "/"
        && url.query().is_none()
        && url.fragment().is_none()
}

/// IPv6 literals need brackets to appear in a URL.
fn url_authority(host: &str) -> String {
    if host.parse::<Ipv6Addr>().is_ok() { format!("[{}]", host) } else { host.to_string() }
}
