//! Interactive collection of the operator's answers.

use crate::domain::deployment::{
    DEFAULT_LOCAL_HOSTNAME, require_contact_email, require_hostname, require_server_address,
};
use crate::domain::{AppError, Answers};
use crate::ports::OperatorConsole;

pub const PROMPT_SERVER_ADDRESS: &str = "Server IP address";
pub const PROMPT_HAS_DOMAIN: &str = "Do you have a domain name pointing to this server? (y/n)";
pub const PROMPT_HOSTNAME: &str = "Domain name (e.g. gitlab.example.com)";
pub const PROMPT_PROTOCOL: &str = "Protocol: [1] HTTPS with Let's Encrypt, [2] HTTP";
pub const PROMPT_CONTACT_EMAIL: &str = "Email for Let's Encrypt notifications";
pub const PROMPT_LOCAL_HOSTNAME: &str = "Local hostname";
pub const PROMPT_URL_SOURCE: &str = "External URL host: [1] server IP address, [2] local hostname";

/// Ask every question in fixed order, failing at the first missing
/// required answer.
pub fn gather_answers(console: &impl OperatorConsole) -> Result<Answers, AppError> {
    let mut answers = Answers {
        server_address: console.input(PROMPT_SERVER_ADDRESS, None)?,
        ..Answers::default()
    };
    require_server_address(&answers.server_address)?;

    answers.has_domain = console.input(PROMPT_HAS_DOMAIN, Some("n"))?;

    if answers.wants_domain() {
        answers.hostname = console.input(PROMPT_HOSTNAME, None)?;
        require_hostname(&answers.hostname)?;

        answers.protocol_choice = console.input(PROMPT_PROTOCOL, Some("1"))?;
        if answers.wants_tls() {
            answers.contact_email = console.input(PROMPT_CONTACT_EMAIL, None)?;
            require_contact_email(&answers.contact_email)?;
        }
    } else {
        answers.hostname = console.input(PROMPT_LOCAL_HOSTNAME, Some(DEFAULT_LOCAL_HOSTNAME))?;
        answers.url_source = console.input(PROMPT_URL_SOURCE, Some("1"))?;
    }

    Ok(answers)
}
