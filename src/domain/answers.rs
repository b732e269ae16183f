//! Raw operator answers as collected from the interactive prompts.

/// Answers in prompt order. Values are kept exactly as typed; interpretation
/// happens in [`crate::domain::resolve`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    pub server_address: String,
    pub has_domain: String,
    pub hostname: String,
    pub protocol_choice: String,
    pub contact_email: String,
    pub url_source: String,
}

/// Which value becomes the host of the external URL on the no-domain path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlSource {
    ServerAddress,
    LocalHostname,
}

impl Answers {
    pub(crate) fn wants_domain(&self) -> bool {
        is_affirmative(&self.has_domain)
    }

    /// Protocol choice `2` is plain HTTP; everything else means HTTPS.
    pub(crate) fn wants_tls(&self) -> bool {
        self.protocol_choice.trim() != "2"
    }

    pub(crate) fn url_source(&self) -> UrlSource {
        match self.url_source.trim() {
            "2" => UrlSource::LocalHostname,
            _ => UrlSource::ServerAddress,
        }
    }
}

pub(crate) fn is_affirmative(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
