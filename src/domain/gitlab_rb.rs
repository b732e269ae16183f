//! Key-line upserts against the line-oriented `gitlab.rb` configuration file.

use crate::domain::DeploymentConfig;

pub const EXTERNAL_URL_KEY: &str = "external_url";
pub const LETSENCRYPT_ENABLE_KEY: &str = "letsencrypt['enable']";
pub const LETSENCRYPT_CONTACT_EMAILS_KEY: &str = "letsencrypt['contact_emails']";

/// A single setting line, identified by the key it starts with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyLine {
    pub key: &'static str,
    pub line: String,
}

impl KeyLine {
    fn new(key: &'static str, line: String) -> Self {
        Self { key, line }
    }

    /// Whether `line` is an active (uncommented) setting for this key.
    pub fn matches(&self, line: &str) -> bool {
        let Some(rest) = line.trim_start().strip_prefix(self.key) else {
            return false;
        };
        match rest.chars().next() {
            None => true,
            Some(c) => c == '=' || c.is_whitespace(),
        }
    }
}

/// Lines that project `config` onto `gitlab.rb`.
///
/// The Let's Encrypt lines are emitted only for TLS deployments. They are
/// never removed when a later run disables TLS.
pub fn key_lines(config: &DeploymentConfig) -> Vec<KeyLine> {
    let mut lines = vec![KeyLine::new(
        EXTERNAL_URL_KEY,
        format!("{} '{}'", EXTERNAL_URL_KEY, config.external_url()),
    )];

    if let Some(lets_encrypt) = config.lets_encrypt() {
        lines.push(KeyLine::new(
            LETSENCRYPT_ENABLE_KEY,
            format!("{} = true", LETSENCRYPT_ENABLE_KEY),
        ));
        lines.push(KeyLine::new(
            LETSENCRYPT_CONTACT_EMAILS_KEY,
            format!("{} = ['{}']", LETSENCRYPT_CONTACT_EMAILS_KEY, lets_encrypt.contact_email()),
        ));
    }

    lines
}

/// Replace every active line matching each key in place, appending the line
/// when no match exists.
///
/// Line terminators of replaced lines are preserved. Applying the same edits
/// to the output again returns it unchanged.
pub fn upsert(content: &str, edits: &[KeyLine]) -> String {
    let mut lines: Vec<String> = content.split_inclusive('\n').map(str::to_string).collect();

    for edit in edits {
        let mut found = false;
        for line in lines.iter_mut() {
            let (body, terminator) = split_terminator(line);
            if edit.matches(body) {
                *line = format!("{}{}", edit.line, terminator);
                found = true;
            }
        }

        if !found {
            if let Some(last) = lines.last_mut()
                && !last.ends_with('\n')
            {
                last.push('\n');
            }
            lines.push(format!("{}\n", edit.line));
        }
    }

    lines.concat()
}

fn split_terminator(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}
