//! Initial root credential written by GitLab on first reconfigure.

const PASSWORD_PREFIX: &str = "Password:";

/// Extract the password from the contents of `initial_root_password`.
pub fn parse_initial_password(content: &str) -> Option<String> {
    content
        .lines()
        .filter_map(|line| line.trim().strip_prefix(PASSWORD_PREFIX))
        .map(str::trim)
        .find(|value| !value.is_empty())
        .map(str::to_string)
}
