use std::path::Path;

use tracing::warn;

use crate::domain::parse_initial_password;
use crate::ports::ConfigFileStore;

/// Read the initial root password if GitLab left one behind.
pub fn read_initial_password(store: &impl ConfigFileStore, path: &Path) -> Option<String> {
    if !store.exists(path) {
        return None;
    }
    match store.read(path) {
        Ok(content) => parse_initial_password(&content),
        Err(err) => {
            warn!(%err, "initial password file unreadable");
            None
        }
    }
}
