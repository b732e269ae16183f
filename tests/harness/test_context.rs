//! Shared testing harness for `gitlab-setup` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Root of the temporary directory.
    pub(crate) fn root(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for invoking the compiled binary with no settings file.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("gitlab-setup").expect("Failed to locate gitlab-setup binary");
        cmd.current_dir(self.root())
            .env_remove("GITLAB_SETUP_SETTINGS")
            .env_remove("GITLAB_SETUP_LOG");
        cmd
    }

    /// Build a command that reads settings from `path`.
    pub(crate) fn cli_with_settings(&self, path: &Path) -> Command {
        let mut cmd = self.cli();
        cmd.env("GITLAB_SETUP_SETTINGS", path);
        cmd
    }

    /// Write a settings file and return its path.
    pub(crate) fn write_settings(&self, content: &str) -> PathBuf {
        let path = self.root().join("settings.toml");
        fs::write(&path, content).expect("Failed to write settings file");
        path
    }

    /// Settings pointing every fixed path into the temp directory.
    pub(crate) fn write_sandboxed_settings(&self) -> PathBuf {
        let gitlab_rb = self.root().join("gitlab.rb");
        fs::write(&gitlab_rb, "external_url 'http://gitlab.example.com'\n")
            .expect("Failed to write gitlab.rb");
        self.write_settings(&format!(
            "gitlab_rb_path = {:?}\ninitial_root_password_path = {:?}\nfirewall_rules = []\n",
            gitlab_rb.display().to_string(),
            self.root().join("initial_root_password").display().to_string(),
        ))
    }

    /// Path of the sandboxed `gitlab.rb`.
    pub(crate) fn gitlab_rb(&self) -> PathBuf {
        self.root().join("gitlab.rb")
    }
}
