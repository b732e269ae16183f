use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn malformed_settings_file_fails_before_prompting() {
    let ctx = TestContext::new();
    let settings = ctx.write_settings("package = [\n");

    ctx.cli_with_settings(&settings)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: Invalid settings"))
        .stderr(predicate::str::contains("settings.toml"))
        .stdout(predicate::str::contains("Server IP address").not());
}

#[test]
fn unknown_settings_key_is_rejected() {
    let ctx = TestContext::new();
    let settings = ctx.write_settings("gitlab_rb = \"/tmp/gitlab.rb\"\n");

    ctx.cli_with_settings(&settings)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown field"));
}

#[test]
fn missing_settings_file_is_reported() {
    let ctx = TestContext::new();
    let absent = ctx.root().join("absent.toml");

    ctx.cli_with_settings(&absent)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot read"))
        .stderr(predicate::str::contains("absent.toml"));
}
