use crate::harness::TestContext;
use predicates::prelude::*;
use std::fs;

/// Without root the precondition fails; as root the prompt has no terminal.
/// Either way the run stops before touching the system.
#[test]
fn non_interactive_run_stops_before_any_change() {
    let ctx = TestContext::new();
    let settings = ctx.write_sandboxed_settings();
    let before = fs::read_to_string(ctx.gitlab_rb()).unwrap();

    ctx.cli_with_settings(&settings)
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: "))
        .stdout(predicate::str::contains("Installation summary").not());

    assert_eq!(fs::read_to_string(ctx.gitlab_rb()).unwrap(), before);
}
