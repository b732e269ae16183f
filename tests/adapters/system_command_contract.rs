use gitlab_setup::AppError;
use gitlab_setup::ports::{CommandRunner, CommandSpec};
use gitlab_setup::services::SystemCommandRunner;

#[cfg(unix)]
#[test]
fn runner_contract() {
    let runner = SystemCommandRunner::new();

    // 1. Captured output is trimmed.
    let out = runner.capture(&CommandSpec::new("echo").arg(" hello ")).expect("capture");
    assert_eq!(out, "hello");

    // 2. Environment is passed through.
    let check = "test \"$EXTERNAL_URL\" = https://gitlab.example.com";
    let spec = CommandSpec::new("sh").args(["-c", check]);
    runner.run(&spec.env("EXTERNAL_URL", "https://gitlab.example.com")).expect("env reaches child");

    // 3. Non-zero exit becomes an external tool error naming the command.
    let err = runner.run(&CommandSpec::new("sh").args(["-c", "exit 7"])).unwrap_err();
    match err {
        AppError::ExternalTool { command, status, .. } => {
            assert_eq!(command, "sh -c exit 7");
            assert_eq!(status, Some(7));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
