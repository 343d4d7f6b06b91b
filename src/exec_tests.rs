use std::time::Duration;

use super::*;

const GENEROUS: Duration = Duration::from_secs(10);

#[cfg(unix)]
#[test]
fn captures_exit_code() {
    let spec = CommandSpec::new("sh").args(["-c", "exit 7"]);
    let outcome = run(&spec, GENEROUS).unwrap();

    assert_eq!(outcome.exit_code, Some(7));
    assert!(!outcome.timed_out);
    assert!(!outcome.success());
}

#[cfg(unix)]
#[test]
fn zero_exit_is_success() {
    let spec = CommandSpec::new("sh").args(["-c", "exit 0"]);
    let outcome = run(&spec, GENEROUS).unwrap();

    assert_eq!(outcome.exit_code, Some(0));
    assert!(outcome.success());
}

#[cfg(unix)]
#[test]
fn captures_stdout_and_stderr() {
    let spec = CommandSpec::new("sh").args(["-c", "echo out; echo err >&2"]);
    let outcome = run(&spec, GENEROUS).unwrap();

    assert_eq!(outcome.stdout.trim(), "out");
    assert_eq!(outcome.stderr.trim(), "err");
}

#[cfg(unix)]
#[test]
fn kills_process_past_the_deadline() {
    let spec = CommandSpec::new("sh").args(["-c", "sleep 30"]);
    let start = std::time::Instant::now();
    let outcome = run(&spec, Duration::from_millis(100)).unwrap();

    assert!(outcome.timed_out);
    assert!(!outcome.success());
    assert!(start.elapsed() < Duration::from_secs(10));
}

#[test]
fn missing_binary_is_a_spawn_error() {
    let spec = CommandSpec::new("submit-guard-no-such-binary");
    let err = run(&spec, GENEROUS).unwrap_err();
    assert!(matches!(err, crate::SubmitGuardError::Spawn { .. }));
}

#[test]
fn spec_builder_accumulates_args() {
    let spec = CommandSpec::new("tool")
        .args(["--check-only"])
        .args(["--verbose"]);
    assert_eq!(spec.program(), std::path::Path::new("tool"));
}
