use super::*;
use crate::change::{AffectedFile, Change, ChangedLine};

fn single_file(path: &str) -> Change {
    let lines = vec![ChangedLine::new(1, "changed")];
    Change::new(vec![AffectedFile::new(path, lines).unwrap()]).unwrap()
}

fn tool_config(program: &str) -> ToolConfig {
    ToolConfig {
        program: program.to_string(),
        args: vec!["--check-only".to_string()],
        files: vec![r".*\.cc$".to_string()],
        message: None,
        timeout_secs: 10,
    }
}

#[cfg(unix)]
fn write_tool(dir: &std::path::Path, relative: &str, exit_code: i32) {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, format!("#!/bin/sh\nexit {exit_code}\n")).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
}

#[test]
fn incapable_host_skips_the_check() {
    let env = HostEnv::detect("/nonexistent").without_tools();
    let check = ToolCheck::from_config("guards", &tool_config("tools/missing"), &env).unwrap();

    // Even with matching files, nothing runs and nothing is reported.
    assert!(check.run(&single_file("src/a.cc")).is_empty());
}

#[test]
fn empty_file_subset_short_circuits_before_spawning() {
    let env = HostEnv::detect("/nonexistent");
    let check = ToolCheck::from_config("guards", &tool_config("tools/missing"), &env).unwrap();

    // The tool does not exist; an empty result proves it was never launched.
    assert!(check.run(&single_file("docs/readme.md")).is_empty());
}

#[cfg(unix)]
#[test]
fn passing_tool_yields_an_empty_result() {
    let dir = tempfile::tempdir().unwrap();
    write_tool(dir.path(), "tools/fix_guards", 0);

    let env = HostEnv::detect(dir.path());
    let check = ToolCheck::from_config("guards", &tool_config("tools/fix_guards"), &env).unwrap();

    assert!(check.run(&single_file("src/a.cc")).is_empty());
}

#[cfg(unix)]
#[test]
fn failing_tool_yields_exactly_one_diagnostic() {
    let dir = tempfile::tempdir().unwrap();
    write_tool(dir.path(), "tools/fix_guards", 1);

    let env = HostEnv::detect(dir.path());
    let check = ToolCheck::from_config("guards", &tool_config("tools/fix_guards"), &env).unwrap();

    let result = check.run(&single_file("src/a.cc"));
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].message, "tools/fix_guards failed.");
}

#[cfg(unix)]
#[test]
fn configured_message_replaces_the_generic_one() {
    let dir = tempfile::tempdir().unwrap();
    write_tool(dir.path(), "tools/fix_guards", 1);

    let mut config = tool_config("tools/fix_guards");
    config.message = Some("Please run tools/fix_guards.".to_string());

    let env = HostEnv::detect(dir.path());
    let check = ToolCheck::from_config("guards", &config, &env).unwrap();

    let result = check.run(&single_file("src/a.cc"));
    assert_eq!(result[0].message, "Please run tools/fix_guards.");
}

#[cfg(unix)]
#[test]
fn tool_path_self_tracks() {
    let dir = tempfile::tempdir().unwrap();
    write_tool(dir.path(), "tools/fix_guards", 1);

    let env = HostEnv::detect(dir.path());
    let check = ToolCheck::from_config("guards", &tool_config("tools/fix_guards"), &env).unwrap();

    // Only the tool itself changed; the check still runs.
    let result = check.run(&single_file("tools/fix_guards"));
    assert_eq!(result.len(), 1);
}

#[test]
fn launch_failure_is_one_diagnostic_not_an_abort() {
    let dir = tempfile::tempdir().unwrap();
    let env = HostEnv::detect(dir.path());
    let check = ToolCheck::from_config("guards", &tool_config("tools/missing"), &env).unwrap();

    let result = check.run(&single_file("src/a.cc"));
    assert_eq!(result.len(), 1);
    assert!(result[0].message.contains("could not be run"));
}
