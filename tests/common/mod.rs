#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the submit-guard binary.
#[macro_export]
macro_rules! submit_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("submit-guard"))
    };
}

/// Temporary repository root for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates an executable companion tool that exits with the given code.
    #[cfg(unix)]
    pub fn create_tool(&self, relative_path: &str, exit_code: i32) {
        use std::os::unix::fs::PermissionsExt;

        self.create_file(relative_path, &format!("#!/bin/sh\nexit {exit_code}\n"));
        let path = self.dir.path().join(relative_path);
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to mark tool executable");
    }

    /// Writes a unified diff adding the given lines to one file and returns
    /// the diff file's path.
    pub fn create_diff(&self, name: &str, target: &str, lines: &[&str]) -> String {
        let mut diff = format!(
            "diff --git a/{target} b/{target}\n--- a/{target}\n+++ b/{target}\n@@ -0,0 +1,{} @@\n",
            lines.len()
        );
        for line in lines {
            diff.push('+');
            diff.push_str(line);
            diff.push('\n');
        }
        self.create_file(name, &diff);
        self.dir.path().join(name).display().to_string()
    }
}
