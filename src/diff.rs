//! Unified-diff front end.
//!
//! Parses `git diff`-style unified output and keeps only the added or
//! modified lines together with their 1-based line numbers in the post-change
//! file. Context and removed lines only advance the counters.

use std::path::Path;
use std::time::Duration;

use indexmap::IndexMap;

use crate::change::{AffectedFile, Change, ChangedLine};
use crate::error::{Result, SubmitGuardError};
use crate::exec::{self, CommandSpec};

/// Parse a unified diff into a [`Change`].
///
/// # Errors
/// Returns an error on a malformed hunk header or when the resulting change
/// violates the model invariants (e.g. a file listed twice with overlapping
/// hunks).
pub fn parse_unified_diff(diff_text: &str) -> Result<Change> {
    let mut files: IndexMap<String, Vec<ChangedLine>> = IndexMap::new();
    let mut current_path: Option<String> = None;
    let mut new_line_no: u32 = 0;
    let mut in_hunk = false;

    for raw in diff_text.lines() {
        if raw.starts_with("diff --git ") {
            in_hunk = false;
            if let Some(path) = parse_git_header(raw) {
                current_path = Some(path);
            }
            continue;
        }

        if raw.starts_with("+++ ") {
            current_path = parse_new_file_marker(raw).or(current_path);
            continue;
        }

        if raw.starts_with("@@") {
            new_line_no = parse_hunk_header(raw)?;
            in_hunk = true;
            continue;
        }

        if !in_hunk {
            continue;
        }
        let Some(path) = current_path.as_deref() else {
            continue;
        };

        // "--- a/..." inside a hunk region and "\ No newline at end of file".
        if raw.starts_with("---") || raw.starts_with('\\') {
            continue;
        }

        match raw.as_bytes().first() {
            Some(b'+') => {
                files
                    .entry(path.to_string())
                    .or_default()
                    .push(ChangedLine::new(new_line_no, &raw[1..]));
                new_line_no = new_line_no.saturating_add(1);
            }
            Some(b' ') => {
                new_line_no = new_line_no.saturating_add(1);
            }
            _ => {}
        }
    }

    let affected = files
        .into_iter()
        .map(|(path, lines)| AffectedFile::new(path, lines))
        .collect::<Result<Vec<_>>>()?;
    Change::new(affected)
}

/// Build a change by diffing the working tree against `base` via `git`.
///
/// # Errors
/// Returns an error if git cannot be launched, exits non-zero, or outlives
/// `timeout`, or if its output cannot be parsed.
pub fn change_from_git(repo_root: &Path, base: &str, timeout: Duration) -> Result<Change> {
    let spec = CommandSpec::new("git")
        .args(["diff", "-U0", "--no-color", "--no-ext-diff", base])
        .current_dir(repo_root);
    let outcome = exec::run(&spec, timeout)?;

    if outcome.timed_out {
        return Err(SubmitGuardError::Git(format!(
            "git diff against {base} timed out"
        )));
    }
    if !outcome.success() {
        let detail = outcome.stderr.trim();
        return Err(SubmitGuardError::Git(if detail.is_empty() {
            format!("git diff against {base} failed")
        } else {
            detail.to_string()
        }));
    }

    parse_unified_diff(&outcome.stdout)
}

/// `@@ -1,2 +3,4 @@` or `@@ -1 +3 @@` -> 3
fn parse_hunk_header(line: &str) -> Result<u32> {
    let malformed = || SubmitGuardError::MalformedHunk(line.to_string());

    let plus = line.split_whitespace().nth(2).ok_or_else(malformed)?;
    let plus = plus.strip_prefix('+').ok_or_else(malformed)?;
    let start = plus.split(',').next().unwrap_or(plus);
    start.parse().map_err(|_| malformed())
}

/// `diff --git a/foo b/foo` -> `foo`
fn parse_git_header(line: &str) -> Option<String> {
    let new_side = line.split_whitespace().nth(3)?;
    strip_diff_prefix(new_side)
}

/// `+++ b/foo` -> `foo`; `+++ /dev/null` -> None
fn parse_new_file_marker(line: &str) -> Option<String> {
    let rest = line.strip_prefix("+++ ")?;
    let path = rest.split('\t').next().unwrap_or(rest);
    if path == "/dev/null" {
        return None;
    }
    strip_diff_prefix(path)
}

fn strip_diff_prefix(path: &str) -> Option<String> {
    let path = path.trim();
    let path = path
        .strip_prefix("a/")
        .or_else(|| path.strip_prefix("b/"))
        .unwrap_or(path);
    if path.is_empty() {
        None
    } else {
        Some(path.to_string())
    }
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;
