use crate::error::{Result, SubmitGuardError};

/// One added or modified line of an affected file.
///
/// `number` is 1-based in the post-change file; `content` carries no trailing
/// line terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangedLine {
    pub number: u32,
    pub content: String,
}

impl ChangedLine {
    #[must_use]
    pub fn new(number: u32, content: impl Into<String>) -> Self {
        let content = content.into();
        let content = content.trim_end_matches(['\r', '\n']).to_string();
        Self { number, content }
    }
}

/// A file touched by the change, carrying only the lines actually added or
/// modified, not the full file content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffectedFile {
    path: String,
    lines: Vec<ChangedLine>,
}

impl AffectedFile {
    /// Create an affected file, normalizing the path to forward slashes.
    ///
    /// # Errors
    /// Returns an error if the path is empty or absolute, or if line numbers
    /// are not 1-based and strictly increasing.
    pub fn new(path: impl Into<String>, lines: Vec<ChangedLine>) -> Result<Self> {
        let path = normalize_path(&path.into())?;

        let mut previous = 0u32;
        for line in &lines {
            if line.number == 0 || line.number <= previous {
                return Err(SubmitGuardError::LineOrder { path });
            }
            previous = line.number;
        }

        Ok(Self { path, lines })
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn changed_lines(&self) -> &[ChangedLine] {
        &self.lines
    }
}

fn normalize_path(raw: &str) -> Result<String> {
    let forward = raw.replace('\\', "/");
    let trimmed = forward.strip_prefix("./").unwrap_or(&forward);

    if trimmed.is_empty() || trimmed.starts_with('/') {
        return Err(SubmitGuardError::InvalidPath {
            path: raw.to_string(),
        });
    }

    Ok(trimmed.to_string())
}

/// Immutable snapshot of a proposed change.
///
/// Owned by the host and passed by read-only reference to every check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Change {
    files: Vec<AffectedFile>,
}

impl Change {
    /// Create a change from the affected files.
    ///
    /// # Errors
    /// Returns an error if the same path appears more than once.
    pub fn new(files: Vec<AffectedFile>) -> Result<Self> {
        let mut seen = std::collections::HashSet::new();
        for file in &files {
            if !seen.insert(file.path()) {
                return Err(SubmitGuardError::DuplicateFile {
                    path: file.path().to_string(),
                });
            }
        }
        Ok(Self { files })
    }

    #[must_use]
    pub fn files(&self) -> &[AffectedFile] {
        &self.files
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
#[path = "change_tests.rs"]
mod tests;
