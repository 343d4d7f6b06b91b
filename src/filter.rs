use regex::Regex;

use crate::change::{AffectedFile, Change};
use crate::error::{Result, SubmitGuardError};

/// Include/exclude predicate over normalized repository-relative paths.
///
/// Patterns are full-match regular expressions tested against the whole path,
/// case-sensitively. A path is accepted when no exclude pattern matches and
/// at least one include pattern does; exclude wins unconditionally. An empty
/// include set accepts nothing.
#[derive(Debug, Clone)]
pub struct PathFilter {
    include: Vec<Regex>,
    exclude: Vec<Regex>,
}

impl PathFilter {
    /// Compile a filter from include and exclude pattern lists.
    ///
    /// # Errors
    /// Returns an error if any pattern is not a valid regular expression.
    pub fn new<S: AsRef<str>>(include: &[S], exclude: &[S]) -> Result<Self> {
        Ok(Self {
            include: compile_all(include)?,
            exclude: compile_all(exclude)?,
        })
    }

    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        if self.exclude.iter().any(|pattern| pattern.is_match(path)) {
            return false;
        }
        self.include.iter().any(|pattern| pattern.is_match(path))
    }

    /// The subset of the change's files this filter accepts, in change order.
    #[must_use]
    pub fn apply<'c>(&self, change: &'c Change) -> Vec<&'c AffectedFile> {
        change
            .files()
            .iter()
            .filter(|file| self.matches(file.path()))
            .collect()
    }
}

fn compile_all<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|pattern| compile_anchored(pattern.as_ref()))
        .collect()
}

fn compile_anchored(pattern: &str) -> Result<Regex> {
    Regex::new(&format!("^(?:{pattern})$")).map_err(|source| SubmitGuardError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
