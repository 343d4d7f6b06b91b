use regex::Regex;

use crate::change::Change;
use crate::error::{Result, SubmitGuardError};
use crate::filter::PathFilter;
use crate::report::{CheckResult, Diagnostic};

use super::Check;

/// An expression/message pair applied to changed-line text.
///
/// Rules skip comment lines unless `scanning_comments` is set; that attribute
/// exists for rules whose purpose is to scan comment content (e.g. a
/// do-not-ship marker), which the suppression would otherwise hide.
#[derive(Debug, Clone)]
pub struct PatternRule {
    regex: Regex,
    message: String,
    scans_comments: bool,
}

impl PatternRule {
    /// # Errors
    /// Returns an error if `pattern` is not a valid regular expression.
    pub fn new(pattern: &str, message: impl Into<String>) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|source| SubmitGuardError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self {
            regex,
            message: message.into(),
            scans_comments: false,
        })
    }

    /// Evaluate this rule against comment lines too.
    #[must_use]
    pub const fn scanning_comments(mut self) -> Self {
        self.scans_comments = true;
        self
    }
}

/// Rules sharing one file filter.
#[derive(Debug)]
pub struct RuleGroup {
    filter: PathFilter,
    rules: Vec<PatternRule>,
}

impl RuleGroup {
    #[must_use]
    pub const fn new(filter: PathFilter, rules: Vec<PatternRule>) -> Self {
        Self { filter, rules }
    }
}

/// Generic scan of changed lines against grouped pattern rules.
///
/// Comment suppression is a heuristic: a line whose stripped text starts with
/// the line-comment marker is a comment; block comments and trailing inline
/// comments are not detected.
pub struct PatternCheck {
    name: String,
    comment_marker: String,
    groups: Vec<RuleGroup>,
}

impl PatternCheck {
    #[must_use]
    pub fn new(name: impl Into<String>, groups: Vec<RuleGroup>) -> Self {
        Self {
            name: name.into(),
            comment_marker: "//".to_string(),
            groups,
        }
    }

    #[must_use]
    pub fn with_comment_marker(mut self, marker: impl Into<String>) -> Self {
        self.comment_marker = marker.into();
        self
    }
}

impl Check for PatternCheck {
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&self, change: &Change) -> CheckResult {
        let mut diagnostics = Vec::new();

        for file in change.files() {
            let groups: Vec<&RuleGroup> = self
                .groups
                .iter()
                .filter(|group| group.filter.matches(file.path()))
                .collect();
            if groups.is_empty() {
                continue;
            }

            for line in file.changed_lines() {
                let is_comment = line
                    .content
                    .trim_start()
                    .starts_with(self.comment_marker.as_str());

                for group in &groups {
                    for rule in &group.rules {
                        if is_comment && !rule.scans_comments {
                            continue;
                        }
                        if rule.regex.is_match(&line.content) {
                            diagnostics.push(Diagnostic::error_at(
                                format!("{}:{} {}", file.path(), line.number, rule.message),
                                file.path(),
                                line.number,
                            ));
                        }
                    }
                }
            }
        }

        diagnostics
    }
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
