//! Line checks every change goes through regardless of the rule tables.

use crate::change::Change;
use crate::config::Config;
use crate::error::Result;
use crate::filter::PathFilter;
use crate::report::{CheckResult, Diagnostic};

use super::Check;

/// Flags the do-not-submit marker anywhere in a changed line, comments
/// included.
pub struct DoNotSubmitCheck {
    filter: PathFilter,
    marker: String,
}

impl DoNotSubmitCheck {
    /// # Errors
    /// Returns an error if the filter fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            filter: PathFilter::new(&[".*"], &[])?,
            // Assembled at runtime so the gate never flags its own source.
            marker: ["DO NOT ", "SUBMIT"].concat(),
        })
    }
}

impl Check for DoNotSubmitCheck {
    fn name(&self) -> &str {
        "do-not-submit"
    }

    fn run(&self, change: &Change) -> CheckResult {
        let mut diagnostics = Vec::new();
        for file in self.filter.apply(change) {
            for line in file.changed_lines() {
                if line.content.contains(&self.marker) {
                    diagnostics.push(Diagnostic::error_at(
                        format!(
                            "{}:{} '{}' marker found, resolve it before uploading",
                            file.path(),
                            line.number,
                            self.marker
                        ),
                        file.path(),
                        line.number,
                    ));
                }
            }
        }
        diagnostics
    }
}

/// Flags tab characters in changed lines of sources that indent with spaces.
pub struct NoTabsCheck {
    filter: PathFilter,
}

impl NoTabsCheck {
    /// # Errors
    /// Returns an error if the filter fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            filter: PathFilter::new(
                &[".*"],
                &[r"(.*/)?Makefile$", r".*\.mk$", r".*\.go$", r".*\.patch$"],
            )?,
        })
    }
}

impl Check for NoTabsCheck {
    fn name(&self) -> &str {
        "no-tabs"
    }

    fn run(&self, change: &Change) -> CheckResult {
        let mut diagnostics = Vec::new();
        for file in self.filter.apply(change) {
            for line in file.changed_lines() {
                if line.content.contains('\t') {
                    diagnostics.push(Diagnostic::error_at(
                        format!(
                            "{}:{} Tab characters are not allowed, use spaces",
                            file.path(),
                            line.number
                        ),
                        file.path(),
                        line.number,
                    ));
                }
            }
        }
        diagnostics
    }
}

/// Flags changed lines longer than the configured limit.
///
/// Formats that cannot wrap (the exemption list) are filtered out entirely,
/// and a line whose text contains no space is left alone: an unbreakable
/// token such as a URL has no way to comply.
pub struct LongLineCheck {
    filter: PathFilter,
    max_length: usize,
}

impl LongLineCheck {
    /// # Errors
    /// Returns an error if a configured exemption pattern does not compile.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            filter: PathFilter::new(
                &[".*".to_string()],
                &config.line.exempt,
            )?,
            max_length: config.line.max_length,
        })
    }
}

impl Check for LongLineCheck {
    fn name(&self) -> &str {
        "long-lines"
    }

    fn run(&self, change: &Change) -> CheckResult {
        let mut diagnostics = Vec::new();
        for file in self.filter.apply(change) {
            for line in file.changed_lines() {
                if line.content.chars().count() <= self.max_length {
                    continue;
                }
                if !line.content.trim().contains(' ') {
                    continue;
                }
                diagnostics.push(Diagnostic::error_at(
                    format!(
                        "{}:{} Line exceeds {} characters",
                        file.path(),
                        line.number,
                        self.max_length
                    ),
                    file.path(),
                    line.number,
                ));
            }
        }
        diagnostics
    }
}

#[cfg(test)]
#[path = "canned_tests.rs"]
mod tests;
