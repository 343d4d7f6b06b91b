//! Structural checks that batch all violations into one diagnostic.
//!
//! Unlike the pattern engine, these collect every offending `(path, line)`
//! and emit at most one aggregated diagnostic per run, enumerating them all.

use regex::Regex;

use crate::change::Change;
use crate::config::Config;
use crate::error::{Result, SubmitGuardError};
use crate::filter::PathFilter;
use crate::report::{CheckResult, Diagnostic};

use super::Check;
use super::rules::SOURCE_FILES;

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| SubmitGuardError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Flags quoted `#include` directives whose path is relative (no `/`) or
/// redundantly repeats a configured root prefix.
pub struct IncludePathCheck {
    filter: PathFilter,
    include_directive: Regex,
    redundant_roots: Vec<String>,
}

impl IncludePathCheck {
    /// # Errors
    /// Returns an error if a configured pattern does not compile.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            filter: PathFilter::new(SOURCE_FILES, &[])?,
            include_directive: compile(r#"^#include "(.*\.h)""#)?,
            redundant_roots: config.include_paths.redundant_roots.clone(),
        })
    }
}

impl Check for IncludePathCheck {
    fn name(&self) -> &str {
        "include-paths"
    }

    fn run(&self, change: &Change) -> CheckResult {
        let mut violations = Vec::new();

        for file in self.filter.apply(change) {
            for line in file.changed_lines() {
                let Some(captures) = self.include_directive.captures(&line.content) else {
                    continue;
                };
                let header = &captures[1];

                if let Some(root) = self
                    .redundant_roots
                    .iter()
                    .find(|root| header.starts_with(root.as_str()))
                {
                    violations.push(format!(
                        "  {}:{}: Redundant \"{root}\" prefix in #include path",
                        file.path(),
                        line.number
                    ));
                }
                if !header.contains('/') {
                    violations.push(format!(
                        "  {}:{}: relative #include not allowed, use full path",
                        file.path(),
                        line.number
                    ));
                }
            }
        }

        if violations.is_empty() {
            return Vec::new();
        }
        vec![Diagnostic::error(format!(
            "Invalid #include paths detected:\n{}",
            violations.join("\n")
        ))]
    }
}

/// Flags absolute `//` labels in GN build files outside allow-listed roots.
///
/// Full-comment lines and lines annotated `# nogncheck` are skipped.
pub struct GnAbsolutePathCheck {
    filter: PathFilter,
    skip: Regex,
    absolute_label: Regex,
}

impl GnAbsolutePathCheck {
    /// # Errors
    /// Returns an error if a configured pattern does not compile.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            filter: PathFilter::new(
                &[r".*\.gni?$".to_string()],
                &config.gn.allowed_roots,
            )?,
            skip: compile(r"(^\s*[#])|([#]\s*nogncheck)")?,
            absolute_label: compile(r#""//[^"]"#)?,
        })
    }
}

impl Check for GnAbsolutePathCheck {
    fn name(&self) -> &str {
        "gn-absolute-paths"
    }

    fn run(&self, change: &Change) -> CheckResult {
        let mut violations = Vec::new();

        for file in self.filter.apply(change) {
            for line in file.changed_lines() {
                if self.skip.is_match(&line.content) {
                    continue;
                }
                if self.absolute_label.is_match(&line.content) {
                    violations.push(format!(
                        "  {}:{}: {}",
                        file.path(),
                        line.number,
                        line.content.trim()
                    ));
                }
            }
        }

        if violations.is_empty() {
            return Vec::new();
        }
        vec![Diagnostic::error(format!(
            "Use relative paths in GN rather than absolute:\n{}",
            violations.join("\n")
        ))]
    }
}

#[cfg(test)]
#[path = "structural_tests.rs"]
mod tests;
