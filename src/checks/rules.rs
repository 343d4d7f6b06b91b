//! Built-in rule tables for C and C++ sources.
//!
//! Both tables are declarative data feeding [`PatternCheck`]; config entries
//! append to them.

use crate::config::Config;
use crate::error::Result;
use crate::filter::PathFilter;

use super::pattern::{PatternCheck, PatternRule, RuleGroup};

pub(crate) const SOURCE_FILES: &[&str] = &[r".*\.h$", r".*\.cc$"];

/// Repository-wide banned constructs over header and source files.
///
/// # Errors
/// Returns an error if a configured pattern does not compile.
pub fn banned_patterns(config: &Config) -> Result<PatternCheck> {
    let rules = vec![
        PatternRule::new(
            r"\bstd::stoi\b",
            "std::stoi throws exceptions, prefer base::StringToInt32()",
        )?,
        PatternRule::new(
            r"\bstd::stol\b",
            "std::stol throws exceptions, prefer base::StringToInt32()",
        )?,
        PatternRule::new(
            r"\bstd::stoul\b",
            "std::stoul throws exceptions, prefer base::StringToUint32()",
        )?,
        PatternRule::new(
            r"\bstd::stoll\b",
            "std::stoll throws exceptions, prefer base::StringToInt64()",
        )?,
        PatternRule::new(
            r"\bstd::stoull\b",
            "std::stoull throws exceptions, prefer base::StringToUint64()",
        )?,
        PatternRule::new(
            r"\bstd::stof\b",
            "std::stof throws exceptions, prefer base::StringToDouble()",
        )?,
        PatternRule::new(
            r"\bstd::stod\b",
            "std::stod throws exceptions, prefer base::StringToDouble()",
        )?,
        PatternRule::new(
            r"\bstd::stold\b",
            "std::stold throws exceptions, prefer base::StringToDouble()",
        )?,
        PatternRule::new(
            r"\bstrncpy\b",
            "strncpy does not null-terminate if src > dst, use base::StringCopy()",
        )?,
        PatternRule::new(
            r"[(=]\s*snprintf\(",
            "snprintf can return > dst_size, use base::SprintfTrunc()",
        )?,
        PatternRule::new(
            r"//.*\bDNS\b",
            "// DNS (Do Not Ship) found, did you mean to remove some testing code?",
        )?
        .scanning_comments(),
        PatternRule::new(
            r"\bHANDLE_EINTR\(close\(",
            "close(2) must not be retried on EINTR, the descriptor is already gone",
        )?,
        PatternRule::new(
            r"^#include <inttypes.h>",
            "Use <cinttypes> rather than <inttypes.h>",
        )?,
    ];

    let mut groups = vec![RuleGroup::new(PathFilter::new(SOURCE_FILES, &[])?, rules)];

    for extra in &config.patterns {
        let mut rule = PatternRule::new(&extra.regex, &extra.message)?;
        if extra.scan_comments {
            rule = rule.scanning_comments();
        }
        groups.push(RuleGroup::new(
            PathFilter::new(&extra.files, &extra.exclude)?,
            vec![rule],
        ));
    }

    Ok(PatternCheck::new("banned-patterns", groups))
}

/// Narrower bans scoped to individual call sites, one filter per entry.
///
/// # Errors
/// Returns an error if a configured pattern does not compile.
pub fn bad_patterns(config: &Config) -> Result<PatternCheck> {
    let builtin: &[(&str, &str, &str)] = &[(
        r".*/trace_service\.cc$",
        r"\btrigger_config\(\)",
        "Use GetTriggerMode(session->config) rather than .trigger_config()",
    )];

    let mut groups = Vec::new();
    for &(file, pattern, message) in builtin {
        groups.push(RuleGroup::new(
            PathFilter::new(&[file], &[])?,
            vec![PatternRule::new(pattern, message)?],
        ));
    }
    for extra in &config.bad_patterns {
        groups.push(RuleGroup::new(
            PathFilter::new(std::slice::from_ref(&extra.file), &[])?,
            vec![PatternRule::new(&extra.regex, &extra.message)?],
        ));
    }

    Ok(PatternCheck::new("bad-patterns", groups))
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
