use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SubmitGuardError};

/// Default config file name, looked up in the repository root.
pub const CONFIG_FILE_NAME: &str = "submit-guard.toml";

const DEFAULT_MAX_LINE_LENGTH: usize = 80;
const DEFAULT_TOOL_TIMEOUT_SECS: u64 = 60;

/// Top-level configuration.
///
/// Every section has defaults mirroring the built-in check tables, so an
/// absent or empty config file yields the stock pipeline. A `[tools]` table
/// in a config file replaces the default tool table wholesale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub line: LineConfig,
    pub include_paths: IncludePathConfig,
    pub gn: GnConfig,

    /// Extra pattern rules, appended after the built-in tables `[[pattern]]`.
    #[serde(rename = "pattern")]
    pub patterns: Vec<PatternRuleConfig>,

    /// Call-site specific bans, appended after the built-in table `[[bad_pattern]]`.
    #[serde(rename = "bad_pattern")]
    pub bad_patterns: Vec<BadPatternConfig>,

    /// External validators, run in declaration order `[tools.<name>]`.
    pub tools: IndexMap<String, ToolConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            line: LineConfig::default(),
            include_paths: IncludePathConfig::default(),
            gn: GnConfig::default(),
            patterns: Vec::new(),
            bad_patterns: Vec::new(),
            tools: default_tools(),
        }
    }
}

impl Config {
    /// Load configuration from an explicit path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let text =
            std::fs::read_to_string(path).map_err(|source| SubmitGuardError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(toml::from_str(&text)?)
    }

    /// Load `submit-guard.toml` from the repository root if present,
    /// defaults otherwise.
    ///
    /// # Errors
    /// Returns an error if a present config file cannot be read or parsed.
    pub fn discover(repo_root: &Path) -> Result<Self> {
        let candidate = repo_root.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Commented starter config written by `submit-guard init`.
    #[must_use]
    pub fn template() -> String {
        TEMPLATE.to_string()
    }
}

/// Long-line check settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LineConfig {
    /// Maximum line length in characters.
    pub max_length: usize,

    /// Files exempt from the long-line check (full-match regex). Formats in
    /// this list have no way to wrap long lines.
    pub exempt: Vec<String>,
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LINE_LENGTH,
            exempt: default_line_exempt(),
        }
    }
}

/// Include-path check settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct IncludePathConfig {
    /// Root prefixes a quoted `#include` path must not repeat.
    pub redundant_roots: Vec<String>,
}

impl Default for IncludePathConfig {
    fn default() -> Self {
        Self {
            redundant_roots: vec!["include/".to_string()],
        }
    }
}

/// GN absolute-path check settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GnConfig {
    /// Build files under these roots (full-match regex) may reference
    /// absolute `//` labels.
    pub allowed_roots: Vec<String>,
}

impl Default for GnConfig {
    fn default() -> Self {
        Self {
            allowed_roots: vec![
                r"\.gn".to_string(),
                r"gn/.*".to_string(),
                r"buildtools/.*".to_string(),
            ],
        }
    }
}

/// One extra pattern rule `[[pattern]]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PatternRuleConfig {
    /// Expression searched in changed-line text.
    pub regex: String,

    /// Shown to the author when the expression matches.
    pub message: String,

    /// Files the rule applies to (full-match regex).
    #[serde(default = "default_source_files")]
    pub files: Vec<String>,

    #[serde(default)]
    pub exclude: Vec<String>,

    /// Evaluate the rule against comment lines too.
    #[serde(default)]
    pub scan_comments: bool,
}

/// One extra call-site ban `[[bad_pattern]]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BadPatternConfig {
    /// File the ban is scoped to (full-match regex).
    pub file: String,
    pub regex: String,
    pub message: String,
}

/// One external validator `[tools.<name>]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolConfig {
    /// Repository-relative program path. The path self-tracks: a change to
    /// the tool re-runs its check.
    pub program: String,

    /// Arguments, including the tool's check-only flag.
    #[serde(default)]
    pub args: Vec<String>,

    /// Files that trigger the tool (full-match regex).
    pub files: Vec<String>,

    /// Override for the generic "<tool> failed." diagnostic.
    #[serde(default)]
    pub message: Option<String>,

    #[serde(default = "default_tool_timeout")]
    pub timeout_secs: u64,
}

fn default_source_files() -> Vec<String> {
    vec![r".*\.h$".to_string(), r".*\.cc$".to_string()]
}

const fn default_tool_timeout() -> u64 {
    DEFAULT_TOOL_TIMEOUT_SECS
}

fn default_line_exempt() -> Vec<String> {
    [
        r".*\.json$",
        r".*\.sql$",
        r".*\.out$",
        r"(.*/)?BUILD$",
        r"WORKSPACE",
        r".*/Makefile$",
        r".*\.lock$",
    ]
    .iter()
    .map(ToString::to_string)
    .collect()
}

fn default_tools() -> IndexMap<String, ToolConfig> {
    let mut tools = IndexMap::new();
    tools.insert(
        "include_guards".to_string(),
        ToolConfig {
            program: "tools/fix_include_guards".to_string(),
            args: vec!["--check-only".to_string()],
            files: default_source_files(),
            message: Some(
                "Please run tools/fix_include_guards to fix the include guards.".to_string(),
            ),
            timeout_secs: DEFAULT_TOOL_TIMEOUT_SECS,
        },
    );
    tools.insert(
        "include_violations".to_string(),
        ToolConfig {
            program: "tools/check_include_violations".to_string(),
            args: Vec::new(),
            files: vec![r"include/.*\.h$".to_string()],
            message: None,
            timeout_secs: DEFAULT_TOOL_TIMEOUT_SECS,
        },
    );
    tools.insert(
        "proto_comments".to_string(),
        ToolConfig {
            program: "tools/check_proto_comments".to_string(),
            args: Vec::new(),
            files: vec![r"protos/.*\.proto$".to_string()],
            message: None,
            timeout_secs: DEFAULT_TOOL_TIMEOUT_SECS,
        },
    );
    tools.insert(
        "merged_protos".to_string(),
        ToolConfig {
            program: "tools/gen_merged_protos".to_string(),
            args: vec!["--check-only".to_string()],
            files: vec![r"protos/.*\.proto$".to_string()],
            message: Some(
                "The merged proto descriptors are out of date. Please run \
                 tools/gen_merged_protos to update them."
                    .to_string(),
            ),
            timeout_secs: DEFAULT_TOOL_TIMEOUT_SECS,
        },
    );
    tools.insert(
        "sql_modules".to_string(),
        ToolConfig {
            program: "tools/check_sql_modules.py".to_string(),
            args: Vec::new(),
            files: vec![r"sql/stdlib/.*\.sql$".to_string()],
            message: None,
            timeout_secs: DEFAULT_TOOL_TIMEOUT_SECS,
        },
    );
    tools.insert(
        "sql_metrics".to_string(),
        ToolConfig {
            program: "tools/check_sql_metrics.py".to_string(),
            args: Vec::new(),
            files: vec![r"sql/metrics/.*\.sql$".to_string()],
            message: None,
            timeout_secs: DEFAULT_TOOL_TIMEOUT_SECS,
        },
    );
    tools
}

const TEMPLATE: &str = r##"# submit-guard configuration.
# Every section is optional; omitted sections keep their defaults.

[line]
# Maximum line length in characters.
max_length = 80
# Files exempt from the long-line check (full-match regex).
# exempt = [".*\\.json$", ".*\\.sql$"]

[include_paths]
# Root prefixes a quoted #include path must not repeat.
redundant_roots = ["include/"]

[gn]
# Build files under these roots may reference absolute // labels.
allowed_roots = ["\\.gn", "gn/.*", "buildtools/.*"]

# Extra pattern rules, appended after the built-in tables.
# [[pattern]]
# regex = "\\bassert\\("
# message = "assert() is compiled out in release builds, use CHECK()"
# files = [".*\\.h$", ".*\\.cc$"]
# scan_comments = false

# Call-site specific bans.
# [[bad_pattern]]
# file = ".*/trace_service\\.cc$"
# regex = "\\bexit\\("
# message = "The service must shut down cleanly, use Quit()"

# External validators, invoked in check-only mode in declaration order.
# Defining any [tools.*] entry replaces the default tool table.
# [tools.include_guards]
# program = "tools/fix_include_guards"
# args = ["--check-only"]
# files = [".*\\.h$", ".*\\.cc$"]
# message = "Please run tools/fix_include_guards to fix the include guards."
# timeout_secs = 60
"##;

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
