use std::path::PathBuf;
use std::time::Duration;

use tracing::debug;

use crate::change::Change;
use crate::config::ToolConfig;
use crate::error::Result;
use crate::exec::{self, CommandSpec};
use crate::filter::PathFilter;
use crate::host::HostEnv;
use crate::report::{CheckResult, Diagnostic};

use super::Check;

/// Runs a companion validator in check-only mode and maps its exit status to
/// pass/fail.
///
/// The check-only flag lives in `args`, so the invocation is idempotent: the
/// tool verifies without mutating repository state. Stdout is captured but
/// never parsed; the verdict is coarse-grained by design since the tools are
/// independently testable. The tool's own path is part of the include set, so
/// a change to the checker re-runs it.
pub struct ToolCheck {
    name: String,
    program: String,
    args: Vec<String>,
    filter: PathFilter,
    failure_message: Option<String>,
    timeout: Duration,
    repo_root: PathBuf,
    tools_enabled: bool,
}

impl ToolCheck {
    /// # Errors
    /// Returns an error if a configured file pattern does not compile.
    pub fn from_config(name: &str, config: &ToolConfig, env: &HostEnv) -> Result<Self> {
        let mut include = config.files.clone();
        include.push(regex::escape(&config.program));

        Ok(Self {
            name: name.to_string(),
            program: config.program.clone(),
            args: config.args.clone(),
            filter: PathFilter::new(&include, &[])?,
            failure_message: config.message.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
            repo_root: env.repo_root().to_path_buf(),
            tools_enabled: env.can_spawn_tools(),
        })
    }

    fn failure_text(&self, timed_out: bool) -> String {
        if timed_out {
            return format!(
                "{} timed out after {}s.",
                self.program,
                self.timeout.as_secs()
            );
        }
        self.failure_message
            .clone()
            .unwrap_or_else(|| format!("{} failed.", self.program))
    }
}

impl Check for ToolCheck {
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&self, change: &Change) -> CheckResult {
        // A host that cannot spawn subprocesses skips the check entirely;
        // this is a capability gap, not a failure.
        if !self.tools_enabled {
            return Vec::new();
        }
        if self.filter.apply(change).is_empty() {
            return Vec::new();
        }

        let spec = CommandSpec::new(self.repo_root.join(&self.program))
            .args(self.args.clone())
            .current_dir(&self.repo_root);

        match exec::run(&spec, self.timeout) {
            Ok(outcome) if outcome.success() => Vec::new(),
            Ok(outcome) => {
                debug!(
                    tool = %self.program,
                    exit_code = ?outcome.exit_code,
                    stderr = %outcome.stderr.trim(),
                    "validator failed"
                );
                vec![Diagnostic::error(self.failure_text(outcome.timed_out))]
            }
            // Launch failures are reported like a non-zero exit so one broken
            // tool never prevents the other checks from reporting.
            Err(err) => vec![Diagnostic::error(format!(
                "{} could not be run: {err}",
                self.program
            ))],
        }
    }
}

#[cfg(test)]
#[path = "tool_tests.rs"]
mod tests;
