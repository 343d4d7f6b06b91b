mod canned;
mod pattern;
mod rules;
mod structural;
mod tool;

pub use canned::{DoNotSubmitCheck, LongLineCheck, NoTabsCheck};
pub use pattern::{PatternCheck, PatternRule, RuleGroup};
pub use rules::{bad_patterns, banned_patterns};
pub use structural::{GnAbsolutePathCheck, IncludePathCheck};
pub use tool::ToolCheck;

use crate::change::Change;
use crate::config::Config;
use crate::error::Result;
use crate::host::HostEnv;
use crate::report::CheckResult;

/// An independent verification unit mapping a change to zero or more
/// diagnostics.
///
/// Checks must not mutate the change and must not retain diagnostics after
/// returning them. An empty result means the check passed.
pub trait Check: Send + Sync {
    /// Stable name used in logs and fault diagnostics.
    fn name(&self) -> &str;

    fn run(&self, change: &Change) -> CheckResult;
}

/// Build the default registry in pipeline order.
///
/// # Errors
/// Returns an error if a configured pattern does not compile.
pub fn default_checks(config: &Config, env: &HostEnv) -> Result<Vec<Box<dyn Check>>> {
    let mut checks: Vec<Box<dyn Check>> = vec![
        Box::new(DoNotSubmitCheck::new()?),
        Box::new(NoTabsCheck::new()?),
        Box::new(LongLineCheck::new(config)?),
        Box::new(banned_patterns(config)?),
        Box::new(bad_patterns(config)?),
        Box::new(IncludePathCheck::new(config)?),
        Box::new(GnAbsolutePathCheck::new(config)?),
    ];

    for (name, tool) in &config.tools {
        checks.push(Box::new(ToolCheck::from_config(name, tool, env)?));
    }

    Ok(checks)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
