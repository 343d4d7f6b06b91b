use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

use rayon::prelude::*;
use tracing::warn;

use crate::change::Change;
use crate::checks::Check;
use crate::report::{CheckResult, Diagnostic, Report};

const SLOW_CHECK_THRESHOLD: Duration = Duration::from_secs(3);

/// Ordered check pipeline.
///
/// Checks share nothing but the read-only change, so the parallel mode runs
/// one task per check on the rayon pool and still merges results in
/// registration order; sequential and parallel runs produce identical
/// reports.
pub struct Runner {
    checks: Vec<Box<dyn Check>>,
    slow_threshold: Duration,
    parallel: bool,
}

impl Runner {
    #[must_use]
    pub fn new(checks: Vec<Box<dyn Check>>) -> Self {
        Self {
            checks,
            slow_threshold: SLOW_CHECK_THRESHOLD,
            parallel: false,
        }
    }

    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    #[must_use]
    pub const fn with_slow_threshold(mut self, threshold: Duration) -> Self {
        self.slow_threshold = threshold;
        self
    }

    /// Run every check in registration order and concatenate their
    /// diagnostics.
    #[must_use]
    pub fn run_all(&self, change: &Change) -> Report {
        let results: Vec<CheckResult> = if self.parallel {
            // collect() on an indexed parallel iterator preserves order.
            self.checks
                .par_iter()
                .map(|check| self.run_one(check.as_ref(), change))
                .collect()
        } else {
            self.checks
                .iter()
                .map(|check| self.run_one(check.as_ref(), change))
                .collect()
        };
        Report::from_results(results)
    }

    /// Upload-time entry point; the same gate as [`Self::on_commit`].
    #[must_use]
    pub fn on_upload(&self, change: &Change) -> Report {
        self.run_all(change)
    }

    /// Commit-time entry point; the same gate as [`Self::on_upload`].
    #[must_use]
    pub fn on_commit(&self, change: &Change) -> Report {
        self.run_all(change)
    }

    fn run_one(&self, check: &dyn Check, change: &Change) -> CheckResult {
        let start = Instant::now();

        // One faulty check must never prevent the others from reporting.
        let result = panic::catch_unwind(AssertUnwindSafe(|| check.run(change)))
            .unwrap_or_else(|_| {
                vec![Diagnostic::error(format!(
                    "{} aborted unexpectedly, treating it as failed",
                    check.name()
                ))]
            });

        let elapsed = start.elapsed();
        if elapsed > self.slow_threshold {
            warn!(
                check = check.name(),
                elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
                "slow check"
            );
        }

        result
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
