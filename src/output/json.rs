use serde::Serialize;

use crate::error::Result;
use crate::report::{Diagnostic, Report};

use super::OutputFormatter;

#[derive(Serialize)]
struct JsonReport<'a> {
    errors: usize,
    diagnostics: &'a [Diagnostic],
}

/// Machine-readable rendering for host integrations.
#[derive(Debug, Clone, Copy)]
pub struct JsonFormatter {
    pretty: bool,
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    #[must_use]
    pub const fn compact() -> Self {
        Self { pretty: false }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let payload = JsonReport {
            errors: report.error_count(),
            diagnostics: &report.diagnostics,
        };
        let mut rendered = if self.pretty {
            serde_json::to_string_pretty(&payload)?
        } else {
            serde_json::to_string(&payload)?
        };
        rendered.push('\n');
        Ok(rendered)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
