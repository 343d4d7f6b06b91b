use std::fmt::Write;

use crate::error::Result;
use crate::report::{Report, Severity};

use super::OutputFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let mut out = String::new();

        if report.is_empty() {
            writeln!(
                out,
                "{} All presubmit checks passed.",
                self.paint(ansi::GREEN, "✓")
            )
            .ok();
            return Ok(out);
        }

        for diagnostic in report {
            let tag = match diagnostic.severity {
                Severity::Error => self.paint(ansi::RED, "error"),
                Severity::Warning => self.paint(ansi::YELLOW, "warning"),
            };
            writeln!(out, "{tag}: {}", diagnostic.message).ok();
        }

        let errors = report.error_count();
        writeln!(
            out,
            "\n{} presubmit error{} found.",
            errors,
            if errors == 1 { "" } else { "s" }
        )
        .ok();

        Ok(out)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
