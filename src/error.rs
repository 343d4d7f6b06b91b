use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubmitGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid filter pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid path in change: {path}")]
    InvalidPath { path: String },

    #[error("File listed twice in change: {path}")]
    DuplicateFile { path: String },

    #[error("Changed line numbers must be 1-based and strictly increasing: {path}")]
    LineOrder { path: String },

    #[error("Malformed diff hunk header: {0}")]
    MalformedHunk(String),

    #[error("Failed to launch {program}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Git error: {0}")]
    Git(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SubmitGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
