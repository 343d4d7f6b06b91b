use std::path::{Path, PathBuf};

/// Capabilities of the host the pipeline runs on.
///
/// Built once per run and handed to the registry. Checks that spawn companion
/// tools query this descriptor instead of probing the platform themselves; a
/// host without subprocess capability makes those checks return empty results
/// rather than errors.
#[derive(Debug, Clone)]
pub struct HostEnv {
    repo_root: PathBuf,
    can_spawn_tools: bool,
}

impl HostEnv {
    /// Detect capabilities for the current platform.
    ///
    /// The companion validators are repository scripts; they cannot be
    /// invoked on Windows hosts.
    #[must_use]
    pub fn detect(repo_root: impl Into<PathBuf>) -> Self {
        Self {
            repo_root: repo_root.into(),
            can_spawn_tools: !cfg!(windows),
        }
    }

    /// Mask subprocess capability, e.g. for `--no-tools` or in tests.
    #[must_use]
    pub const fn without_tools(mut self) -> Self {
        self.can_spawn_tools = false;
        self
    }

    #[must_use]
    pub const fn can_spawn_tools(&self) -> bool {
        self.can_spawn_tools
    }

    #[must_use]
    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }
}

#[cfg(test)]
#[path = "host_tests.rs"]
mod tests;
