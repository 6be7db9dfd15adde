//! Engine configuration
//!
//! Defaults match the behaviour callers rely on. Every field can be
//! overridden from the environment:
//!
//! - `DESIGN_VCS_HISTORY_LIMIT`: default `limit` for history walks
//! - `DESIGN_VCS_DIFF_ALGORITHM`: `heuristic` (default) or `myers`
//! - `DESIGN_VCS_MAX_COMMIT_RETRIES`: lost head races tolerated per commit

use crate::artifacts::diff::line_diff::DiffAlgorithm;
use anyhow::Context;

pub const DEFAULT_HISTORY_LIMIT: usize = 50;
pub const DEFAULT_MAX_COMMIT_RETRIES: usize = 16;

pub const HISTORY_LIMIT_VAR: &str = "DESIGN_VCS_HISTORY_LIMIT";
pub const DIFF_ALGORITHM_VAR: &str = "DESIGN_VCS_DIFF_ALGORITHM";
pub const MAX_COMMIT_RETRIES_VAR: &str = "DESIGN_VCS_MAX_COMMIT_RETRIES";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Versions returned by a history walk when no limit is given
    pub history_limit: usize,
    /// Line diff used for modified files
    pub diff_algorithm: DiffAlgorithm,
    /// Attempts at advancing a branch head before giving up
    pub max_commit_retries: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            history_limit: DEFAULT_HISTORY_LIMIT,
            diff_algorithm: DiffAlgorithm::Heuristic,
            max_commit_retries: DEFAULT_MAX_COMMIT_RETRIES,
        }
    }
}

impl EngineConfig {
    /// Load configuration overrides from environment variables
    ///
    /// Unset variables keep their defaults, malformed ones are an error.
    pub fn load_from_env() -> anyhow::Result<Self> {
        Self::load_from(|name| std::env::var(name).ok())
    }

    fn load_from(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = EngineConfig::default();

        if let Some(limit) = lookup(HISTORY_LIMIT_VAR) {
            config.history_limit = limit
                .trim()
                .parse()
                .with_context(|| format!("{HISTORY_LIMIT_VAR} must be a number, got '{limit}'"))?;
        }

        if let Some(algorithm) = lookup(DIFF_ALGORITHM_VAR) {
            config.diff_algorithm = DiffAlgorithm::try_parse(algorithm.trim())?;
        }

        if let Some(retries) = lookup(MAX_COMMIT_RETRIES_VAR) {
            config.max_commit_retries = retries.trim().parse().with_context(|| {
                format!("{MAX_COMMIT_RETRIES_VAR} must be a number, got '{retries}'")
            })?;
        }

        if config.max_commit_retries == 0 {
            anyhow::bail!("{MAX_COMMIT_RETRIES_VAR} must be at least 1");
        }

        Ok(config)
    }
}
