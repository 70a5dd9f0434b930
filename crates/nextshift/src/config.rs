//! Run configuration.
//!
//! The original migration script baked its paths into the tool (source root
//! and report locations derived from the script's own directory). Here they
//! live in a small config struct with the same defaults, so the pipeline can
//! be pointed at a temp directory in tests or at a different tree from the
//! command line.

use std::path::{Path, PathBuf};

use crate::error::{MigrateError, Result};

/// Default source tree, relative to the current directory.
pub const DEFAULT_SOURCE_ROOT: &str = "frontend/src";

/// Default location of the machine-readable run report.
pub const DEFAULT_JSON_REPORT: &str = "migration-report.json";

/// Default location of the human-readable diff report.
pub const DEFAULT_HTML_REPORT: &str = "migration-report.html";

/// Where to read sources from and where to write the two report artifacts.
#[derive(Debug, Clone)]
pub struct MigrationConfig {
    /// Root of the source tree to migrate
    pub source_root: PathBuf,
    /// Output path for the JSON run report
    pub json_report_path: PathBuf,
    /// Output path for the HTML diff report
    pub html_report_path: PathBuf,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            source_root: PathBuf::from(DEFAULT_SOURCE_ROOT),
            json_report_path: PathBuf::from(DEFAULT_JSON_REPORT),
            html_report_path: PathBuf::from(DEFAULT_HTML_REPORT),
        }
    }
}

impl MigrationConfig {
    /// Config rooted at `source_root`, with report paths written next to the
    /// current directory defaults.
    pub fn with_root(source_root: impl Into<PathBuf>) -> Self {
        Self {
            source_root: source_root.into(),
            ..Self::default()
        }
    }

    /// The absolute form of `source_root`.
    ///
    /// All alias resolution and report-relative paths are computed against
    /// this, so a run is deterministic regardless of how the root was given.
    pub fn absolute_root(&self) -> Result<PathBuf> {
        std::path::absolute(&self.source_root)
            .map_err(|source| MigrateError::io(&self.source_root, source))
    }
}

/// Normalize a path for report output: forward slashes on every platform.
pub fn display_slashed(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_fixed_locations() {
        let config = MigrationConfig::default();
        assert_eq!(config.source_root, Path::new("frontend/src"));
        assert_eq!(config.json_report_path, Path::new("migration-report.json"));
        assert_eq!(config.html_report_path, Path::new("migration-report.html"));
    }

    #[test]
    fn with_root_keeps_report_defaults() {
        let config = MigrationConfig::with_root("/tmp/app/src");
        assert_eq!(config.source_root, Path::new("/tmp/app/src"));
        assert_eq!(config.json_report_path, Path::new("migration-report.json"));
    }

    #[test]
    fn absolute_root_is_absolute() {
        let config = MigrationConfig::default();
        assert!(config.absolute_root().unwrap().is_absolute());
    }
}
