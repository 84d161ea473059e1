//! Runtime settings loaded via OrthoConfig.

use std::path::{Path, PathBuf};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_DATA_DIR: &str = "data";

/// Settings shared by every `carwash` subcommand.
///
/// Values come from `CARWASH_*` environment variables or a config file; the
/// CLI's `--data-dir` flag overrides `data_dir`.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CARWASH")]
pub struct CarwashSettings {
    /// Directory holding the users, cars, and jobs tables.
    pub data_dir: Option<PathBuf>,
    /// Emit logs as JSON lines instead of human-readable text.
    #[ortho_config(default = false)]
    pub json_logs: bool,
}

impl CarwashSettings {
    /// Return the configured data directory, falling back to `./data`.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
    }

    /// Resolve the data directory, preferring `override_dir` when given.
    #[must_use]
    pub fn resolve_data_dir(&self, override_dir: Option<&Path>) -> PathBuf {
        override_dir.map_or_else(|| self.data_dir(), Path::to_path_buf)
    }
}
