//! Library configuration
//!
//! Configuration is either read from the environment (`LIBREPO_DEBUG`,
//! `TMPDIR`) or from a JSON file. Every field is optional.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{LibrepoError, LibrepoResult};
use crate::observability::{Severity, DEFAULT_MIN_SEVERITY};

/// Environment variable that turns on debug logging when set
pub const ENV_DEBUG: &str = "LIBREPO_DEBUG";

/// Librepo configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Emit TRACE records (default: false)
    #[serde(default)]
    pub debug: bool,

    /// Directory for temporary files (default: system temp dir)
    #[serde(default)]
    pub tmp_dir: Option<PathBuf>,
}

impl Config {
    /// Build configuration from the process environment
    pub fn from_env() -> Self {
        Self {
            debug: env::var_os(ENV_DEBUG).is_some(),
            tmp_dir: None,
        }
    }

    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> LibrepoResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            LibrepoError::BadConfig(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| LibrepoError::BadConfig(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> LibrepoResult<()> {
        if let Some(ref dir) = self.tmp_dir {
            if !dir.is_absolute() {
                return Err(LibrepoError::BadConfig(format!(
                    "tmp_dir must be an absolute path: '{}'",
                    dir.display()
                )));
            }
        }
        Ok(())
    }

    /// Minimum log severity this configuration asks for
    pub fn min_severity(&self) -> Severity {
        if self.debug {
            Severity::Trace
        } else {
            DEFAULT_MIN_SEVERITY
        }
    }

    /// Effective directory for temporary files
    pub fn tmp_dir(&self) -> PathBuf {
        self.tmp_dir.clone().unwrap_or_else(env::temp_dir)
    }
}
