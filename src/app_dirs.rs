//! Per-user directories for files the client writes (currently only logs).
//!
//! Everything lives under a single `.exoscope` folder in the OS config
//! directory. `EXOSCOPE_CONFIG_HOME` replaces the OS config directory for
//! tests and portable setups.

use std::path::{Path, PathBuf};

use directories::BaseDirs;
use thiserror::Error;

/// Name of the application directory under the config root.
pub const APP_DIR_NAME: &str = ".exoscope";
/// Environment variable overriding the config root.
pub const CONFIG_HOME_ENV: &str = "EXOSCOPE_CONFIG_HOME";

/// Errors that can occur while resolving or preparing application directories.
#[derive(Debug, Error)]
pub enum AppDirError {
    /// No suitable base config directory could be resolved.
    #[error("No suitable base config directory available for application files")]
    NoBaseDir,
    /// Failed to create a directory.
    #[error("Failed to create application directory at {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Resolved application directory tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppDirs {
    root: PathBuf,
}

impl AppDirs {
    /// Resolve the `.exoscope` root from the environment or the OS config dir.
    pub fn resolve() -> Result<Self, AppDirError> {
        let base = config_base_dir().ok_or(AppDirError::NoBaseDir)?;
        Ok(Self::under(&base))
    }

    /// Tree rooted at `<base>/.exoscope`.
    pub fn under(base: &Path) -> Self {
        Self {
            root: base.join(APP_DIR_NAME),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Logs directory, created on demand.
    pub fn logs_dir(&self) -> Result<PathBuf, AppDirError> {
        ensure_dir(self.root.join("logs"))
    }
}

fn ensure_dir(path: PathBuf) -> Result<PathBuf, AppDirError> {
    std::fs::create_dir_all(&path).map_err(|source| AppDirError::CreateDir {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

fn config_base_dir() -> Option<PathBuf> {
    match std::env::var_os(CONFIG_HOME_ENV) {
        Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
        _ => BaseDirs::new().map(|dirs| dirs.config_dir().to_path_buf()),
    }
}
