//! Where the shell keeps its data.
//!
//! Portable mode moves everything under `<cwd>/tsprofile`; otherwise the
//! platform application data directory is used.

use std::path::{Path, PathBuf};

/// Name of the portable profile directory.
pub const PORTABLE_PROFILE_DIR: &str = "tsprofile";

/// Resolved storage locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePaths {
    pub data_dir: PathBuf,
    pub log_dir: PathBuf,
    pub config_file: PathBuf,
    /// Webview profile directory, only set in portable mode.
    pub webview_dir: Option<PathBuf>,
}

impl StoragePaths {
    pub fn resolve(portable: bool, cwd: &Path, default_data_dir: PathBuf) -> Self {
        let data_dir = if portable {
            cwd.join(PORTABLE_PROFILE_DIR)
        } else {
            default_data_dir
        };

        Self {
            log_dir: data_dir.join("logs"),
            config_file: data_dir.join("shell.json"),
            webview_dir: portable.then(|| data_dir.join("webview")),
            data_dir,
        }
    }
}
