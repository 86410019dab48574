//! Shell configuration.
//!
//! Read once from `shell.json` in the data directory. Every field has a
//! default, so a missing or partial file is fine; a malformed one is logged
//! and replaced by the defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Environment variable that points the window at an unpacked content build.
pub const CONTENT_DIR_ENV: &str = "TAGSPACES_CONTENT_DIR";

/// Shell-level settings that are not part of the launch arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShellConfig {
    /// Initial main window width in logical pixels.
    pub window_width: f64,

    /// Initial main window height in logical pixels.
    pub window_height: f64,

    /// Tooltip and title of the tray icon.
    pub tray_title: String,

    /// Tray icon image, relative to the working directory.
    pub tray_icon: PathBuf,

    /// Seconds without a content heartbeat before the content process is
    /// considered crashed. 0 disables the watchdog.
    pub heartbeat_timeout_secs: u64,

    /// Directory holding `index.html`. None = bundled frontend.
    pub content_dir: Option<PathBuf>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            window_width: 1280.0,
            window_height: 768.0,
            tray_title: "TagSpaces App".to_string(),
            tray_icon: PathBuf::from("assets/trayicon.png"),
            heartbeat_timeout_secs: 0,
            content_dir: None,
        }
    }
}

impl ShellConfig {
    /// Load the config file, falling back to defaults when it is absent or
    /// unreadable.
    pub fn load(path: &Path) -> Self {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("[CONFIG] No config file at {:?}, using defaults", path);
                return Self::default();
            },
            Err(e) => {
                log::warn!("[CONFIG] Failed to read {:?}: {}", path, e);
                return Self::default();
            },
        };

        match serde_json::from_str(&raw) {
            Ok(config) => {
                log::info!("[CONFIG] Loaded {:?}", path);
                config
            },
            Err(e) => {
                log::warn!("[CONFIG] Ignoring malformed {:?}: {}", path, e);
                Self::default()
            },
        }
    }

    /// Apply overrides from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_content_dir_override(std::env::var_os(CONTENT_DIR_ENV).map(PathBuf::from))
    }

    fn with_content_dir_override(mut self, content_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = content_dir.filter(|dir| !dir.as_os_str().is_empty()) {
            log::debug!("[CONFIG] content_dir overridden to {:?}", dir);
            self.content_dir = Some(dir);
        }
        self
    }

    /// Heartbeat timeout, or None when the watchdog is disabled.
    pub fn heartbeat_timeout(&self) -> Option<Duration> {
        (self.heartbeat_timeout_secs > 0).then(|| Duration::from_secs(self.heartbeat_timeout_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ShellConfig::default();
        assert_eq!(config.window_width, 1280.0);
        assert_eq!(config.window_height, 768.0);
        assert_eq!(config.tray_title, "TagSpaces App");
        assert_eq!(config.tray_icon, PathBuf::from("assets/trayicon.png"));
        assert_eq!(config.heartbeat_timeout(), None);
        assert_eq!(config.content_dir, None);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ShellConfig::load(&dir.path().join("shell.json"));
        assert_eq!(config, ShellConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shell.json");
        std::fs::write(&path, r#"{ "heartbeatTimeoutSecs": 15, "unknownKey": true }"#).unwrap();

        let config = ShellConfig::load(&path);
        assert_eq!(config.heartbeat_timeout(), Some(Duration::from_secs(15)));
        assert_eq!(config.window_width, 1280.0);
        assert_eq!(config.tray_title, "TagSpaces App");
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shell.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert_eq!(ShellConfig::load(&path), ShellConfig::default());
    }

    #[test]
    fn test_content_dir_override() {
        let config = ShellConfig::default().with_content_dir_override(Some("/srv/ts".into()));
        assert_eq!(config.content_dir, Some(PathBuf::from("/srv/ts")));

        // Empty value leaves the configured directory alone
        let config = config.with_content_dir_override(Some(PathBuf::new()));
        assert_eq!(config.content_dir, Some(PathBuf::from("/srv/ts")));
    }
}
