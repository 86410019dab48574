//! Shell configuration management.
//!
//! - `ShellConfig`: window size, tray appearance, watchdog timeout, content location
//! - `StoragePaths`: data, log and config locations (portable-mode aware)

pub mod paths;
pub mod shell;

pub use paths::StoragePaths;
pub use shell::ShellConfig;
