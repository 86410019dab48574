//! Central error types for the TagSpaces shell.
//!
//! All errors implement `Serialize` so commands can hand them back to the
//! content layer over IPC.

use serde::Serialize;
use thiserror::Error;

/// Main error type for shell operations.
#[derive(Error, Debug)]
pub enum ShellError {
    /// Tauri runtime call failed (window, tray, menu, event emit)
    #[error("Tauri error: {0}")]
    Tauri(#[from] tauri::Error),

    /// File system operation failed
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Configuration could not be turned into a usable value
    #[error("Config error: {0}")]
    Config(String),

    /// Global shortcut registration or removal failed
    #[error("Shortcut error: {0}")]
    Shortcut(String),

    /// An action targeted the main window while none exists
    #[error("Main window is not open")]
    WindowMissing,

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Serialize for ShellError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Extension trait for turning `None` into a `ShellError`.
pub trait OptionExt<T> {
    /// Convert None to `ShellError::Other` with the given message.
    fn context(self, msg: &str) -> ShellResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn context(self, msg: &str) -> ShellResult<T> {
        self.ok_or_else(|| ShellError::Other(msg.to_string()))
    }
}

/// Type alias for Results using ShellError.
pub type ShellResult<T> = Result<T, ShellError>;
