//! Application lifecycle and platform integration.
//!
//! - `context`: the managed `ShellContext`
//! - `effects`: runs lifecycle effects against Tauri
//! - `events`: window and run-loop handlers
//! - `tray` / `shortcuts`: tray menu and global shortcuts
//! - `crash`: platform content-process termination signals
//! - `watchdog`: content heartbeat monitoring (fallback)
//! - `panic`: reload after uncaught panics

pub mod context;
pub mod crash;
pub mod effects;
pub mod events;
pub mod panic;
pub mod watchdog;

#[cfg(desktop)]
pub mod shortcuts;
#[cfg(desktop)]
pub mod tray;

use std::sync::Arc;

use tauri::{App, Manager};

use crate::cli::StartupConfig;
use crate::commands::logging::FileSink;
use crate::config::{ShellConfig, StoragePaths};
use crate::error::ShellResult;
use crate::lifecycle::ShellEvent;

pub use context::ShellContext;

/// Setup hook: resolves storage, loads config, creates the tray, shortcuts
/// and main window. Any failure aborts startup.
pub fn setup(app: &mut App, startup: StartupConfig, log_sink: Arc<FileSink>) -> ShellResult<()> {
    let handle = app.handle().clone();

    let cwd = std::env::current_dir()?;
    let paths = StoragePaths::resolve(startup.portable, &cwd, app.path().app_data_dir()?);
    if let Err(e) = log_sink.open(&paths.log_dir) {
        log::warn!("[SHELL] File logging unavailable in {:?}: {}", paths.log_dir, e);
    }

    let config = ShellConfig::load(&paths.config_file).with_env_overrides();
    let context = ShellContext::new(startup, paths, config)?;
    log::info!(
        "[SHELL] Startup {:?}, data directory {:?}",
        context.startup(),
        context.paths().data_dir
    );
    let heartbeat_timeout = context.config().heartbeat_timeout();

    #[cfg(desktop)]
    {
        tray::init(&handle, context.config())?;
        shortcuts::register(&handle)?;
    }

    app.manage(context);
    panic::install_hook(handle.clone());

    effects::try_dispatch(&handle, ShellEvent::Ready)?;
    watchdog::spawn(handle, heartbeat_timeout);

    Ok(())
}
