//! Global keyboard shortcuts.

use tauri::AppHandle;
use tauri_plugin_global_shortcut::{GlobalShortcutExt, ShortcutState};

use crate::dispatch::SHORTCUTS;
use crate::error::{ShellError, ShellResult};
use crate::lifecycle::ShellEvent;

use super::effects;

/// Register every shortcut from the action table. A conflict with another
/// application fails setup.
pub fn register(app: &AppHandle) -> ShellResult<()> {
    let shortcuts = app.global_shortcut();

    for (accelerator, action) in SHORTCUTS {
        shortcuts
            .on_shortcut(accelerator, move |app, _shortcut, event| {
                if event.state == ShortcutState::Pressed {
                    log::debug!("[SHORTCUT] {} -> {:?}", accelerator, action);
                    effects::dispatch(app, ShellEvent::Action(action));
                }
            })
            .map_err(|e| ShellError::Shortcut(format!("{}: {}", accelerator, e)))?;
    }

    log::info!("[SHORTCUT] Registered {} global shortcuts", SHORTCUTS.len());
    Ok(())
}

pub fn unregister_all(app: &AppHandle) -> ShellResult<()> {
    app.global_shortcut()
        .unregister_all()
        .map_err(|e| ShellError::Shortcut(e.to_string()))?;
    log::info!("[SHORTCUT] Unregistered all global shortcuts");
    Ok(())
}
