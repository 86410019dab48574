//! Recovery from uncaught panics in the shell process.

use tauri::{AppHandle, Manager};

use crate::lifecycle::ShellEvent;

use super::context::ShellContext;
use super::effects;

/// Log every panic and reload the main window if one is open. The previous
/// hook still runs afterwards.
pub fn install_hook(app: AppHandle) {
    let previous = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |info| {
        log::error!("[SHELL] Uncaught panic: {}", info);

        if let Some(context) = app.try_state::<ShellContext>() {
            match context.try_transition(ShellEvent::ShellFault) {
                Some(effects) => {
                    if let Err(e) = effects::apply(&app, effects) {
                        log::error!("[SHELL] Reload after panic failed: {}", e);
                    }
                },
                None => log::error!("[SHELL] Lifecycle busy, skipping reload after panic"),
            }
        }

        previous(info);
    }));
}
