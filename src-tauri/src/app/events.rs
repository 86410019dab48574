//! Window and run-loop event handlers.

use tauri::{AppHandle, Manager, RunEvent, Window, WindowEvent};

use crate::lifecycle::ShellEvent;

use super::effects::{self, MAIN_WINDOW};

/// Called from the Tauri builder's `on_window_event` hook.
pub fn handle_window_event(window: &Window, event: &WindowEvent) {
    if window.label() != MAIN_WINDOW {
        return;
    }

    if let WindowEvent::Destroyed = event {
        log::info!("[SHELL] Main window closed");
        effects::dispatch(window.app_handle(), ShellEvent::WindowClosed);
    }
}

/// Called for every run-loop event.
pub fn handle_run_event(app: &AppHandle, event: RunEvent) {
    match event {
        // Fires for an explicit quit and when the last window closes
        RunEvent::ExitRequested { code, .. } => {
            log::info!("[SHELL] Exit requested (code {:?})", code);
            effects::dispatch(app, ShellEvent::WillQuit);
        },
        RunEvent::Exit => log::info!("[SHELL] Shutdown complete"),
        _ => {},
    }
}
