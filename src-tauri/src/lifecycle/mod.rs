//! Main window lifecycle.
//!
//! A small state machine: `Machine::transition` maps the current window
//! state and an incoming event to the next state plus the effects to run.
//! It never touches Tauri; `app::effects` executes the effects.

use std::path::PathBuf;

use crate::dispatch::ShellAction;
use crate::document::DocumentUrl;

#[cfg(test)]
mod tests;

/// Presence of the main window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowState {
    #[default]
    Uninitialized,
    Created {
        visible: bool,
    },
    Closed,
}

impl WindowState {
    pub fn is_created(self) -> bool {
        matches!(self, WindowState::Created { .. })
    }
}

/// Answer to the crash prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrashChoice {
    Reload,
    Close,
}

/// Something that happened to the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellEvent {
    /// Platform finished launching.
    Ready,
    /// Main window was destroyed.
    WindowClosed,
    /// Content process stopped responding or died.
    ContentCrashed,
    /// User answered the crash prompt.
    CrashChoice(CrashChoice),
    /// Uncaught panic in the shell process.
    ShellFault,
    /// Tray menu item, tray click or global shortcut.
    Action(ShellAction),
    /// Application is about to exit.
    WillQuit,
}

/// How the main window is built.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowPlan {
    pub url: DocumentUrl,
    pub width: f64,
    pub height: f64,
    pub devtools: bool,
    pub data_directory: Option<PathBuf>,
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    CreateWindow(WindowPlan),
    ShowWindow,
    HideWindow,
    ReloadWindow,
    CloseWindow,
    Emit {
        event: &'static str,
        payload: &'static str,
    },
    PromptCrash,
    UnregisterShortcuts,
    Quit,
}

/// Transition function, parameterised by how the window is created.
#[derive(Debug, Clone)]
pub struct Machine {
    plan: WindowPlan,
}

impl Machine {
    pub fn new(plan: WindowPlan) -> Self {
        Self { plan }
    }

    pub fn plan(&self) -> &WindowPlan {
        &self.plan
    }

    pub fn transition(&self, state: WindowState, event: ShellEvent) -> (WindowState, Vec<Effect>) {
        use WindowState::*;

        match (state, event) {
            (Uninitialized, ShellEvent::Ready) => (
                Created { visible: true },
                vec![Effect::CreateWindow(self.plan.clone())],
            ),
            (_, ShellEvent::Ready) => {
                log::warn!("[LIFECYCLE] Ready received in state {:?}, ignoring", state);
                (state, Vec::new())
            },

            (_, ShellEvent::WindowClosed) => (Closed, Vec::new()),

            (Created { .. }, ShellEvent::ContentCrashed) => (
                Created { visible: false },
                vec![Effect::HideWindow, Effect::PromptCrash],
            ),
            (Created { .. }, ShellEvent::CrashChoice(CrashChoice::Reload)) => {
                (state, vec![Effect::ReloadWindow])
            },
            (Created { .. }, ShellEvent::CrashChoice(CrashChoice::Close)) => {
                (state, vec![Effect::CloseWindow])
            },
            (Created { .. }, ShellEvent::ShellFault) => (state, vec![Effect::ReloadWindow]),
            (_, ShellEvent::ContentCrashed | ShellEvent::CrashChoice(_) | ShellEvent::ShellFault) => {
                log::warn!("[LIFECYCLE] {:?} without a main window, ignoring", event);
                (state, Vec::new())
            },

            (_, ShellEvent::Action(ShellAction::Quit)) => {
                let mut effects = vec![Effect::UnregisterShortcuts];
                if state.is_created() {
                    effects.push(Effect::CloseWindow);
                }
                effects.push(Effect::Quit);
                (state, effects)
            },
            (Created { visible }, ShellEvent::Action(action)) => {
                let mut effects = Vec::new();
                let visible = if action.reveals_window() {
                    effects.push(Effect::ShowWindow);
                    true
                } else {
                    visible
                };
                if let Some((event, payload)) = action.content_event() {
                    effects.push(Effect::Emit { event, payload });
                }
                (Created { visible }, effects)
            },
            (_, ShellEvent::Action(action)) => {
                log::warn!("[LIFECYCLE] {:?} without a main window, ignoring", action);
                (state, Vec::new())
            },

            (_, ShellEvent::WillQuit) => (state, vec![Effect::UnregisterShortcuts]),
        }
    }
}
