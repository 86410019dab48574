//! Process-wide shell state.
//!
//! Created once in the setup hook and handed to Tauri as managed state.
//! Handlers reach it through `app.state::<ShellContext>()`.

use std::time::Instant;

use parking_lot::Mutex;

use crate::cli::StartupConfig;
use crate::config::{ShellConfig, StoragePaths};
use crate::document;
use crate::error::ShellResult;
use crate::lifecycle::{Effect, Machine, ShellEvent, WindowPlan, WindowState};

use super::watchdog::Liveness;

pub struct ShellContext {
    startup: StartupConfig,
    paths: StoragePaths,
    config: ShellConfig,
    machine: Machine,
    window: Mutex<WindowState>,
    liveness: Mutex<Liveness>,
}

impl ShellContext {
    pub fn new(startup: StartupConfig, paths: StoragePaths, config: ShellConfig) -> ShellResult<Self> {
        let url = document::resolve(config.content_dir.as_deref(), startup.startup_file.as_deref())?;
        let plan = WindowPlan {
            url,
            width: config.window_width,
            height: config.window_height,
            devtools: startup.debug,
            data_directory: paths.webview_dir.clone(),
        };

        Ok(Self {
            startup,
            paths,
            config,
            machine: Machine::new(plan),
            window: Mutex::new(WindowState::default()),
            liveness: Mutex::new(Liveness::default()),
        })
    }

    pub fn startup(&self) -> &StartupConfig {
        &self.startup
    }

    pub fn paths(&self) -> &StoragePaths {
        &self.paths
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn window_plan(&self) -> &WindowPlan {
        self.machine.plan()
    }

    pub fn window_state(&self) -> WindowState {
        *self.window.lock()
    }

    /// Advance the lifecycle and return the effects to execute.
    pub fn transition(&self, event: ShellEvent) -> Vec<Effect> {
        let mut state = self.window.lock();
        let (next, effects) = self.machine.transition(*state, event);
        if next != *state {
            log::debug!("[LIFECYCLE] {:?} --{:?}--> {:?}", *state, event, next);
        }
        *state = next;
        effects
    }

    /// Like `transition`, but gives up instead of blocking when the state is
    /// locked. Used from the panic hook, which may run while the lock is held
    /// by the panicking thread.
    pub fn try_transition(&self, event: ShellEvent) -> Option<Vec<Effect>> {
        let mut state = self.window.try_lock()?;
        let (next, effects) = self.machine.transition(*state, event);
        *state = next;
        Some(effects)
    }

    /// Record a content heartbeat.
    pub fn heartbeat(&self) {
        self.liveness.lock().beat(Instant::now());
    }

    /// Whether the content layer has pinged at least once.
    pub fn heartbeat_received(&self) -> bool {
        self.liveness.lock().is_armed()
    }

    /// True once per silence longer than `timeout` while the window is up.
    pub fn content_unresponsive(&self, now: Instant, timeout: std::time::Duration) -> bool {
        if !self.window_state().is_created() {
            return false;
        }
        self.liveness.lock().expired(now, timeout)
    }
}
