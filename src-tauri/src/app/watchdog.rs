//! Content liveness watchdog.
//!
//! The content layer pings `asynchronous_message` while it is alive. Once the
//! first ping arrived, a silence longer than the configured timeout raises
//! `ShellEvent::ContentCrashed`, once per silence.

use std::time::{Duration, Instant};

use tauri::{AppHandle, Manager};

use crate::lifecycle::ShellEvent;

use super::context::ShellContext;
use super::effects;

/// Heartbeat bookkeeping.
#[derive(Debug, Default)]
pub struct Liveness {
    last_beat: Option<Instant>,
    tripped: bool,
}

impl Liveness {
    pub fn beat(&mut self, now: Instant) {
        self.last_beat = Some(now);
        self.tripped = false;
    }

    pub fn is_armed(&self) -> bool {
        self.last_beat.is_some()
    }

    /// True the first time the silence since the last beat exceeds `timeout`.
    /// Unarmed until the first beat.
    pub fn expired(&mut self, now: Instant, timeout: Duration) -> bool {
        let Some(last) = self.last_beat else {
            return false;
        };
        if self.tripped || now.saturating_duration_since(last) <= timeout {
            return false;
        }
        self.tripped = true;
        true
    }
}

/// Poll often enough to notice a timeout within a quarter of its length.
fn poll_interval(timeout: Duration) -> Duration {
    (timeout / 4).max(Duration::from_millis(250))
}

/// Start the watchdog task. Does nothing when `timeout` is None.
pub fn spawn(app: AppHandle, timeout: Option<Duration>) {
    let Some(timeout) = timeout else {
        log::debug!("[WATCHDOG] Disabled");
        return;
    };

    log::info!("[WATCHDOG] Content heartbeat timeout {:?}", timeout);
    tauri::async_runtime::spawn(async move {
        let mut ticker = tokio::time::interval(poll_interval(timeout));
        loop {
            ticker.tick().await;
            let unresponsive = match app.try_state::<ShellContext>() {
                Some(context) => context.content_unresponsive(Instant::now(), timeout),
                None => false,
            };
            if unresponsive {
                log::warn!("[WATCHDOG] No content heartbeat for {:?}", timeout);
                effects::dispatch(&app, ShellEvent::ContentCrashed);
            }
        }
    });
}
