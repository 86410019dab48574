//! Message bridge between the content layer and the shell.
//!
//! `asynchronous_message` replies later with an `asynchronous-reply` event,
//! `synchronous_message` answers inline. Neither inspects its payload.

use serde_json::Value;
use tauri::{command, AppHandle, Emitter, EventTarget, Runtime, State, WebviewWindow};

use crate::app::ShellContext;
use crate::dispatch::ShellAction;
use crate::error::ShellResult;
use crate::lifecycle::ShellEvent;

/// Acknowledgment sent on both channels.
pub const ACK: &str = "pong";

/// Event carrying the reply to `asynchronous_message`.
pub const ASYNC_REPLY: &str = "asynchronous-reply";

/// Fire-and-forget request. Also counts as a content heartbeat.
#[command]
pub fn asynchronous_message<R: Runtime>(
    window: WebviewWindow<R>,
    context: State<'_, ShellContext>,
    payload: Option<Value>,
) -> ShellResult<()> {
    log::trace!("[BRIDGE] asynchronous-message {:?}", payload);
    context.heartbeat();
    window.emit_to(EventTarget::webview_window(window.label()), ASYNC_REPLY, ACK)?;
    Ok(())
}

/// Blocking request. Runs on the main thread and must answer without
/// yielding, so it stays a plain sync command.
#[command]
pub fn synchronous_message(payload: Option<Value>) -> String {
    log::trace!("[BRIDGE] synchronous-message {:?}", payload);
    ACK.to_string()
}

/// Shut the application down: shortcuts are released, the window closes and
/// the process exits.
#[command]
pub fn quit_application(app: AppHandle) {
    log::info!("[BRIDGE] quit-application received");
    crate::app::effects::dispatch(&app, ShellEvent::Action(ShellAction::Quit));
}
