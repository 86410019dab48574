//! Content process termination.
//!
//! Hooks the webview engine's own crash signal: `web-process-terminated` on
//! WebKitGTK and `ProcessFailed` on WebView2. Other platforms rely on the
//! heartbeat watchdog.

use tauri::{AppHandle, Manager, WebviewWindow};

use crate::error::ShellResult;
use crate::lifecycle::ShellEvent;

use super::effects;

/// Report a dead content process to the lifecycle.
#[cfg_attr(not(any(target_os = "linux", windows)), allow(dead_code))]
fn report(app: &AppHandle, reason: &str) {
    log::error!("[CRASH] Content process terminated: {}", reason);
    effects::dispatch(app, ShellEvent::ContentCrashed);
}

/// Subscribe to the platform crash signal of `window`'s webview.
pub fn watch(window: &WebviewWindow) -> ShellResult<()> {
    let app = window.app_handle().clone();

    window.with_webview(move |webview| {
        #[cfg(target_os = "linux")]
        {
            use webkit2gtk::WebViewExt;

            webview
                .inner()
                .connect_web_process_terminated(move |_, reason| {
                    report(&app, &format!("{:?}", reason));
                });
        }

        #[cfg(windows)]
        {
            use webview2_com::ProcessFailedEventHandler;

            let core = match unsafe { webview.controller().CoreWebView2() } {
                Ok(core) => core,
                Err(e) => {
                    log::warn!("[CRASH] WebView2 core unavailable: {}", e);
                    return;
                },
            };
            let handler = ProcessFailedEventHandler::create(Box::new(move |_sender, _args| {
                report(&app, "ProcessFailed");
                Ok(())
            }));
            let mut token = 0;
            if let Err(e) = unsafe { core.add_ProcessFailed(&handler, &mut token) } {
                log::warn!("[CRASH] Failed to subscribe to ProcessFailed: {}", e);
            }
        }

        #[cfg(not(any(target_os = "linux", windows)))]
        {
            let _ = (webview, app);
            log::debug!("[CRASH] No crash signal on this platform, heartbeat only");
        }
    })?;

    Ok(())
}
