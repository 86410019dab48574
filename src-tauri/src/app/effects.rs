//! Executes lifecycle effects against the running Tauri app.

use std::panic::AssertUnwindSafe;

use tauri::{
    AppHandle, Emitter, EventTarget, Manager, WebviewUrl, WebviewWindow, WebviewWindowBuilder,
};
use tauri_plugin_dialog::{DialogExt, MessageDialogButtons, MessageDialogKind};

use crate::document::DocumentUrl;
use crate::error::{ShellError, ShellResult};
use crate::lifecycle::{CrashChoice, Effect, ShellEvent, WindowPlan};

use super::context::ShellContext;
use super::crash;

/// Label of the single content window.
pub const MAIN_WINDOW: &str = "main";

const WINDOW_TITLE: &str = "TagSpaces";

/// Feed an event into the lifecycle and run the resulting effects, returning
/// the first failure.
pub fn try_dispatch(app: &AppHandle, event: ShellEvent) -> ShellResult<()> {
    let Some(context) = app.try_state::<ShellContext>() else {
        log::warn!("[SHELL] {:?} before the shell context exists, ignoring", event);
        return Ok(());
    };
    let effects = context.transition(event);
    apply(app, effects)
}

/// Feed an event into the lifecycle, logging failures. A panic inside the
/// handler is contained here; the panic hook has already reloaded the window.
pub fn dispatch(app: &AppHandle, event: ShellEvent) {
    if let Err(e) = guarded(|| try_dispatch(app, event)) {
        log::error!("[SHELL] Handling {:?} failed: {}", event, e);
    }
}

/// Run `f`, turning a panic into an error so the event loop keeps going.
fn guarded<F>(f: F) -> ShellResult<()>
where
    F: FnOnce() -> ShellResult<()>,
{
    std::panic::catch_unwind(AssertUnwindSafe(f))
        .unwrap_or_else(|_| Err(ShellError::Other("handler panicked".to_string())))
}

/// Run every effect even if an earlier one failed, so a trailing `Quit`
/// always happens. Returns the first failure.
fn run_all<F>(effects: Vec<Effect>, mut run: F) -> ShellResult<()>
where
    F: FnMut(Effect) -> ShellResult<()>,
{
    let mut first_error = None;
    for effect in effects {
        log::debug!("[SHELL] Effect {:?}", effect);
        let name = format!("{:?}", effect);
        if let Err(e) = run(effect) {
            log::error!("[SHELL] Effect {} failed: {}", name, e);
            first_error.get_or_insert(e);
        }
    }
    first_error.map_or(Ok(()), Err)
}

pub fn apply(app: &AppHandle, effects: Vec<Effect>) -> ShellResult<()> {
    run_all(effects, |effect| apply_one(app, effect))
}

fn apply_one(app: &AppHandle, effect: Effect) -> ShellResult<()> {
    match effect {
        Effect::CreateWindow(plan) => create_window(app, &plan)?,
        Effect::ShowWindow => {
            let window = main_window(app)?;
            window.show()?;
            window.set_focus()?;
        },
        Effect::HideWindow => main_window(app)?.hide()?,
        Effect::ReloadWindow => main_window(app)?.reload()?,
        Effect::CloseWindow => main_window(app)?.close()?,
        Effect::Emit { event, payload } => {
            app.emit_to(EventTarget::webview_window(MAIN_WINDOW), event, payload)?
        },
        Effect::PromptCrash => prompt_crash(app),
        Effect::UnregisterShortcuts => unregister_shortcuts(app)?,
        Effect::Quit => app.exit(0),
    }
    Ok(())
}

fn main_window(app: &AppHandle) -> ShellResult<WebviewWindow> {
    app.get_webview_window(MAIN_WINDOW)
        .ok_or(ShellError::WindowMissing)
}

fn webview_url(url: &DocumentUrl) -> WebviewUrl {
    match url {
        DocumentUrl::App(path) => WebviewUrl::App(path.into()),
        DocumentUrl::File(url) => WebviewUrl::External(url.clone()),
    }
}

fn create_window(app: &AppHandle, plan: &WindowPlan) -> ShellResult<()> {
    let url = webview_url(&plan.url);
    log::info!("[SHELL] Loading {:?}", url);

    let mut builder = WebviewWindowBuilder::new(app, MAIN_WINDOW, url)
        .title(WINDOW_TITLE)
        .inner_size(plan.width, plan.height);
    if let Some(dir) = &plan.data_directory {
        builder = builder.data_directory(dir.clone());
    }

    let window = builder.build()?;
    window.remove_menu()?;

    if let Err(e) = crash::watch(&window) {
        log::warn!("[CRASH] Content process monitoring unavailable: {}", e);
    }

    if plan.devtools {
        window.open_devtools();
    }

    Ok(())
}

/// Ask the user whether to reload or close the crashed content. The dialog
/// is modal to the main window.
fn prompt_crash(app: &AppHandle) {
    let handle = app.clone();
    let mut dialog = app
        .dialog()
        .message("This process has crashed.")
        .title("Renderer Process Crashed")
        .kind(MessageDialogKind::Info)
        .buttons(MessageDialogButtons::OkCancelCustom(
            "Reload".to_string(),
            "Close".to_string(),
        ));
    if let Ok(window) = main_window(app) {
        dialog = dialog.parent(&window);
    }

    dialog.show(move |reload| {
        let choice = if reload {
            CrashChoice::Reload
        } else {
            CrashChoice::Close
        };
        log::info!("[SHELL] Crash prompt answered: {:?}", choice);
        dispatch(&handle, ShellEvent::CrashChoice(choice));
    });
}

#[cfg(desktop)]
fn unregister_shortcuts(app: &AppHandle) -> ShellResult<()> {
    super::shortcuts::unregister_all(app)
}

#[cfg(not(desktop))]
fn unregister_shortcuts(_app: &AppHandle) -> ShellResult<()> {
    Ok(())
}
