//! System tray setup and event handling.

use tauri::{
    image::Image,
    menu::{Menu, MenuItem, PredefinedMenuItem},
    tray::{MouseButton, MouseButtonState, TrayIconBuilder, TrayIconEvent},
    AppHandle,
};

use crate::config::ShellConfig;
use crate::dispatch::{MenuEntry, ShellAction, TRAY_MENU};
use crate::error::{OptionExt, ShellResult};
use crate::lifecycle::ShellEvent;

use super::effects;

/// Build the context menu from the action table.
fn build_menu(app: &AppHandle) -> ShellResult<Menu<tauri::Wry>> {
    let menu = Menu::new(app)?;

    for entry in TRAY_MENU {
        match entry {
            MenuEntry::Item(action) => {
                let item = MenuItem::with_id(
                    app,
                    action.id(),
                    action.label(),
                    true,
                    action.accelerator(),
                )?;
                menu.append(&item)?;
            },
            MenuEntry::Separator => menu.append(&PredefinedMenuItem::separator(app)?)?,
        }
    }

    Ok(menu)
}

/// Tray image from the configured path, or the bundled app icon.
fn load_icon(app: &AppHandle, config: &ShellConfig) -> ShellResult<Image<'static>> {
    match Image::from_path(&config.tray_icon) {
        Ok(icon) => Ok(icon),
        Err(e) => {
            log::warn!(
                "[TRAY] Failed to load {:?} ({}), using the app icon",
                config.tray_icon,
                e
            );
            let icon = app
                .default_window_icon()
                .context("no tray icon available")?;
            Ok(Image::new_owned(icon.rgba().to_vec(), icon.width(), icon.height()))
        },
    }
}

/// Create the tray icon with its menu and click handling.
pub fn init(app: &AppHandle, config: &ShellConfig) -> ShellResult<()> {
    let menu = build_menu(app)?;
    let icon = load_icon(app, config)?;

    TrayIconBuilder::with_id("main")
        .icon(icon)
        .menu(&menu)
        .tooltip(&config.tray_title)
        .title(&config.tray_title)
        .show_menu_on_left_click(false)
        .on_menu_event(|app, event| match ShellAction::from_id(event.id.as_ref()) {
            Some(action) => effects::dispatch(app, ShellEvent::Action(action)),
            None => log::warn!("[TRAY] Unknown menu item {:?}", event.id),
        })
        .on_tray_icon_event(|tray, event| {
            if let TrayIconEvent::Click {
                button: MouseButton::Left,
                button_state: MouseButtonState::Up,
                ..
            } = event
            {
                effects::dispatch(tray.app_handle(), ShellEvent::Action(ShellAction::Show));
            }
        })
        .build(app)?;

    log::info!("[TRAY] Tray icon ready");
    Ok(())
}
