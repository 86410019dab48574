pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod dispatch;
pub mod document;
pub mod error;
pub mod lifecycle;

use cli::StartupConfig;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let startup = StartupConfig::from_env();
    let log_sink = commands::logging::init_logging(startup.debug);

    if let Some(path) = &startup.startup_file {
        log::info!("[SHELL] Opening file: {}", path);
    }

    let mut builder = tauri::Builder::default().plugin(tauri_plugin_dialog::init());

    #[cfg(desktop)]
    {
        builder = builder.plugin(tauri_plugin_global_shortcut::Builder::new().build());
    }

    let app = builder
        .on_window_event(app::events::handle_window_event)
        .invoke_handler(tauri::generate_handler![
            // Content bridge
            commands::bridge::asynchronous_message,
            commands::bridge::synchronous_message,
            commands::bridge::quit_application,
            // Logging
            commands::logging::write_log,
        ])
        .setup(move |app| {
            app::setup(app, startup, log_sink)?;
            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application");

    app.run(app::events::handle_run_event);
}
