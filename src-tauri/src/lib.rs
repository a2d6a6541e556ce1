//! Seltzer - Tauri application shell
//!
//! The window is chrome only. Every buffer and the editing surface live in
//! the Rust core; the webview renders workspace views and reports edits.

mod commands;
mod menu;
mod state;

use state::AppState;
use tauri::{Manager, WebviewUrl, WebviewWindowBuilder};

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize logging
    seltzer_core::init_logging();

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            // Initialize editor state
            let state = AppState::new()?;
            state.initialize()?;

            let config = state.config();

            // Startup assets are mandatory. Abort setup with the offending
            // path in the message instead of limping into the main loop.
            let base_dir = std::env::current_dir()?;
            config.validate_assets(&base_dir)?;
            let icon = tauri::image::Image::from_path(base_dir.join(&config.icon_path))?;

            // Store state in Tauri
            app.manage(state);

            let menu = menu::build_menu(app.handle())?;
            app.set_menu(menu)?;

            let window = WebviewWindowBuilder::new(app, "main", WebviewUrl::App("index.html".into()))
                .title(&config.window_title)
                .inner_size(config.window_width, config.window_height)
                .center()
                .build()?;
            window.set_icon(icon)?;

            tracing::info!("Seltzer started");

            Ok(())
        })
        .on_menu_event(|app, event| menu::handle_menu_event(app, event))
        .on_window_event(|window, event| {
            if let tauri::WindowEvent::CloseRequested { api, .. } = event {
                // The close button goes through the same confirmation as
                // the Exit menu item
                api.prevent_close();
                commands::app::confirm_exit(window.app_handle());
            }
        })
        .invoke_handler(tauri::generate_handler![
            // App commands
            commands::app::frontend_ready,
            commands::app::request_exit,
            // Workspace commands
            commands::workspace::get_workspace,
            commands::workspace::create_buffer,
            commands::workspace::activate_buffer,
            commands::workspace::record_edit,
            // File commands
            commands::files::open_file,
            commands::files::save_file,
            // Edit commands
            commands::edit::undo,
            commands::edit::redo,
        ])
        .run(tauri::generate_context!())
        .expect("error while running seltzer");
}
