//! Application-level commands
use tauri::{AppHandle, State};
use tauri_plugin_dialog::{DialogExt, MessageDialogButtons, MessageDialogKind};

use super::workspace::CommandResult;
use crate::state::AppState;

/// Ask before exiting; declining leaves everything running untouched.
/// Shared by the menu item and the window close button.
pub(crate) fn confirm_exit(app: &AppHandle) {
    let app_handle = app.clone();
    app.dialog()
        .message("Are you sure you want to exit?")
        .title("Confirm Exit")
        .kind(MessageDialogKind::Warning)
        .buttons(MessageDialogButtons::YesNo)
        .show(move |confirmed| {
            if confirmed {
                tracing::info!("Exit confirmed");
                app_handle.exit(0);
            }
        });
}

#[tauri::command]
pub fn frontend_ready(app: AppHandle, state: State<AppState>) -> CommandResult<()> {
    tracing::info!("Frontend ready");

    if state.take_welcome() {
        let message = state.with_editor(|editor| editor.config().welcome_message.clone());
        app.dialog()
            .message(message)
            .title("Welcome")
            .kind(MessageDialogKind::Info)
            .show(|_| {});
    }

    CommandResult::ok(())
}

#[tauri::command]
pub fn request_exit(app: AppHandle) -> CommandResult<()> {
    confirm_exit(&app);
    CommandResult::ok(())
}
