//! File open/save commands
//!
//! Dialog rules: a cancelled dialog is a silent no-op; an I/O fault is
//! shown as a modal error and document state stays exactly as it was.

use std::path::Path;

use tauri::{AppHandle, Manager};
use tauri_plugin_dialog::{DialogExt, MessageDialogKind};

use super::workspace::{emit_workspace, CommandResult, WorkspaceView};
use crate::state::AppState;

/// Image extensions that get a warning before being opened as text
const BINARY_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

fn warn_if_binary(app: &AppHandle, path: &Path) {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return;
    };
    if BINARY_EXTENSIONS.iter().any(|b| ext.eq_ignore_ascii_case(b)) {
        app.dialog()
            .message("This looks like a binary image file. Opening it as text will show garbage and editing it will likely corrupt it.")
            .title("Note")
            .kind(MessageDialogKind::Info)
            .blocking_show();
    }
}

fn show_error(app: &AppHandle, error: &seltzer_core::CoreError) {
    tracing::error!(%error, "File operation failed");
    app.dialog()
        .message(error.to_string())
        .title("Error")
        .kind(MessageDialogKind::Error)
        .blocking_show();
}

/// Prompt for a file and load it into the active buffer. `None` in the
/// result data means the dialog was cancelled and nothing happened.
pub(crate) fn open_file_flow(app: &AppHandle) -> CommandResult<Option<WorkspaceView>> {
    let state = app.state::<AppState>();
    let extension = state.with_editor(|editor| editor.config().dialog_extension.clone());

    let picked = app
        .dialog()
        .file()
        .add_filter("Text files", &[extension.as_str()])
        .blocking_pick_file();

    let Some(path) = picked.and_then(|file| file.into_path().ok()) else {
        return CommandResult::ok(None);
    };

    warn_if_binary(app, &path);

    match state.with_editor_mut(|editor| editor.open_file(&path)) {
        Ok(()) => {
            emit_workspace(app, &state);
            CommandResult::ok(Some(state.with_editor(WorkspaceView::snapshot)))
        }
        Err(e) => {
            show_error(app, &e);
            CommandResult::err(e.to_string())
        }
    }
}

/// Prompt for a destination and write the active buffer there, renaming
/// the buffer to the file's base name afterwards. `None` means the dialog
/// was cancelled.
pub(crate) fn save_file_flow(app: &AppHandle) -> CommandResult<Option<WorkspaceView>> {
    let state = app.state::<AppState>();
    let (extension, active) = state.with_editor(|editor| {
        (
            editor.config().dialog_extension.clone(),
            editor.active().map(str::to_string),
        )
    });

    let mut dialog = app
        .dialog()
        .file()
        .add_filter("Text files", &[extension.as_str()]);
    if let Some(active) = &active {
        dialog = dialog.set_file_name(format!("{active}.{extension}"));
    }

    let Some(path) = dialog.blocking_save_file().and_then(|file| file.into_path().ok()) else {
        return CommandResult::ok(None);
    };

    match state.with_editor_mut(|editor| editor.save_file(&path)) {
        Ok(_) => {
            emit_workspace(app, &state);
            CommandResult::ok(Some(state.with_editor(WorkspaceView::snapshot)))
        }
        Err(e) => {
            show_error(app, &e);
            CommandResult::err(e.to_string())
        }
    }
}

#[tauri::command]
pub async fn open_file(app: AppHandle) -> CommandResult<Option<WorkspaceView>> {
    open_file_flow(&app)
}

#[tauri::command]
pub async fn save_file(app: AppHandle) -> CommandResult<Option<WorkspaceView>> {
    save_file_flow(&app)
}
