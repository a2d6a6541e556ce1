//! Undo/redo commands
use tauri::{AppHandle, State};

use super::workspace::{emit_workspace, CommandResult, WorkspaceView};
use crate::state::AppState;

#[tauri::command]
pub fn undo(app: AppHandle, state: State<AppState>) -> CommandResult<WorkspaceView> {
    let changed = state.with_editor_mut(|editor| editor.undo());
    if changed {
        emit_workspace(&app, &state);
    }
    CommandResult::ok(state.with_editor(WorkspaceView::snapshot))
}

#[tauri::command]
pub fn redo(app: AppHandle, state: State<AppState>) -> CommandResult<WorkspaceView> {
    let changed = state.with_editor_mut(|editor| editor.redo());
    if changed {
        emit_workspace(&app, &state);
    }
    CommandResult::ok(state.with_editor(WorkspaceView::snapshot))
}
