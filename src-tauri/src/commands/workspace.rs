//! Workspace commands
use serde::{Deserialize, Serialize};
use tauri::{AppHandle, Emitter, State};

use crate::state::AppState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BufferInfo {
    pub name: String,
    pub active: bool,
}

/// Everything the frontend needs to render: the tab row, the active
/// selection, and the surface content with its version counter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceView {
    pub buffers: Vec<BufferInfo>,
    pub active: Option<String>,
    pub tab_bar_visible: bool,
    pub content: String,
    pub version: u64,
}

impl WorkspaceView {
    pub fn snapshot(editor: &seltzer_core::Editor) -> Self {
        let active = editor.active().map(str::to_string);
        let buffers = editor
            .buffer_names()
            .into_iter()
            .map(|name| BufferInfo {
                name: name.to_string(),
                active: active.as_deref() == Some(name),
            })
            .collect();

        Self {
            buffers,
            active,
            tab_bar_visible: editor.tab_bar_visible(),
            content: editor.surface().content().to_string(),
            version: editor.surface().version(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CommandResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

/// Push the current workspace view to the frontend
pub fn emit_workspace(app: &AppHandle, state: &AppState) {
    let view = state.with_editor(WorkspaceView::snapshot);
    let _ = app.emit("workspace-changed", view);
}

#[tauri::command]
pub fn get_workspace(state: State<AppState>) -> CommandResult<WorkspaceView> {
    CommandResult::ok(state.with_editor(WorkspaceView::snapshot))
}

#[tauri::command]
pub fn create_buffer(app: AppHandle, state: State<AppState>) -> CommandResult<WorkspaceView> {
    match state.with_editor_mut(|editor| editor.create_buffer()) {
        Ok(_) => {
            emit_workspace(&app, &state);
            CommandResult::ok(state.with_editor(WorkspaceView::snapshot))
        }
        Err(e) => CommandResult::err(e.to_string()),
    }
}

#[tauri::command]
pub fn activate_buffer(
    app: AppHandle,
    state: State<AppState>,
    name: String,
) -> CommandResult<WorkspaceView> {
    match state.with_editor_mut(|editor| editor.switch_to(&name)) {
        Ok(()) => {
            emit_workspace(&app, &state);
            CommandResult::ok(state.with_editor(WorkspaceView::snapshot))
        }
        Err(e) => CommandResult::err(e.to_string()),
    }
}

/// A discrete edit reported by the surface widget. No event is emitted
/// back: the view already shows this content.
#[tauri::command]
pub fn record_edit(state: State<AppState>, content: String) -> CommandResult<()> {
    state.with_editor_mut(|editor| editor.record_edit(content));
    CommandResult::ok(())
}
