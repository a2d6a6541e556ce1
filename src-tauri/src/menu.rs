//! Native menu bar
//!
//! Every menu item id round-trips through the `MenuAction` enum and all
//! events land in one dispatch function; no per-widget callbacks anywhere.

use tauri::menu::{Menu, MenuBuilder, MenuEvent, MenuItemBuilder, SubmenuBuilder};
use tauri::{AppHandle, Manager, Wry};

use crate::commands;
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    NewBuffer,
    OpenFile,
    SaveFile,
    Undo,
    Redo,
    Exit,
}

impl MenuAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuAction::NewBuffer => "file-new",
            MenuAction::OpenFile => "file-open",
            MenuAction::SaveFile => "file-save",
            MenuAction::Undo => "edit-undo",
            MenuAction::Redo => "edit-redo",
            MenuAction::Exit => "app-exit",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "file-new" => Some(MenuAction::NewBuffer),
            "file-open" => Some(MenuAction::OpenFile),
            "file-save" => Some(MenuAction::SaveFile),
            "edit-undo" => Some(MenuAction::Undo),
            "edit-redo" => Some(MenuAction::Redo),
            "app-exit" => Some(MenuAction::Exit),
            _ => None,
        }
    }
}

pub fn build_menu(app: &AppHandle) -> tauri::Result<Menu<Wry>> {
    let app_name = app
        .state::<AppState>()
        .with_editor(|editor| editor.config().window_title.clone());

    let app_menu = SubmenuBuilder::new(app, app_name)
        .item(&MenuItemBuilder::with_id(MenuAction::Exit.as_str(), "Exit").build(app)?)
        .build()?;

    let file_menu = SubmenuBuilder::new(app, "File")
        .item(&MenuItemBuilder::with_id(MenuAction::NewBuffer.as_str(), "New").build(app)?)
        .item(&MenuItemBuilder::with_id(MenuAction::OpenFile.as_str(), "Open").build(app)?)
        .item(&MenuItemBuilder::with_id(MenuAction::SaveFile.as_str(), "Save").build(app)?)
        .build()?;

    let edit_menu = SubmenuBuilder::new(app, "Edit")
        .item(
            &MenuItemBuilder::with_id(MenuAction::Undo.as_str(), "Undo")
                .accelerator("CmdOrCtrl+Z")
                .build(app)?,
        )
        .item(
            &MenuItemBuilder::with_id(MenuAction::Redo.as_str(), "Redo")
                .accelerator("CmdOrCtrl+Y")
                .build(app)?,
        )
        .build()?;

    MenuBuilder::new(app)
        .items(&[&app_menu, &file_menu, &edit_menu])
        .build()
}

pub fn handle_menu_event(app: &AppHandle, event: MenuEvent) {
    let id = event.id().as_ref();
    let Some(action) = MenuAction::from_id(id) else {
        tracing::warn!(id = %id, "Unknown menu item");
        return;
    };

    dispatch(app, action);
}

fn dispatch(app: &AppHandle, action: MenuAction) {
    tracing::debug!(action = ?action, "Menu action");

    match action {
        MenuAction::NewBuffer => {
            let state = app.state::<AppState>();
            if let Err(e) = state.with_editor_mut(|editor| editor.create_buffer()) {
                tracing::error!(%e, "Failed to create buffer");
                return;
            }
            commands::workspace::emit_workspace(app, &state);
        }
        // Dialog-bearing actions block, so they leave the main thread
        MenuAction::OpenFile => {
            let app = app.clone();
            tauri::async_runtime::spawn_blocking(move || {
                commands::files::open_file_flow(&app);
            });
        }
        MenuAction::SaveFile => {
            let app = app.clone();
            tauri::async_runtime::spawn_blocking(move || {
                commands::files::save_file_flow(&app);
            });
        }
        MenuAction::Undo => {
            let state = app.state::<AppState>();
            if state.with_editor_mut(|editor| editor.undo()) {
                commands::workspace::emit_workspace(app, &state);
            }
        }
        MenuAction::Redo => {
            let state = app.state::<AppState>();
            if state.with_editor_mut(|editor| editor.redo()) {
                commands::workspace::emit_workspace(app, &state);
            }
        }
        MenuAction::Exit => commands::app::confirm_exit(app),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_ids_round_trip() {
        let actions = [
            MenuAction::NewBuffer,
            MenuAction::OpenFile,
            MenuAction::SaveFile,
            MenuAction::Undo,
            MenuAction::Redo,
            MenuAction::Exit,
        ];

        for action in actions {
            assert_eq!(MenuAction::from_id(action.as_str()), Some(action));
        }
        assert_eq!(MenuAction::from_id("not-a-menu-id"), None);
    }
}
