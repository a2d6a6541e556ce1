//! Tauri IPC Commands
//!
//! These commands bridge the frontend to the Rust core. The webview holds
//! no state of its own; it re-renders from the workspace view it is sent.

pub mod app;
pub mod edit;
pub mod files;
pub mod workspace;
