//! Seltzer Editing Surface
//!
//! The single text surface every buffer is edited through. The surface
//! tracks the live content and a linear undo/redo history; the view layer
//! is a stateless renderer that re-reads content whenever the version
//! counter moves.

mod history;
mod surface;

pub use history::EditHistory;
pub use surface::Surface;

/// Default depth of the undo history
pub const DEFAULT_HISTORY_DEPTH: usize = 100;
