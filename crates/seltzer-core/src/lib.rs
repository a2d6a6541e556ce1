//! Seltzer Core
//!
//! Central coordination layer for the Seltzer editor. The core owns every
//! buffer and the shared editing surface; the GUI shell is a stateless
//! renderer driven by commands and change events.

mod config;
mod editor;
mod error;

pub use config::Config;
pub use editor::Editor;
pub use error::CoreError;

// Re-export core components
pub use seltzer_buffers::{Buffer, BufferError, BufferStore};
pub use seltzer_surface::{EditHistory, Surface};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
