//! Main editor state container
//!
//! Every buffer and the shared editing surface live here; the GUI shell
//! only renders what this struct hands out. One buffer is active at a
//! time. Switching away flushes the surface into the store verbatim (no
//! whitespace trimming), switching in reloads the surface from the store.

use std::path::Path;

use seltzer_buffers::BufferStore;
use seltzer_surface::Surface;

use crate::config::Config;
use crate::error::CoreError;
use crate::Result;

pub struct Editor {
    /// Configuration
    config: Config,
    /// All open buffers
    store: BufferStore,
    /// The one visible editing surface, shared by every buffer
    surface: Surface,
    /// Name of the buffer currently on the surface
    active: Option<String>,
}

impl Editor {
    pub fn new(config: Config) -> Self {
        let surface = Surface::new(config.history_depth);

        Self {
            config,
            store: BufferStore::new(),
            surface,
            active: None,
        }
    }

    /// Create the first buffer and put it on the surface.
    pub fn initialize(&mut self) -> Result<()> {
        self.create_buffer()?;
        tracing::info!("Editor initialized");
        Ok(())
    }

    // === Buffer operations ===

    /// Create a new empty buffer. The selection only moves to it when no
    /// buffer is active yet; otherwise the current buffer stays on the
    /// surface and the new one waits on the tab bar.
    pub fn create_buffer(&mut self) -> Result<String> {
        let name = self.store.create()?;

        if self.active.is_none() {
            self.switch_to(&name)?;
        }

        Ok(name)
    }

    /// Put `name` on the surface. The outgoing buffer receives the
    /// surface's present content first, so nothing typed since the last
    /// switch is lost.
    pub fn switch_to(&mut self, name: &str) -> Result<()> {
        if !self.store.contains(name) {
            return Err(seltzer_buffers::BufferError::NotFound(name.to_string()).into());
        }

        self.flush_active()?;

        let content = self.store.get(name)?.content.clone();
        self.active = Some(name.to_string());
        self.surface.load(content);

        tracing::debug!(buffer = %name, "Switched buffer");

        Ok(())
    }

    /// Record a discrete edit on the surface.
    pub fn record_edit(&mut self, content: String) {
        self.surface.commit(content);
    }

    // === File operations ===

    /// Replace the active buffer's content with the file at `path`. The
    /// buffer keeps its name; only saving renames. State is untouched if
    /// the read fails.
    pub fn open_file(&mut self, path: &Path) -> Result<()> {
        let active = self.active.clone().ok_or(CoreError::NoActiveBuffer)?;

        let content = std::fs::read_to_string(path).map_err(|source| CoreError::Read {
            path: path.display().to_string(),
            source,
        })?;

        self.store.set_content(&active, content.clone())?;
        self.surface.load(content);

        tracing::info!(buffer = %active, path = %path.display(), "Opened file");

        Ok(())
    }

    /// Write the surface's present content to `path`, then rename the
    /// active buffer to the file's base name (directory and extension
    /// stripped). The store is only touched after the write has
    /// succeeded, so a failed save changes nothing. Returns the buffer's
    /// name after the save.
    pub fn save_file(&mut self, path: &Path) -> Result<String> {
        let active = self.active.clone().ok_or(CoreError::NoActiveBuffer)?;

        let content = self.surface.content().to_string();
        std::fs::write(path, &content).map_err(|source| CoreError::Write {
            path: path.display().to_string(),
            source,
        })?;

        self.store.set_content(&active, content)?;

        let name = match self.saved_name_for(path, &active) {
            Some(target) => {
                self.store.rename(&active, &target)?;
                self.active = Some(target.clone());
                target
            }
            None => active,
        };

        tracing::info!(buffer = %name, path = %path.display(), "Saved file");

        Ok(name)
    }

    /// Derive the post-save buffer name from the file's stem, suffixing
    /// `-2`, `-3`, ... when another buffer already holds it. `None` means
    /// the name does not change.
    fn saved_name_for(&self, path: &Path, active: &str) -> Option<String> {
        let stem = path.file_stem()?.to_str()?;
        if stem.is_empty() || stem == active {
            return None;
        }

        if !self.store.contains(stem) {
            return Some(stem.to_string());
        }
        for n in 2.. {
            let candidate = format!("{stem}-{n}");
            if candidate == active {
                return None;
            }
            if !self.store.contains(&candidate) {
                return Some(candidate);
            }
        }
        unreachable!()
    }

    fn flush_active(&mut self) -> Result<()> {
        if let Some(active) = &self.active {
            self.store
                .set_content(active, self.surface.content().to_string())?;
        }
        Ok(())
    }

    // === Undo/redo ===

    pub fn undo(&mut self) -> bool {
        self.surface.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.surface.redo()
    }

    // === Accessors ===

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn buffer_names(&self) -> Vec<&str> {
        self.store.names()
    }

    pub fn buffer_content(&self, name: &str) -> Result<&str> {
        Ok(self.store.get(name)?.content.as_str())
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// The tab bar only appears once a second buffer exists.
    pub fn tab_bar_visible(&self) -> bool {
        self.store.len() > 1
    }
}
