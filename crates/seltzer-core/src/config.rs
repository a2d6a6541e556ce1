//! Editor configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Window title
    pub window_title: String,
    /// Initial window size
    pub window_width: f64,
    pub window_height: f64,
    /// Window icon, relative to the application directory
    pub icon_path: PathBuf,
    /// Optional background watermark image, validated when set
    pub watermark_path: Option<PathBuf>,
    /// Default extension offered by the file dialogs
    pub dialog_extension: String,
    /// Message shown in the welcome dialog at startup
    pub welcome_message: String,
    /// Depth of the surface undo history
    pub history_depth: usize,
}

impl Config {
    /// Verify that every configured startup asset exists. A missing asset
    /// aborts setup before the main loop starts, with the offending path
    /// in the diagnostic.
    pub fn validate_assets(&self, base_dir: &Path) -> Result<()> {
        let icon = base_dir.join(&self.icon_path);
        if !icon.is_file() {
            return Err(CoreError::MissingAsset(icon.display().to_string()));
        }

        if let Some(watermark) = &self.watermark_path {
            let watermark = base_dir.join(watermark);
            if !watermark.is_file() {
                return Err(CoreError::MissingAsset(watermark.display().to_string()));
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_title: "Seltzer".to_string(),
            window_width: 800.0,
            window_height: 600.0,
            icon_path: PathBuf::from("assets/icon.png"),
            watermark_path: None,
            dialog_extension: "txt".to_string(),
            welcome_message: "Welcome to Seltzer 0.1!\n\n\
                This editor is in development and may still contain rough \
                edges.\n\nPlease report anything broken on the issue tracker."
                .to_string(),
            history_depth: seltzer_surface::DEFAULT_HISTORY_DEPTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serde_round_trip() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.window_title, config.window_title);
        assert_eq!(parsed.icon_path, config.icon_path);
        assert_eq!(parsed.history_depth, config.history_depth);
    }

    #[test]
    fn test_validate_missing_icon() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();

        let err = config.validate_assets(dir.path()).unwrap_err();
        assert!(matches!(err, CoreError::MissingAsset(_)));
        assert!(err.to_string().contains("icon.png"));
    }

    #[test]
    fn test_validate_present_assets() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("assets")).unwrap();
        std::fs::write(dir.path().join("assets/icon.png"), b"png").unwrap();

        let mut config = Config::default();
        config.validate_assets(dir.path()).unwrap();

        // A configured watermark is checked the same way
        config.watermark_path = Some(PathBuf::from("assets/watermark.png"));
        assert!(config.validate_assets(dir.path()).is_err());

        std::fs::write(dir.path().join("assets/watermark.png"), b"png").unwrap();
        config.validate_assets(dir.path()).unwrap();
    }
}
