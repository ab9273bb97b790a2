//! Configuration file support for image-finder.
//!
//! # Configuration File Format
//!
//! ```toml
//! [api]
//! base_url = "https://pixabay.com/api/"
//! key = "your-api-key"
//! image_type = "photo"
//! orientation = "horizontal"
//! safesearch = true
//! timeout_secs = 30
//!
//! [timing]
//! input_quiet_ms = 200
//! scroll_quiet_ms = 500
//!
//! [lightbox]
//! selector = ".gallery a"
//! captions_data = "alt"
//! fade_speed_ms = 500
//!
//! [logging]
//! level = "warn"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{ApiConfig, LightboxConfig, LoggingConfig, TimingConfig};

/// Configuration file structure written by `config init`.
///
/// Reading goes through [`load_config`](super::load_config) so environment
/// overrides apply.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub timing: TimingConfig,

    #[serde(default)]
    pub lightbox: LightboxConfig,

    /// Logging section
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ConfigFile {
    /// Save configuration to a TOML file
    pub fn save(&self, path: &Path) -> Result<(), ConfigFileError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigFileError::Serialize(e.to_string()))?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| ConfigFileError::Io(e.to_string()))?;
        }
        std::fs::write(path, content).map_err(|e| ConfigFileError::Io(e.to_string()))
    }

    /// Default file contents with the API key left unset
    pub fn template() -> Self {
        let mut file = Self::default();
        file.api.key = None;
        file
    }
}

/// Configuration file errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Serialize error: {0}")]
    Serialize(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config;
    use std::fs::File;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn test_config_file_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let toml_content = r#"
[api]
key = "test-key"
safesearch = false
timeout_secs = 5

[timing]
scroll_quiet_ms = 250

[lightbox]
selector = ".results a"

[logging]
level = "debug"
"#;

        let mut file = File::create(&path).unwrap();
        file.write_all(toml_content.as_bytes()).unwrap();

        let config = load_config(&path).unwrap();

        assert_eq!(config.api.key, Some("test-key".to_string()));
        assert!(!config.api.safesearch);
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.timing.scroll_quiet_ms, 250);
        assert_eq!(config.timing.input_quiet_ms, 200);
        assert_eq!(config.lightbox.selector, ".results a");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_config_file_save_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = ConfigFile::template();
        config.api.key = Some("saved-key".to_string());
        config.timing.input_quiet_ms = 75;
        config.logging.level = "info".to_string();

        config.save(&path).unwrap();

        let loaded = load_config(&path).unwrap();
        assert_eq!(loaded.api.key, Some("saved-key".to_string()));
        assert_eq!(loaded.timing.input_quiet_ms, 75);
        assert_eq!(loaded.logging.level, "info");
    }

    #[test]
    fn test_config_file_nonexistent() {
        let path = PathBuf::from("/nonexistent/config.toml");
        assert!(load_config(&path).is_err());
    }

    #[test]
    fn test_config_file_invalid_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid.toml");

        std::fs::write(&path, "invalid = toml = content").unwrap();

        assert!(load_config(&path).is_err());
    }
}
