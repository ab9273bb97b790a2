//! Configuration management.

mod file_config;

pub use file_config::{ConfigFile, ConfigFileError};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// File name looked up by [`find_config_file`]
pub const CONFIG_FILE_NAME: &str = "image-finder.toml";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Search API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Debounce quiet periods
    #[serde(default)]
    pub timing: TimingConfig,

    /// Lightbox settings
    #[serde(default)]
    pub lightbox: LightboxConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Search API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the search endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key (falls back to `PIXABAY_API_KEY`)
    #[serde(default)]
    pub key: Option<String>,

    #[serde(default = "default_image_type")]
    pub image_type: String,

    #[serde(default = "default_orientation")]
    pub orientation: String,

    #[serde(default = "default_true")]
    pub safesearch: bool,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            key: std::env::var("PIXABAY_API_KEY").ok(),
            image_type: default_image_type(),
            orientation: default_orientation(),
            safesearch: true,
            timeout_secs: default_timeout(),
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Configured key, or the `PIXABAY_API_KEY` environment variable
    pub fn resolved_key(&self) -> Option<String> {
        self.key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| std::env::var("PIXABAY_API_KEY").ok())
    }
}

fn default_base_url() -> String {
    "https://pixabay.com/api/".to_string()
}

fn default_image_type() -> String {
    "photo".to_string()
}

fn default_orientation() -> String {
    "horizontal".to_string()
}

fn default_true() -> bool {
    true
}

fn default_timeout() -> u64 {
    30
}

/// Debounce configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Quiet period before the search input is checked
    #[serde(default = "default_input_quiet")]
    pub input_quiet_ms: u64,

    /// Quiet period before the end-of-results check runs
    #[serde(default = "default_scroll_quiet")]
    pub scroll_quiet_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            input_quiet_ms: default_input_quiet(),
            scroll_quiet_ms: default_scroll_quiet(),
        }
    }
}

impl TimingConfig {
    pub fn input_quiet(&self) -> Duration {
        Duration::from_millis(self.input_quiet_ms)
    }

    pub fn scroll_quiet(&self) -> Duration {
        Duration::from_millis(self.scroll_quiet_ms)
    }
}

fn default_input_quiet() -> u64 {
    200
}

fn default_scroll_quiet() -> u64 {
    500
}

/// Lightbox configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LightboxConfig {
    /// CSS selector of the linkable items
    #[serde(default = "default_selector")]
    pub selector: String,

    /// Attribute of the inner image used as caption
    #[serde(default = "default_captions_data")]
    pub captions_data: String,

    #[serde(default = "default_fade_speed")]
    pub fade_speed_ms: u64,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            selector: default_selector(),
            captions_data: default_captions_data(),
            fade_speed_ms: default_fade_speed(),
        }
    }
}

fn default_selector() -> String {
    ".gallery a".to_string()
}

fn default_captions_data() -> String {
    "alt".to_string()
}

fn default_fade_speed() -> u64 {
    500
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter level when neither `-v`/`-q` nor `RUST_LOG` is given
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Load configuration from a file, with `IMAGE_FINDER_*` environment overrides
pub fn load_config(path: &PathBuf) -> Result<Config, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::from(path.as_path()))
        .add_source(
            config::Environment::with_prefix("IMAGE_FINDER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

/// Get the default configuration (from env vars or defaults)
pub fn get_config() -> Config {
    Config::default()
}

/// Look for a config file in the working directory, then the platform config dir
pub fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join("image-finder").join("config.toml"))
        .filter(|path| path.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "https://pixabay.com/api/");
        assert_eq!(config.api.image_type, "photo");
        assert_eq!(config.api.orientation, "horizontal");
        assert!(config.api.safesearch);
        assert_eq!(config.timing.input_quiet(), Duration::from_millis(200));
        assert_eq!(config.timing.scroll_quiet(), Duration::from_millis(500));
        assert_eq!(config.lightbox.selector, ".gallery a");
        assert_eq!(config.lightbox.captions_data, "alt");
        assert_eq!(config.lightbox.fade_speed_ms, 500);
    }

    #[test]
    fn test_load_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("image-finder.toml");
        std::fs::write(
            &path,
            r#"
[api]
key = "file-key"
orientation = "all"

[timing]
input_quiet_ms = 50
"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.api.key.as_deref(), Some("file-key"));
        assert_eq!(config.api.orientation, "all");
        assert_eq!(config.api.image_type, "photo");
        assert_eq!(config.timing.input_quiet_ms, 50);
        assert_eq!(config.timing.scroll_quiet_ms, 500);
    }

    #[test]
    fn test_load_config_env_override() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("image-finder.toml");
        std::fs::write(&path, "[lightbox]\nfade_speed_ms = 500\n").unwrap();

        std::env::set_var("IMAGE_FINDER_LIGHTBOX__FADE_SPEED_MS", "250");
        let config = load_config(&path);
        std::env::remove_var("IMAGE_FINDER_LIGHTBOX__FADE_SPEED_MS");

        assert_eq!(config.unwrap().lightbox.fade_speed_ms, 250);
    }

    #[test]
    fn test_load_config_logging_level() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("image-finder.toml");
        std::fs::write(&path, "[logging]\nlevel = \"debug\"\n").unwrap();

        assert_eq!(load_config(&path).unwrap().logging.level, "debug");
        assert_eq!(Config::default().logging.level, "warn");
    }

    #[test]
    fn test_resolved_key_prefers_config() {
        let api = ApiConfig {
            key: Some("explicit".to_string()),
            ..ApiConfig::default()
        };
        assert_eq!(api.resolved_key().as_deref(), Some("explicit"));
    }
}
