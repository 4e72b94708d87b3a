use crate::error::{JotpadError, Result};
use crate::store::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PREVIEW_CHARS: usize = 100;

/// Configuration for jotpad, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JotpadConfig {
    /// Key of the slot holding the notes
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// How many characters of a body the list shows before "..."
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,

    /// Ask before deleting
    #[serde(default = "default_confirm_deletes")]
    pub confirm_deletes: bool,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_preview_chars() -> usize {
    DEFAULT_PREVIEW_CHARS
}

fn default_confirm_deletes() -> bool {
    true
}

impl Default for JotpadConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            preview_chars: default_preview_chars(),
            confirm_deletes: default_confirm_deletes(),
        }
    }
}

/// The settable keys, as spelled on the command line.
pub const CONFIG_KEYS: &[&str] = &["storage-key", "preview-chars", "confirm-deletes"];

impl JotpadConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: JotpadConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    /// Current value of `key` rendered as text.
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "storage-key" => Ok(self.storage_key.clone()),
            "preview-chars" => Ok(self.preview_chars.to_string()),
            "confirm-deletes" => Ok(self.confirm_deletes.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    /// Parses `value` and stores it under `key`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "storage-key" => {
                if value.trim().is_empty() {
                    return Err(JotpadError::Config("storage-key cannot be empty".into()));
                }
                self.storage_key = value.to_string();
            }
            "preview-chars" => {
                self.preview_chars = value.parse().map_err(|_| {
                    JotpadError::Config(format!("preview-chars must be a number, got '{}'", value))
                })?;
            }
            "confirm-deletes" => {
                self.confirm_deletes = parse_bool(value).ok_or_else(|| {
                    JotpadError::Config(format!(
                        "confirm-deletes must be true or false, got '{}'",
                        value
                    ))
                })?;
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

fn unknown_key(key: &str) -> JotpadError {
    JotpadError::Config(format!(
        "Unknown config key '{}'. Known keys: {}",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = JotpadConfig::default();
        assert_eq!(config.storage_key, "@texts");
        assert_eq!(config.preview_chars, 100);
        assert!(config.confirm_deletes);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = JotpadConfig::load(dir.path()).unwrap();
        assert_eq!(config, JotpadConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("nested");

        let mut config = JotpadConfig::default();
        config.set("preview-chars", "40").unwrap();
        config.save(&nested).unwrap();

        let loaded = JotpadConfig::load(&nested).unwrap();
        assert_eq!(loaded.preview_chars, 40);
    }

    #[test]
    fn test_partial_file_uses_field_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"confirm_deletes": false}"#).unwrap();

        let loaded = JotpadConfig::load(dir.path()).unwrap();
        assert!(!loaded.confirm_deletes);
        assert_eq!(loaded.storage_key, "@texts");
        assert_eq!(loaded.preview_chars, 100);
    }

    #[test]
    fn test_get_and_set_by_key() {
        let mut config = JotpadConfig::default();
        config.set("confirm-deletes", "no").unwrap();
        config.set("storage-key", "work").unwrap();
        assert_eq!(config.get("confirm-deletes").unwrap(), "false");
        assert_eq!(config.get("storage-key").unwrap(), "work");
    }

    #[test]
    fn test_rejects_bad_values_and_keys() {
        let mut config = JotpadConfig::default();
        assert!(config.set("preview-chars", "lots").is_err());
        assert!(config.set("confirm-deletes", "maybe").is_err());
        assert!(config.set("storage-key", "  ").is_err());
        assert!(matches!(
            config.get("file-ext"),
            Err(JotpadError::Config(msg)) if msg.contains("storage-key")
        ));
        assert_eq!(config, JotpadConfig::default());
    }
}
