use crate::commands::{CmdMessage, CmdResult};
use crate::config::{JotpadConfig, CONFIG_KEYS};
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    Get(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = JotpadConfig::load(config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {
            for key in CONFIG_KEYS {
                result.add_message(CmdMessage::info(format!("{} = {}", key, config.get(key)?)));
            }
        }
        ConfigAction::Get(key) => {
            result.add_message(CmdMessage::info(format!("{} = {}", key, config.get(&key)?)));
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(config_dir)?;
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key,
                config.get(&key)?
            )));
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn show_all_lists_every_key() {
        let dir = TempDir::new().unwrap();
        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.messages.len(), CONFIG_KEYS.len());
        assert_eq!(result.messages[0].content, "storage-key = @texts");
    }

    #[test]
    fn set_persists() {
        let dir = TempDir::new().unwrap();
        run(
            dir.path(),
            ConfigAction::Set("preview-chars".into(), "20".into()),
        )
        .unwrap();

        let result = run(dir.path(), ConfigAction::Get("preview-chars".into())).unwrap();
        assert_eq!(result.messages[0].content, "preview-chars = 20");
    }

    #[test]
    fn unknown_key_fails() {
        let dir = TempDir::new().unwrap();
        assert!(run(dir.path(), ConfigAction::Get("colour".into())).is_err());
    }
}
