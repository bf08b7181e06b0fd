use crate::commands::{CmdMessage, CmdResult};
use crate::config::VocabConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Show or change configuration. Changes are saved to `config_dir` when one is known.
pub fn run(
    config: &mut VocabConfig,
    config_dir: Option<&Path>,
    action: ConfigAction,
) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => Ok(CmdResult::default().with_config(config.clone())),
        ConfigAction::ShowKey(key) => {
            let message = match config.get(&key) {
                Some(val) => CmdMessage::info(format!("{} = {}", key, val)),
                None => CmdMessage::error(format!("Unknown config key: {}", key)),
            };
            Ok(CmdResult::default().with_message(message))
        }
        ConfigAction::Set(key, value) => {
            let mut updated = config.clone();
            if let Err(e) = updated.set(&key, &value) {
                return Ok(CmdResult::default().with_message(CmdMessage::error(e)));
            }
            // Only take the new value once it is on disk.
            if let Some(dir) = config_dir {
                updated.save(dir)?;
            }
            *config = updated;
            let display_val = config.get(&key).unwrap_or(value);
            Ok(CmdResult::default()
                .with_config(config.clone())
                .with_message(CmdMessage::success(format!("{} set to {}", key, display_val))))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_persists_to_config_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut config = VocabConfig::default();

        let result = run(
            &mut config,
            Some(temp_dir.path()),
            ConfigAction::Set("export-filename".into(), "words.json".into()),
        )
        .unwrap();

        assert!(!result.has_errors());
        assert_eq!(config.export_filename, "words.json");
        let loaded = VocabConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.export_filename, "words.json");
    }

    #[test]
    fn failed_save_keeps_previous_value() {
        let temp_dir = tempfile::tempdir().unwrap();
        let not_a_dir = temp_dir.path().join("config-file");
        std::fs::write(&not_a_dir, "").unwrap();
        let mut config = VocabConfig::default();

        let result = run(
            &mut config,
            Some(&not_a_dir),
            ConfigAction::Set("export-filename".into(), "words.json".into()),
        );

        assert!(result.is_err());
        assert_eq!(config, VocabConfig::default());
    }

    #[test]
    fn unknown_key_is_reported() {
        let mut config = VocabConfig::default();
        let result = run(&mut config, None, ConfigAction::ShowKey("nope".into())).unwrap();
        assert!(result.has_errors());

        let result = run(
            &mut config,
            None,
            ConfigAction::Set("nope".into(), "1".into()),
        )
        .unwrap();
        assert!(result.has_errors());
        assert_eq!(config, VocabConfig::default());
    }

    #[test]
    fn show_all_returns_config() {
        let mut config = VocabConfig::default();
        let result = run(&mut config, None, ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(VocabConfig::default()));
    }
}
