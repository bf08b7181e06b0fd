use crate::error::{Result, VocabError};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_EXPORT_FILENAME: &str = "vocabulary.json";
const DEFAULT_LINE_WIDTH: usize = 80;

/// Configuration for vocab, stored as config.json in the platform config directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VocabConfig {
    /// File name used when exporting
    #[serde(default = "default_export_filename")]
    pub export_filename: String,

    /// Extensions accepted by import (e.g. ".json")
    #[serde(default = "default_import_ext")]
    pub import_extensions: Vec<String>,

    /// Width list rows are truncated to
    #[serde(default = "default_line_width")]
    pub line_width: usize,
}

fn default_export_filename() -> String {
    DEFAULT_EXPORT_FILENAME.to_string()
}

fn default_import_ext() -> Vec<String> {
    vec![".json".to_string()]
}

fn default_line_width() -> usize {
    DEFAULT_LINE_WIDTH
}

impl Default for VocabConfig {
    fn default() -> Self {
        Self {
            export_filename: default_export_filename(),
            import_extensions: default_import_ext(),
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl VocabConfig {
    /// The platform config directory, if one can be determined
    pub fn default_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "vocab", "vocab").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(VocabError::Io)?;
        let mut config: VocabConfig = serde_json::from_str(&content).map_err(|e| {
            VocabError::Config(format!("{}: {}", config_path.display(), e))
        })?;
        config.import_extensions = config
            .import_extensions
            .iter()
            .map(|ext| normalize_ext(ext))
            .collect();
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(VocabError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(VocabError::Serialization)?;
        fs::write(config_path, content).map_err(VocabError::Io)?;
        Ok(())
    }

    /// Whether `path` carries one of the accepted import extensions
    pub fn accepts_import(&self, path: &Path) -> bool {
        let Some(ext) = path.extension() else {
            return false;
        };
        let ext = format!(".{}", ext.to_string_lossy().to_lowercase());
        self.import_extensions
            .iter()
            .any(|allowed| allowed.to_lowercase() == ext)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.list_all()
            .into_iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "export-filename" => {
                if value.trim().is_empty() {
                    return Err("export-filename cannot be empty".to_string());
                }
                self.export_filename = value.to_string();
            }
            "import-extensions" => {
                self.import_extensions = value
                    .split(',')
                    .map(str::trim)
                    .filter(|ext| !ext.is_empty())
                    .map(normalize_ext)
                    .collect();
            }
            "line-width" => {
                self.line_width = value
                    .parse()
                    .map_err(|_| format!("Invalid line-width: {}", value))?;
            }
            other => return Err(format!("Unknown config key: {}", other)),
        }
        Ok(())
    }

    pub fn list_all(&self) -> Vec<(String, String)> {
        vec![
            ("export-filename".to_string(), self.export_filename.clone()),
            (
                "import-extensions".to_string(),
                self.import_extensions.join(", "),
            ),
            ("line-width".to_string(), self.line_width.to_string()),
        ]
    }
}

fn normalize_ext(ext: &str) -> String {
    if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{}", ext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = VocabConfig::default();
        assert_eq!(config.export_filename, "vocabulary.json");
        assert_eq!(config.import_extensions, vec![".json"]);
    }

    #[test]
    fn test_accepts_json_only_by_default() {
        let config = VocabConfig::default();
        assert!(config.accepts_import(Path::new("words.json")));
        assert!(config.accepts_import(Path::new("WORDS.JSON")));
        assert!(!config.accepts_import(Path::new("words.txt")));
        assert!(!config.accepts_import(Path::new("words")));
    }

    #[test]
    fn test_set_and_get_keys() {
        let mut config = VocabConfig::default();
        config.set("import-extensions", "json, vocab").unwrap();
        assert_eq!(config.import_extensions, vec![".json", ".vocab"]);

        config.set("line-width", "120").unwrap();
        assert_eq!(config.get("line-width").as_deref(), Some("120"));

        assert!(config.set("line-width", "wide").is_err());
        assert!(config.set("export-filename", " ").is_err());
        assert!(config.set("colour", "red").is_err());
        assert_eq!(config.get("colour"), None);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = VocabConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, VocabConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_dir = temp_dir.path().join("nested");

        let config = VocabConfig {
            export_filename: "words.json".to_string(),
            ..VocabConfig::default()
        };
        config.save(&config_dir).unwrap();

        let loaded = VocabConfig::load(&config_dir).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_normalizes_extensions_and_fills_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"import_extensions": ["json", ".vocab"]}"#,
        )
        .unwrap();

        let config = VocabConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config.import_extensions, vec![".json", ".vocab"]);
        assert_eq!(config.export_filename, "vocabulary.json");
        assert_eq!(config.line_width, 80);
    }

    #[test]
    fn test_load_rejects_broken_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), "{").unwrap();

        let err = VocabConfig::load(temp_dir.path()).unwrap_err();
        assert!(matches!(err, VocabError::Config(_)));
    }
}
