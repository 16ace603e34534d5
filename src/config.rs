use crate::utils::error::{AppError, AppResult};
use crate::utils::interactive::detect_editor;
use crate::view::ListFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub general: GeneralConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Directory holding the prompt store
    pub data_dir: PathBuf,
    pub editor: String,
    pub color: bool,
    #[serde(default)]
    pub content_preview: bool,
    /// Escape title and content when rendering the HTML list instead of
    /// inserting them as trusted markup
    #[serde(default)]
    pub escape_markup: bool,
    #[serde(default)]
    pub format: Option<ListFormat>,
    /// Upper bound in bytes for the stored collection
    #[serde(default)]
    pub storage_quota: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("promptpad");

        Self {
            general: GeneralConfig {
                data_dir,
                editor: detect_editor(None),
                color: true,
                content_preview: true,
                escape_markup: false,
                format: None,
                storage_quota: None,
            },
        }
    }
}

impl Config {
    pub fn load() -> AppResult<Self> {
        Self::load_custom(&Self::config_file_path())
    }

    pub fn ensure_config_exists() -> AppResult<()> {
        let config_path = Self::config_file_path();
        if !config_path.exists() {
            let default_config = Config::default();
            default_config.save()?;
        }
        Ok(())
    }

    pub fn load_custom(config_path: &Path) -> AppResult<Self> {
        if !config_path.exists() {
            let default_config = Config::default();
            default_config.save_to(config_path)?;
            return Ok(default_config);
        }

        let content =
            std::fs::read_to_string(config_path).map_err(|e| AppError::Io(e.to_string()))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| AppError::System(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.general.editor.trim().is_empty() {
            return Err(AppError::System("Editor cannot be empty".to_string()));
        }

        if self.general.data_dir.as_os_str().is_empty() {
            return Err(AppError::System("Data directory cannot be empty".to_string()));
        }

        if self.general.storage_quota == Some(0) {
            return Err(AppError::System(
                "Storage quota must be greater than zero when set".to_string(),
            ));
        }

        Ok(())
    }

    pub fn save(&self) -> AppResult<()> {
        self.save_to(&Self::config_file_path())
    }

    pub fn save_to(&self, config_path: &Path) -> AppResult<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AppError::Io(e.to_string()))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AppError::System(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content).map_err(|e| AppError::Io(e.to_string()))?;

        Ok(())
    }

    pub fn config_file_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("promptpad")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert!(config.general.data_dir.ends_with("promptpad"));
        assert!(!config.general.escape_markup);
    }

    #[test]
    fn test_load_custom_creates_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_custom(&path).unwrap();
        assert!(path.exists());

        let reloaded = Config::load_custom(&path).unwrap();
        assert_eq!(reloaded.general.data_dir, config.general.data_dir);
    }

    #[test]
    fn test_load_custom_reads_optional_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[general]
data_dir = "/tmp/promptpad-test"
editor = "vi"
color = false
escape_markup = true
format = "table"
storage_quota = 4096
"#,
        )
        .unwrap();

        let config = Config::load_custom(&path).unwrap();
        assert!(config.general.escape_markup);
        assert!(!config.general.content_preview);
        assert_eq!(config.general.format, Some(ListFormat::Table));
        assert_eq!(config.general.storage_quota, Some(4096));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.general.editor = " ".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.general.storage_quota = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_custom_rejects_invalid_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "general = [").unwrap();
        assert!(matches!(Config::load_custom(&path), Err(AppError::System(_))));
    }
}
