use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_SETTINGS_FILE: &str = "passforge.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("toml decode error: {0}")]
    TomlDecode(#[from] toml::de::Error),
    #[error("toml encode error: {0}")]
    TomlEncode(#[from] toml::ser::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

pub type SettingsResult<T> = Result<T, SettingsError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Limits applied while prompting for counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptSettings {
    pub max_attempts: u32,
    pub min_count: u32,
    pub max_count: u32,
    pub allow_cancel: bool,
}

impl Default for PromptSettings {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            min_count: 0,
            max_count: 10,
            allow_cancel: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Filter directive used when `RUST_LOG` is unset.
    pub level: String,
    pub format: LogFormat,
    /// Append logs to this file instead of stderr.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Pretty,
            file: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub prompt: PromptSettings,
    pub logging: LoggingSettings,
}

impl Settings {
    pub fn validate(&self) -> SettingsResult<()> {
        if self.prompt.max_attempts == 0 {
            return Err(SettingsError::Invalid(
                "prompt.max_attempts must be at least 1".to_string(),
            ));
        }
        if self.prompt.min_count > self.prompt.max_count {
            return Err(SettingsError::Invalid(format!(
                "prompt.min_count ({}) cannot exceed prompt.max_count ({})",
                self.prompt.min_count, self.prompt.max_count
            )));
        }
        Ok(())
    }
}

pub fn parse_settings(content: &str) -> SettingsResult<Settings> {
    let settings: Settings = toml::from_str(content)?;
    settings.validate()?;
    Ok(settings)
}

/// Load settings from `path`, falling back to defaults when it does not exist.
pub fn load_settings(path: &Path) -> SettingsResult<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let content = std::fs::read_to_string(path)?;
    parse_settings(&content)
}

/// Write the default settings to `path`. Refuses to overwrite an existing file.
pub fn write_default_settings(path: &Path) -> SettingsResult<()> {
    if path.exists() {
        return Err(SettingsError::Invalid(format!(
            "{} already exists",
            path.display()
        )));
    }
    let encoded = toml::to_string_pretty(&Settings::default())?;
    std::fs::write(path, encoded)?;
    Ok(())
}
