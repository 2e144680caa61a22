//! CLI configuration.
//!
//! All settings live in a single `config.toml` file at
//! `~/.config/slotbook/config.toml` by default.
//!
//! The `api_key` value supports secret references:
//! - `env::VAR_NAME` — resolved from the environment
//! - plain text — used as-is
//! When unset, the gateway falls back to `OPENROUTER_API_KEY`.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use slotbook_extract::OpenAiConfig;

/// Configuration for the slotbook CLI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Extraction model settings.
    #[serde(default)]
    pub llm: LlmSettings,

    /// Scheduling settings.
    #[serde(default)]
    pub scheduler: SchedulerSettings,

    /// Display settings.
    #[serde(default)]
    pub display: DisplaySettings,
}

/// Extraction model settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    /// Chat-completions base URL (defaults to OpenRouter).
    pub base_url: Option<String>,

    /// API key (supports the `env::` prefix).
    pub api_key: Option<String>,

    /// Model identifier.
    pub model: Option<String>,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            model: None,
            timeout_secs: 30,
        }
    }
}

impl LlmSettings {
    /// Converts to gateway configuration, leaving unset fields at the
    /// gateway's defaults.
    pub fn to_extractor_config(&self) -> OpenAiConfig {
        let mut config = OpenAiConfig::default();
        if let Some(ref base_url) = self.base_url {
            config = config.with_base_url(base_url);
        }
        if let Some(ref api_key) = self.api_key {
            config = config.with_api_key(api_key);
        }
        if let Some(ref model) = self.model {
            config = config.with_model(model);
        }
        config.with_timeout(Duration::from_secs(self.timeout_secs))
    }
}

/// Scheduling settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerSettings {
    /// Uniform slot duration in minutes, applied to every event.
    pub slot_minutes: i64,

    /// Whether colliding requests trigger the alternative-slot search.
    pub suggest: bool,
}

impl Default for SchedulerSettings {
    fn default() -> Self {
        Self {
            slot_minutes: 60,
            suggest: true,
        }
    }
}

/// Display settings for output formatting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Text to show when the agenda is empty.
    pub empty_text: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            empty_text: "No events scheduled.".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from the default path.
    pub fn load() -> Result<Self, String> {
        let path = Self::default_path();
        if path.exists() {
            let content = std::fs::read_to_string(&path)
                .map_err(|e| format!("failed to read config: {}", e))?;
            toml::from_str(&content).map_err(|e| format!("failed to parse config: {}", e))
        } else {
            Ok(Self::default())
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &PathBuf) -> Result<Self, String> {
        let content =
            std::fs::read_to_string(path).map_err(|e| format!("failed to read config: {}", e))?;
        toml::from_str(&content).map_err(|e| format!("failed to parse config: {}", e))
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        Self::default_config_dir().join("config.toml")
    }

    /// Returns the default configuration directory.
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("slotbook")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert!(config.llm.base_url.is_none());
        assert_eq!(config.llm.timeout_secs, 30);
        assert_eq!(config.scheduler.slot_minutes, 60);
        assert!(config.scheduler.suggest);
        assert_eq!(config.display.empty_text, "No events scheduled.");
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [scheduler]
            slot_minutes = 30
            "#,
        )
        .unwrap();

        assert_eq!(config.scheduler.slot_minutes, 30);
        assert!(config.scheduler.suggest);
        assert!(config.llm.model.is_none());
    }

    #[test]
    fn full_toml_round_trip() {
        let config: AppConfig = toml::from_str(
            r#"
            [llm]
            base_url = "https://api.openai.com/v1"
            api_key = "env::OPENAI_API_KEY"
            model = "gpt-4o"
            timeout_secs = 10

            [scheduler]
            slot_minutes = 45
            suggest = false

            [display]
            empty_text = "Nothing booked."
            "#,
        )
        .unwrap();

        assert_eq!(config.llm.base_url.as_deref(), Some("https://api.openai.com/v1"));
        assert_eq!(config.llm.api_key.as_deref(), Some("env::OPENAI_API_KEY"));
        assert_eq!(config.llm.timeout_secs, 10);
        assert_eq!(config.scheduler.slot_minutes, 45);
        assert!(!config.scheduler.suggest);
        assert_eq!(config.display.empty_text, "Nothing booked.");

        // And back out through the dump path.
        let dumped = toml::to_string_pretty(&config).unwrap();
        let reparsed: AppConfig = toml::from_str(&dumped).unwrap();
        assert_eq!(reparsed.scheduler.slot_minutes, 45);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[scheduler]\nslot_minutes = 15").unwrap();

        let config = AppConfig::load_from(&file.path().to_path_buf()).unwrap();
        assert_eq!(config.scheduler.slot_minutes, 15);
    }

    #[test]
    fn load_from_missing_file_errors() {
        let err = AppConfig::load_from(&PathBuf::from("/nonexistent/config.toml")).unwrap_err();
        assert!(err.contains("failed to read config"));
    }

    #[test]
    fn extractor_config_from_settings() {
        let settings = LlmSettings {
            base_url: Some("https://example.test/v1".to_string()),
            api_key: Some("sk-test".to_string()),
            model: Some("test-model".to_string()),
            timeout_secs: 5,
        };
        let config = settings.to_extractor_config();

        assert_eq!(config.base_url, "https://example.test/v1");
        assert_eq!(config.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.model, "test-model");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn extractor_config_defaults_when_unset() {
        let config = LlmSettings::default().to_extractor_config();
        assert_eq!(config.base_url, "https://openrouter.ai/api/v1");
        assert_eq!(config.model, "openai/gpt-4o-mini");
        assert!(config.api_key.is_none());
    }
}
