use crate::error::ConfigError;
use crate::llm;
use crate::platform::Platform;
use crate::prompt::PromptStore;
use anyhow::Context;
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    /// OpenAI API key. Absence is degraded mode, not an error: generation
    /// falls back to the local template composer.
    pub api_key: Option<String>,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Hard ceiling on the external generation call.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Whether the CLI shortens article URLs before composing the share.
    #[serde(default = "default_true")]
    pub shorten_urls: bool,

    /// Persisted per-platform prompt overrides.
    #[serde(default)]
    pub prompts: PromptOverrides,
}

/// Administrator-supplied replacements for the built-in platform prompts.
/// An absent or blank entry means "use the built-in default".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptOverrides {
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub tiktok: Option<String>,
}

impl PromptOverrides {
    #[must_use]
    pub fn for_platform(&self, platform: Platform) -> Option<&str> {
        match platform {
            Platform::Twitter => self.twitter.as_deref(),
            Platform::Facebook => self.facebook.as_deref(),
            Platform::Instagram => self.instagram.as_deref(),
            Platform::Tiktok => self.tiktok.as_deref(),
        }
    }
}

fn default_model() -> String {
    llm::DEFAULT_MODEL.into()
}

fn default_temperature() -> f64 {
    llm::DEFAULT_TEMPERATURE
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: default_config_path(),
            api_key: None,
            model: default_model(),
            temperature: default_temperature(),
            request_timeout_secs: default_request_timeout_secs(),
            shorten_urls: true,
            prompts: PromptOverrides::default(),
        }
    }
}

fn default_config_path() -> PathBuf {
    let home = UserDirs::new().map_or_else(|| PathBuf::from("."), |u| u.home_dir().to_path_buf());
    home.join(".oakwell").join("config.toml")
}

impl Config {
    pub fn load_or_init() -> anyhow::Result<Self> {
        let config_path = default_config_path();
        let oakwell_dir = config_path
            .parent()
            .context("config path has no parent directory")?
            .to_path_buf();

        if !oakwell_dir.exists() {
            fs::create_dir_all(&oakwell_dir).context("Failed to create .oakwell directory")?;
        }

        if config_path.exists() {
            let mut config = Self::load_from(&config_path)?;
            config.config_path = config_path;
            Ok(config)
        } else {
            let config = Self {
                config_path: config_path.clone(),
                ..Self::default()
            };
            config.save()?;
            Ok(config)
        }
    }

    pub fn load_from(path: &std::path::Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).context("Failed to read config file")?;
        let mut config: Config = toml::from_str(&contents).context("Failed to parse config file")?;
        config.config_path = path.to_path_buf();
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::Validation(format!(
                "temperature {} out of range 0.0..=2.0",
                self.temperature
            )));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "request_timeout_secs must be at least 1".into(),
            ));
        }
        Ok(())
    }

    pub fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var("OAKWELL_API_KEY").or_else(|_| std::env::var("OPENAI_API_KEY"))
        {
            if !key.is_empty() {
                self.api_key = Some(key);
            }
        }

        if let Ok(model) = std::env::var("OAKWELL_MODEL") {
            if !model.is_empty() {
                self.model = model;
            }
        }

        if let Ok(temp_str) = std::env::var("OAKWELL_TEMPERATURE") {
            if let Ok(temp) = temp_str.parse::<f64>() {
                if (0.0..=2.0).contains(&temp) {
                    self.temperature = temp;
                }
            }
        }
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let toml_str = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&self.config_path, toml_str).context("Failed to write config file")?;
        Ok(())
    }
}

impl PromptStore for Config {
    fn prompt_override(&self, platform: Platform) -> anyhow::Result<Option<String>> {
        Ok(self
            .prompts
            .for_platform(platform)
            .map(std::string::ToString::to_string))
    }
}
