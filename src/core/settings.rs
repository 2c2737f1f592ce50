use crate::core::error::BotError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const PRACTICUM_TOKEN_VAR: &str = "SECRET_PRACTICUM_TOKEN";
pub const TELEGRAM_TOKEN_VAR: &str = "TELEGRAM_TOKEN_BOT";
pub const TELEGRAM_CHAT_ID_VAR: &str = "MY_ID";

const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
const DEFAULT_TELEGRAM_API: &str = "https://api.telegram.org";
const DEFAULT_INTERVAL_SECS: u64 = 600;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub practicum: PracticumSettings,
    pub telegram: TelegramSettings,
    pub polling: PollingSettings,
    pub debug: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PracticumSettings {
    pub endpoint: String,
}

impl Default for PracticumSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TelegramSettings {
    pub api_base: String,
}

impl Default for TelegramSettings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_TELEGRAM_API.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PollingSettings {
    pub interval_secs: u64,
}

impl Default for PollingSettings {
    fn default() -> Self {
        Self {
            interval_secs: DEFAULT_INTERVAL_SECS,
        }
    }
}

impl PollingSettings {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

impl Settings {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("homework-bot").join("config.toml"))
    }

    /// Loads from `path`, or from the default location when `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::config_path().context("Could not determine config directory")?,
        };

        if !path.exists() {
            tracing::info!(?path, "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        tracing::info!(?path, "Loaded config");
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.practicum.endpoint.trim().is_empty() {
            anyhow::bail!("practicum.endpoint must not be empty");
        }
        if self.telegram.api_base.trim().is_empty() {
            anyhow::bail!("telegram.api_base must not be empty");
        }
        if self.polling.interval_secs == 0 {
            anyhow::bail!("polling.interval_secs must be greater than zero");
        }
        Ok(())
    }
}

/// Secrets read from the environment once at startup.
#[derive(Clone)]
pub struct Credentials {
    pub practicum_token: String,
    pub telegram_token: String,
    pub chat_id: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("practicum_token", &"<redacted>")
            .field("telegram_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

impl Credentials {
    /// Empty values count as missing; every missing name is reported.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, BotError> {
        let mut missing = Vec::new();
        let mut require = |name: &'static str| match lookup(name) {
            Some(value) if !value.trim().is_empty() => value,
            _ => {
                missing.push(name);
                String::new()
            }
        };

        let practicum_token = require(PRACTICUM_TOKEN_VAR);
        let telegram_token = require(TELEGRAM_TOKEN_VAR);
        let chat_id = require(TELEGRAM_CHAT_ID_VAR);

        if !missing.is_empty() {
            return Err(BotError::MissingConfiguration { missing });
        }

        Ok(Self {
            practicum_token,
            telegram_token,
            chat_id,
        })
    }

    /// The review API token alone, for commands that never send messages.
    pub fn practicum_token_from_env() -> Result<String, BotError> {
        match std::env::var(PRACTICUM_TOKEN_VAR) {
            Ok(token) if !token.trim().is_empty() => Ok(token),
            _ => Err(BotError::MissingConfiguration {
                missing: vec![PRACTICUM_TOKEN_VAR],
            }),
        }
    }
}
