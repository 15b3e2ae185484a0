use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{FxError, Result};

/// Environment variable holding the generative-text API key.
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";
/// Environment variable holding the exchange-rate API key.
pub const EXCHANGE_API_KEY_VAR: &str = "EXCHANGE_API_KEY";

/// Top-level configuration for fxchat.
///
/// Loaded from `config.toml` (or `--config`). Secrets never live here; see
/// [`Secrets`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FxConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub rates: RatesConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
}

impl FxConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}

/// Server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Interface to bind.
    pub host: String,
    /// API server port.
    pub port: u16,
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
    /// Directory holding static assets such as `bg.jpg`.
    pub static_dir: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            log_level: "info".to_string(),
            static_dir: "templates".to_string(),
        }
    }
}

/// Exchange-rate service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RatesConfig {
    /// Base URL; the base currency code is appended as the last path segment.
    pub base_url: String,
}

impl Default for RatesConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.exchangerate-api.com/v4/latest/".to_string(),
        }
    }
}

/// Generative-text service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub base_url: String,
    pub model: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-2.0-flash".to_string(),
        }
    }
}

/// Settings shared by every outbound HTTP call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Per-request timeout in seconds. Unset means no timeout.
    pub timeout_secs: Option<u64>,
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// API keys read from the environment at startup.
#[derive(Clone)]
pub struct Secrets {
    pub gemini_api_key: String,
    pub exchange_api_key: String,
}

impl std::fmt::Debug for Secrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secrets")
            .field("gemini_api_key", &"<redacted>")
            .field("exchange_api_key", &"<redacted>")
            .finish()
    }
}

impl Secrets {
    /// Read both keys from the process environment.
    ///
    /// Fails if either variable is unset or empty.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read both keys through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &str| -> Result<String> {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| FxError::MissingSecret(name.to_string()))
        };

        Ok(Self {
            gemini_api_key: require(GEMINI_API_KEY_VAR)?,
            exchange_api_key: require(EXCHANGE_API_KEY_VAR)?,
        })
    }
}
