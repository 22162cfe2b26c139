//! Application configuration
//!
//! Settings come from an optional YAML file, then environment variables:
//!
//! ```yaml
//! server:
//!   host: 127.0.0.1
//!   port: 7860
//! translator:
//!   provider: google   # or "mock"
//!   api_key: null      # GOOGLE_TRANSLATE_API_KEY takes precedence
//!   max_input_chars: 5000
//! logging:
//!   level: info
//! ```
//!
//! | Variable                   | Setting                 |
//! |----------------------------|-------------------------|
//! | `INDIC_TRANSLATE_HOST`     | `server.host`           |
//! | `INDIC_TRANSLATE_PORT`     | `server.port`           |
//! | `INDIC_TRANSLATE_PROVIDER` | `translator.provider`   |
//! | `GOOGLE_TRANSLATE_API_KEY` | `translator.api_key`    |
//! | `INDIC_TRANSLATE_LOG`      | `logging.level`         |

use crate::error::{MtError, MtResult};
use crate::google_translate::{API_KEY_ENV, GoogleTranslateProvider};
use crate::mock::MockTranslator;
use crate::request::DEFAULT_MAX_INPUT_CHARS;
use crate::service::TranslationService;
use crate::translator::MachineTranslator;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Config file read when no path is given, if it exists
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub translator: TranslatorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslatorConfig {
    #[serde(default)]
    pub provider: ProviderKind,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    Google,
    Mock,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    7860
}

fn default_max_input_chars() -> usize {
    DEFAULT_MAX_INPUT_CHARS
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::default(),
            api_key: None,
            max_input_chars: default_max_input_chars(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl std::fmt::Debug for TranslatorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslatorConfig")
            .field("provider", &self.provider)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("max_input_chars", &self.max_input_chars)
            .finish()
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = MtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "google" => Ok(ProviderKind::Google),
            "mock" => Ok(ProviderKind::Mock),
            other => Err(MtError::ConfigError(format!(
                "Unknown translation provider '{}' (expected 'google' or 'mock')",
                other
            ))),
        }
    }
}

impl AppConfig {
    /// Load configuration and apply environment overrides
    ///
    /// With an explicit `path` the file must exist. Without one,
    /// `config.yaml` in the working directory is used when present and
    /// defaults otherwise.
    pub fn load(path: Option<&Path>) -> MtResult<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_PATH))?
            }
            None => Self::default(),
        };

        config.with_overrides(|key| std::env::var(key).ok())
    }

    /// Read a YAML config file
    pub fn from_file(path: &Path) -> MtResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            MtError::ConfigError(format!("Failed to read '{}': {}", path.display(), e))
        })?;
        Self::from_yaml(&content).map_err(|e| match e {
            MtError::ConfigError(msg) => {
                MtError::ConfigError(format!("{} ({})", msg, path.display()))
            }
            other => other,
        })
    }

    /// Parse YAML config text; an empty document yields defaults
    pub fn from_yaml(content: &str) -> MtResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
            .map_err(|e| MtError::ConfigError(format!("Invalid config file: {}", e)))
    }

    /// Apply overrides looked up by variable name
    pub fn with_overrides<F>(mut self, lookup: F) -> MtResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("INDIC_TRANSLATE_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("INDIC_TRANSLATE_PORT") {
            self.server.port = port.trim().parse().map_err(|_| {
                MtError::ConfigError(format!("Invalid port in INDIC_TRANSLATE_PORT: {}", port))
            })?;
        }
        if let Some(provider) = lookup("INDIC_TRANSLATE_PROVIDER") {
            self.translator.provider = provider.parse()?;
        }
        if let Some(key) = lookup(API_KEY_ENV).filter(|k| !k.trim().is_empty()) {
            self.translator.api_key = Some(key);
        }
        if let Some(level) = lookup("INDIC_TRANSLATE_LOG") {
            self.logging.level = level;
        }
        Ok(self)
    }

    /// Address the web server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Build the configured translation provider
    pub fn build_translator(&self) -> MtResult<Arc<dyn MachineTranslator>> {
        let translator: Arc<dyn MachineTranslator> = match self.translator.provider {
            ProviderKind::Google => Arc::new(GoogleTranslateProvider::from_key(
                self.translator.api_key.clone(),
            )?),
            ProviderKind::Mock => Arc::new(MockTranslator::with_sample_phrases()),
        };
        info!("Using translation provider: {}", translator.provider_name());
        Ok(translator)
    }

    /// Build a translation service from this configuration
    pub fn build_service(&self) -> MtResult<TranslationService> {
        Ok(TranslationService::new(self.build_translator()?)
            .with_max_input_chars(self.translator.max_input_chars))
    }
}
