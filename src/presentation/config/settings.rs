use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use super::Environment;
use crate::application::services::{DEFAULT_FALLBACK_MESSAGE, MissingSourcePolicy};
use crate::domain::{DEFAULT_THRESHOLD, Threshold, ThresholdError};
use crate::infrastructure::audio::{TranscriptionProvider, WhisperOptions};
use crate::infrastructure::observability::TracingConfig;
use crate::infrastructure::persistence::DEFAULT_FAQ_PATH;

pub const CONFIG_PATH_ENV: &str = "INTERAVOICE_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "config/interavoice.toml";
pub const DEFAULT_EMPTY_QUESTION_MESSAGE: &str = "Please type a question first.";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("reading {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("parsing {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
    #[error(transparent)]
    Threshold(#[from] ThresholdError),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub environment: Environment,
    pub server: ServerSettings,
    pub faq: FaqSettings,
    pub chat: ChatSettings,
    pub transcription: TranscriptionSettings,
    pub logging: LoggingSettings,
    pub web: WebSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Body cap for the JSON endpoints; uploads use `transcription.max_file_size_mb`.
    pub max_json_body_kb: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            max_json_body_kb: 16,
        }
    }
}

impl ServerSettings {
    pub fn max_json_body_bytes(&self) -> usize {
        self.max_json_body_kb * 1024
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FaqSettings {
    pub path: PathBuf,
    pub missing_source: MissingSourcePolicy,
    pub threshold: f64,
}

impl Default for FaqSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_FAQ_PATH),
            missing_source: MissingSourcePolicy::default(),
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChatSettings {
    pub fallback_message: String,
    pub empty_question_message: String,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            fallback_message: DEFAULT_FALLBACK_MESSAGE.to_string(),
            empty_question_message: DEFAULT_EMPTY_QUESTION_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TranscriptionSettings {
    pub provider: TranscriptionProvider,
    pub model: String,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub azure_deployment: Option<String>,
    pub azure_api_version: String,
    pub max_file_size_mb: usize,
    pub timeout_secs: u64,
}

impl Default for TranscriptionSettings {
    fn default() -> Self {
        Self {
            provider: TranscriptionProvider::default(),
            model: "whisper-1".to_string(),
            api_key: None,
            base_url: None,
            azure_deployment: None,
            azure_api_version: "2024-02-01".to_string(),
            max_file_size_mb: 10,
            timeout_secs: 30,
        }
    }
}

impl TranscriptionSettings {
    pub fn max_upload_bytes(&self) -> usize {
        self.max_file_size_mb * 1024 * 1024
    }

    pub fn whisper_options(&self) -> WhisperOptions {
        WhisperOptions {
            model: self.model.clone(),
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
            azure_deployment: self.azure_deployment.clone(),
            azure_api_version: self.azure_api_version.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
    pub log_dir: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info,interavoice=debug,tower_http=debug".to_string(),
            enable_json: false,
            log_dir: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WebSettings {
    pub static_dir: Option<PathBuf>,
}

impl Settings {
    /// File named by `INTERAVOICE_CONFIG` (or the default path) overlaid with
    /// environment variables. A missing file means built-in defaults.
    pub fn load() -> Result<Self, SettingsError> {
        let path = std::env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

        let mut settings = match Self::from_file(&path)? {
            Some(settings) => settings,
            None => Self::default(),
        };
        settings.apply_overrides(|key| std::env::var(key).ok())?;
        settings.validate()?;

        Ok(settings)
    }

    pub fn from_file(path: &Path) -> Result<Option<Self>, SettingsError> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(SettingsError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        Self::from_toml(&raw)
            .map(Some)
            .map_err(|source| SettingsError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }

    pub fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Overrides individual values from `lookup` (the process environment in
    /// production, a map in tests).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(env) = lookup("APP_ENV") {
            self.environment = Environment::try_from(env).map_err(|message| {
                SettingsError::InvalidValue {
                    key: "APP_ENV",
                    message,
                }
            })?;
        }
        if let Some(host) = lookup("SERVER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("SERVER_PORT") {
            self.server.port = port.parse().map_err(|e| SettingsError::InvalidValue {
                key: "SERVER_PORT",
                message: format!("{}: {}", port, e),
            })?;
        }
        if let Some(path) = lookup("FAQ_PATH") {
            self.faq.path = PathBuf::from(path);
        }
        if let Some(threshold) = lookup("MATCH_THRESHOLD") {
            self.faq.threshold = threshold.parse().map_err(|e| SettingsError::InvalidValue {
                key: "MATCH_THRESHOLD",
                message: format!("{}: {}", threshold, e),
            })?;
        }
        if let Some(provider) = lookup("TRANSCRIPTION_PROVIDER") {
            self.transcription.provider =
                TranscriptionProvider::try_from(provider).map_err(|message| {
                    SettingsError::InvalidValue {
                        key: "TRANSCRIPTION_PROVIDER",
                        message,
                    }
                })?;
        }
        if let Some(key) = lookup("OPENAI_API_KEY") {
            self.transcription.api_key = Some(key);
        }
        if let Some(url) = lookup("TRANSCRIPTION_BASE_URL") {
            self.transcription.base_url = Some(url);
        }
        if let Some(format) = lookup("LOG_FORMAT") {
            self.logging.enable_json = format.eq_ignore_ascii_case("json");
        }
        if let Some(dir) = lookup("LOG_DIR") {
            self.logging.log_dir = Some(PathBuf::from(dir));
        }
        if let Some(dir) = lookup("STATIC_DIR") {
            self.web.static_dir = Some(PathBuf::from(dir));
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        self.threshold()?;
        if self.server.max_json_body_kb == 0 {
            return Err(SettingsError::InvalidValue {
                key: "server.max_json_body_kb",
                message: "must be greater than zero".to_string(),
            });
        }
        if self.transcription.max_file_size_mb == 0 {
            return Err(SettingsError::InvalidValue {
                key: "transcription.max_file_size_mb",
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    pub fn threshold(&self) -> Result<Threshold, ThresholdError> {
        Threshold::new(self.faq.threshold)
    }

    pub fn tracing_config(&self) -> TracingConfig {
        TracingConfig {
            environment: self.environment.to_string(),
            json_format: self.logging.enable_json,
            filter: self.logging.level.clone(),
            log_dir: self.logging.log_dir.clone(),
        }
    }
}
