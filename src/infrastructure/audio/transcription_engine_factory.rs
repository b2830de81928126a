use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};

use super::azure_whisper_engine::AzureWhisperEngine;
use super::openai_whisper_engine::OpenAiWhisperEngine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptionProvider {
    #[default]
    Disabled,
    #[serde(rename = "openai")]
    OpenAi,
    Azure,
}

impl TryFrom<String> for TranscriptionProvider {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "disabled" | "none" | "off" => Ok(Self::Disabled),
            "openai" => Ok(Self::OpenAi),
            "azure" => Ok(Self::Azure),
            other => Err(format!(
                "Invalid transcription provider: {}. Expected: disabled, openai, or azure",
                other
            )),
        }
    }
}

/// Connection details shared by the cloud Whisper providers.
#[derive(Debug, Clone)]
pub struct WhisperOptions {
    pub model: String,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub azure_deployment: Option<String>,
    pub azure_api_version: String,
    pub timeout: Duration,
}

pub struct TranscriptionEngineFactory;

impl TranscriptionEngineFactory {
    /// Returns `None` when speech-to-text is disabled.
    pub fn create(
        provider: TranscriptionProvider,
        options: &WhisperOptions,
    ) -> Result<Option<Arc<dyn TranscriptionEngine>>, TranscriptionError> {
        if provider == TranscriptionProvider::Disabled {
            return Ok(None);
        }

        let key = options
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                TranscriptionError::Configuration(format!(
                    "API key required for {:?} Whisper",
                    provider
                ))
            })?;

        let client = reqwest::Client::builder()
            .timeout(options.timeout)
            .build()
            .map_err(|e| TranscriptionError::Configuration(format!("http client: {}", e)))?;

        let engine: Arc<dyn TranscriptionEngine> = match provider {
            TranscriptionProvider::OpenAi => Arc::new(
                OpenAiWhisperEngine::new(
                    key,
                    options.base_url.clone(),
                    Some(options.model.clone()),
                )
                .with_client(client),
            ),
            TranscriptionProvider::Azure => {
                let base_url = options.base_url.as_deref().ok_or_else(|| {
                    TranscriptionError::Configuration(
                        "base_url required for Azure Whisper".to_string(),
                    )
                })?;
                let deployment = options
                    .azure_deployment
                    .as_deref()
                    .unwrap_or(options.model.as_str());
                Arc::new(
                    AzureWhisperEngine::new(
                        base_url,
                        deployment,
                        &key,
                        &options.azure_api_version,
                    )
                    .with_client(client),
                )
            }
            TranscriptionProvider::Disabled => return Ok(None),
        };

        tracing::info!(?provider, model = %options.model, "Transcription engine created");

        Ok(Some(engine))
    }
}
