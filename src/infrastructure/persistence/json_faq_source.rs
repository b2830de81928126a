use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::application::ports::{FaqSource, FaqSourceError};
use crate::domain::FaqEntry;

pub const DEFAULT_FAQ_PATH: &str = "data/faqs.json";

/// FAQ list stored as a JSON array of `{"question", "answer"}` objects.
pub struct JsonFileFaqSource {
    path: PathBuf,
}

impl JsonFileFaqSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonFileFaqSource {
    fn default() -> Self {
        Self::new(DEFAULT_FAQ_PATH)
    }
}

#[async_trait]
impl FaqSource for JsonFileFaqSource {
    async fn load(&self) -> Result<Option<Vec<FaqEntry>>, FaqSourceError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(FaqSourceError::Io(e)),
        };

        let entries: Vec<FaqEntry> = serde_json::from_str(&raw)
            .map_err(|e| FaqSourceError::Malformed(format!("{}: {}", self.path.display(), e)))?;

        Ok(Some(entries))
    }

    async fn save(&self, entries: &[FaqEntry]) -> Result<(), FaqSourceError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| FaqSourceError::Serialization(e.to_string()))?;
        tokio::fs::write(&self.path, json).await?;

        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
