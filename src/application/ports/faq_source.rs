use async_trait::async_trait;

use crate::domain::FaqEntry;

/// Backing storage for the FAQ list.
#[async_trait]
pub trait FaqSource: Send + Sync {
    /// Returns `Ok(None)` when the source does not exist yet.
    async fn load(&self) -> Result<Option<Vec<FaqEntry>>, FaqSourceError>;

    async fn save(&self, entries: &[FaqEntry]) -> Result<(), FaqSourceError>;

    fn describe(&self) -> String;
}

#[derive(Debug, thiserror::Error)]
pub enum FaqSourceError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed faq data: {0}")]
    Malformed(String),
    #[error("serialization failed: {0}")]
    Serialization(String),
}
