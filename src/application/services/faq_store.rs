use std::sync::Arc;

use arc_swap::ArcSwap;
use serde::Deserialize;

use crate::application::ports::{FaqSource, FaqSourceError};
use crate::domain::{FaqCollection, FaqEntry};

/// What the store does when its source does not exist yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingSourcePolicy {
    /// Serve an empty collection.
    Empty,
    /// Serve the built-in defaults without touching the source.
    SeedDefaults,
    /// Serve the built-in defaults and write them back to the source.
    #[default]
    SeedAndPersist,
}

pub fn default_faqs() -> Vec<FaqEntry> {
    vec![
        FaqEntry::new(
            "What is InteraVoice?",
            "InteraVoice is a voice-enabled AI assistant designed to help with customer support and FAQs.",
        ),
        FaqEntry::new(
            "How much does it cost?",
            "Please contact our sales team for pricing information.",
        ),
    ]
}

/// Holds the current FAQ collection.
///
/// Readers get an `Arc` snapshot; `reload` publishes a fresh collection
/// instead of mutating the one readers may still hold.
pub struct FaqStore {
    source: Arc<dyn FaqSource>,
    policy: MissingSourcePolicy,
    faqs: ArcSwap<FaqCollection>,
}

impl FaqStore {
    /// Loads the source once. Never fails: unreadable or malformed data is
    /// logged and leaves the store empty.
    pub async fn open(source: Arc<dyn FaqSource>, policy: MissingSourcePolicy) -> Self {
        tracing::info!(source = %source.describe(), ?policy, "Loading FAQ data");

        let entries = match source.load().await {
            Ok(Some(entries)) => {
                tracing::info!(count = entries.len(), "Loaded FAQ entries");
                entries
            }
            Ok(None) => {
                tracing::error!(source = %source.describe(), "FAQ source not found");
                Self::seed(source.as_ref(), policy).await
            }
            Err(e) => {
                tracing::error!(error = %e, "Error reading FAQ source");
                Vec::new()
            }
        };

        Self {
            source,
            policy,
            faqs: ArcSwap::from_pointee(FaqCollection::new(entries)),
        }
    }

    pub fn all_faqs(&self) -> Arc<FaqCollection> {
        self.faqs.load_full()
    }

    pub fn len(&self) -> usize {
        self.faqs.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Re-reads the source. On error the previous collection stays active.
    pub async fn reload(&self) -> Result<usize, FaqSourceError> {
        let entries = match self.source.load().await? {
            Some(entries) => entries,
            None => Self::seed(self.source.as_ref(), self.policy).await,
        };

        let count = entries.len();
        self.faqs.store(Arc::new(FaqCollection::new(entries)));
        tracing::info!(count = count, "FAQ collection reloaded");

        Ok(count)
    }

    async fn seed(source: &dyn FaqSource, policy: MissingSourcePolicy) -> Vec<FaqEntry> {
        match policy {
            MissingSourcePolicy::Empty => Vec::new(),
            MissingSourcePolicy::SeedDefaults => default_faqs(),
            MissingSourcePolicy::SeedAndPersist => {
                let defaults = default_faqs();
                match source.save(&defaults).await {
                    Ok(()) => tracing::info!(
                        count = defaults.len(),
                        source = %source.describe(),
                        "Created sample FAQ source"
                    ),
                    Err(e) => tracing::warn!(
                        error = %e,
                        "Failed to persist sample FAQs, serving them from memory"
                    ),
                }
                defaults
            }
        }
    }
}
