use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{FaqSource, FaqSourceError};
use crate::domain::FaqEntry;

/// Volatile FAQ source; `None` behaves like a missing file.
#[derive(Default)]
pub struct InMemoryFaqSource {
    entries: Mutex<Option<Vec<FaqEntry>>>,
}

impl InMemoryFaqSource {
    pub fn new(entries: Vec<FaqEntry>) -> Self {
        Self {
            entries: Mutex::new(Some(entries)),
        }
    }

    pub fn missing() -> Self {
        Self::default()
    }

    pub fn replace(&self, entries: Vec<FaqEntry>) {
        if let Ok(mut guard) = self.entries.lock() {
            *guard = Some(entries);
        }
    }

    pub fn snapshot(&self) -> Option<Vec<FaqEntry>> {
        self.entries.lock().ok().and_then(|guard| guard.clone())
    }
}

#[async_trait]
impl FaqSource for InMemoryFaqSource {
    async fn load(&self) -> Result<Option<Vec<FaqEntry>>, FaqSourceError> {
        Ok(self.snapshot())
    }

    async fn save(&self, entries: &[FaqEntry]) -> Result<(), FaqSourceError> {
        self.replace(entries.to_vec());
        Ok(())
    }

    fn describe(&self) -> String {
        "in-memory".to_string()
    }
}
