use std::ops::Deref;

use super::faq_entry::FaqEntry;

/// Ordered, read-only set of FAQ entries. Position is the only identity.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FaqCollection {
    entries: Vec<FaqEntry>,
}

impl FaqCollection {
    pub fn new(entries: Vec<FaqEntry>) -> Self {
        Self { entries }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }
}

impl Deref for FaqCollection {
    type Target = [FaqEntry];

    fn deref(&self) -> &Self::Target {
        &self.entries
    }
}

impl From<Vec<FaqEntry>> for FaqCollection {
    fn from(entries: Vec<FaqEntry>) -> Self {
        Self::new(entries)
    }
}

impl FromIterator<FaqEntry> for FaqCollection {
    fn from_iter<I: IntoIterator<Item = FaqEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
