use super::faq_entry::FaqEntry;

/// An accepted match: the winning entry and the score it cleared the threshold with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaqMatch<'a> {
    pub entry: &'a FaqEntry,
    pub score: f64,
}

impl<'a> FaqMatch<'a> {
    pub fn new(entry: &'a FaqEntry, score: f64) -> Self {
        Self { entry, score }
    }

    pub fn question(&self) -> &'a str {
        &self.entry.question
    }

    pub fn answer(&self) -> &'a str {
        &self.entry.answer
    }
}
