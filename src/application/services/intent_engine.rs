use crate::application::services::similarity::similarity;
use crate::domain::{FaqEntry, FaqMatch, Threshold};

/// Picks the FAQ entry whose question is closest to the user's text.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntentEngine {
    threshold: Threshold,
}

impl IntentEngine {
    pub fn new(threshold: Threshold) -> Self {
        tracing::info!(threshold = %threshold, "Intent engine initialized");
        Self { threshold }
    }

    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Best scoring entry if its score reaches the threshold.
    ///
    /// Only a strictly higher score replaces the running best, so among equal
    /// scores the earliest entry wins.
    pub fn best_match<'a>(&self, user_text: &str, faqs: &'a [FaqEntry]) -> Option<FaqMatch<'a>> {
        tracing::debug!(
            chars = user_text.chars().count(),
            candidates = faqs.len(),
            "Finding intent"
        );

        let mut best: Option<&'a FaqEntry> = None;
        let mut best_score = 0.0;

        for entry in faqs {
            let score = similarity(user_text, &entry.question);
            tracing::debug!(question = %entry.question, score = score, "Compared candidate");

            if score > best_score {
                best_score = score;
                best = Some(entry);
            }
        }

        match best {
            Some(entry) if self.threshold.accepts(best_score) => {
                tracing::info!(
                    question = %entry.question,
                    score = best_score,
                    "Match found"
                );
                Some(FaqMatch::new(entry, best_score))
            }
            _ => {
                tracing::info!(
                    best_score = best_score,
                    threshold = %self.threshold,
                    "No suitable match found"
                );
                None
            }
        }
    }
}
