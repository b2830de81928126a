use serde::{Deserialize, Serialize};

/// One stored question/answer pair.
///
/// Missing fields deserialize to empty strings so a partially filled FAQ file
/// still loads; an empty question simply never clears the match threshold.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FaqEntry {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
}

impl FaqEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}
