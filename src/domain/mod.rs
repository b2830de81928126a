mod faq_collection;
mod faq_entry;
mod faq_match;
mod threshold;

pub use faq_collection::FaqCollection;
pub use faq_entry::FaqEntry;
pub use faq_match::FaqMatch;
pub use threshold::{DEFAULT_THRESHOLD, Threshold, ThresholdError};
