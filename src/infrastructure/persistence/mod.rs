mod in_memory_faq_source;
mod json_faq_source;

pub use in_memory_faq_source::InMemoryFaqSource;
pub use json_faq_source::{DEFAULT_FAQ_PATH, JsonFileFaqSource};
