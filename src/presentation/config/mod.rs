mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    CONFIG_PATH_ENV, ChatSettings, DEFAULT_CONFIG_PATH, DEFAULT_EMPTY_QUESTION_MESSAGE,
    FaqSettings, LoggingSettings, ServerSettings, Settings, SettingsError, TranscriptionSettings,
    WebSettings,
};
