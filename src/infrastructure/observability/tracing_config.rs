use std::path::PathBuf;

use chrono::NaiveDate;

pub(super) const DEFAULT_FILTER: &str = "info,interavoice=debug,tower_http=debug";

/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    /// `EnvFilter` directives used when `RUST_LOG` is unset.
    pub filter: String,
    pub log_dir: Option<PathBuf>,
}

impl TracingConfig {
    pub fn log_file_name(&self) -> String {
        Self::log_file_name_for(chrono::Local::now().date_naive())
    }

    pub fn log_file_name_for(date: NaiveDate) -> String {
        format!("interavoice_{}.log", date.format("%Y-%m-%d"))
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: std::env::var("APP_ENV").unwrap_or_else(|_| "local".to_string()),
            json_format: std::env::var("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
            filter: DEFAULT_FILTER.to_string(),
            log_dir: std::env::var("LOG_DIR").ok().map(PathBuf::from),
        }
    }
}
