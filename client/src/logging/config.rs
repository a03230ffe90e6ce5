//! Logging configuration from environment variables

use std::path::PathBuf;

const DEFAULT_LOG_LEVEL: &str = "blog_client=info,warn";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Log directory (daily rotated files land here)
    pub log_dir: PathBuf,
    /// File name prefix of the rotated log
    pub file_name: String,
    /// Log level filter (e.g., "blog_client=debug,info")
    pub log_level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            file_name: "blog-client.log".to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl LogConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            log_dir: lookup("BLOG_LOG_DIR")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            file_name: defaults.file_name,
            log_level: lookup("RUST_LOG")
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.log_level),
        }
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}
