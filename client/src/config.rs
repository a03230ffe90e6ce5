//! # Client Configuration
//!
//! Everything the client reads from the environment, in one place.
//!
//! | Variable                 | Default                                  |
//! |--------------------------|------------------------------------------|
//! | `BLOG_API_BASE_URL`      | `http://127.0.0.1:8000`                  |
//! | `BLOG_HTTP_TIMEOUT_SECS` | `10`                                     |
//! | `BLOG_SESSION_FILE`      | `<config_dir>/blog-client/session.json`  |
//! | `BLOG_GUARD_POLICY`      | `block` (`block` or `redirect`)          |
//! | `BLOG_LOG_DIR`           | `logs`                                   |
//! | `RUST_LOG`               | `blog_client=info,warn`                  |

use std::path::PathBuf;
use std::time::Duration;

use crate::logging::LogConfig;
use crate::router::GuardPolicy;
use crate::session::FileStorage;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend origin, without a trailing slash
    pub api_base_url: String,
    /// Client-wide request timeout
    pub timeout: Duration,
    pub session_file: PathBuf,
    pub guard_policy: GuardPolicy,
    pub log: LogConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            session_file: FileStorage::default_path(),
            guard_policy: GuardPolicy::default(),
            log: LogConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Unparseable values fall back to the default with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let value = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let api_base_url = value("BLOG_API_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.api_base_url);

        let timeout = match value("BLOG_HTTP_TIMEOUT_SECS").map(|v| v.parse::<u64>()) {
            Some(Ok(secs)) if secs > 0 => Duration::from_secs(secs),
            Some(_) => {
                tracing::warn!("Invalid BLOG_HTTP_TIMEOUT_SECS, using {}s", DEFAULT_TIMEOUT_SECS);
                defaults.timeout
            }
            None => defaults.timeout,
        };

        let guard_policy = match value("BLOG_GUARD_POLICY").map(|v| v.parse::<GuardPolicy>()) {
            Some(Ok(policy)) => policy,
            Some(Err(e)) => {
                tracing::warn!(error = %e, "Invalid BLOG_GUARD_POLICY, using default");
                defaults.guard_policy
            }
            None => defaults.guard_policy,
        };

        Self {
            api_base_url,
            timeout,
            session_file: value("BLOG_SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.session_file),
            guard_policy,
            log: LogConfig::from_lookup(&lookup),
        }
    }
}
