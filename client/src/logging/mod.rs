//! # Logging
//!
//! `tracing` is used throughout the crate: every request function carries an
//! `#[tracing::instrument]` span and logs status and `duration_ms`; session
//! and router transitions log at `info`. Passwords and tokens are never
//! recorded.
//!
//! [`init`] installs a file subscriber for embedders that do not bring their
//! own.
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (default `blog_client=info,warn`)
//! - `BLOG_LOG_DIR`: Directory of the daily rotated log (default `logs`)

pub mod config;
pub mod logger;

pub use config::LogConfig;
pub use logger::init;
