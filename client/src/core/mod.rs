//! # Core Abstractions
//!
//! Core traits and error types for dependency injection and better testability.
//!
//! ## Modules
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`, `ResultExt`)
//! - **[`service`]**: Service traits for dependency injection (`ApiService`)
//!
//! ## Error Handling
//!
//! All client errors use the centralized [`AppError`] type:
//!
//! ```rust
//! use blog_client::core::error::{AppError, Result};
//!
//! fn validate_title(title: &str) -> Result<String> {
//!     if title.is_empty() {
//!         return Err(AppError::Validation("Title cannot be empty".to_string()));
//!     }
//!     Ok(title.to_string())
//! }
//!
//! assert!(validate_title("").is_err());
//! ```
//!
//! ## Dependency Injection
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use blog_client::core::service::ApiService;
//!
//! // In production: the real client
//! let api: Arc<dyn ApiService> = Arc::new(ApiClient::from_config(&config, session.clone()));
//!
//! // In tests: a mock
//! let api: Arc<dyn ApiService> = Arc::new(MockApi::default());
//! ```

pub mod error;
pub mod service;

pub use error::{AppError, Result, ResultExt};
pub use service::ApiService;
