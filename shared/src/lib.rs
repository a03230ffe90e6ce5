//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the Inkpost client and the REST backend.
//! All DTOs use JSON serialization via `serde` for API communication.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Login, Google login and error payloads
//!   - **[`dto::accounts`]**: Users, signup and contact messages
//!   - **[`dto::posts`]**: Posts, categories and tags
//!   - **[`dto::interactions`]**: Comments and likes
//!   - **[`dto::resources`]**: Downloadable resources and their filters
//! - **[`utils`]**: Shared display helpers
//!   - **[`utils::display_name`]**: Join first and last name for display
//!   - **[`utils::excerpt`]**: Truncate post content on a character boundary
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON using the default `serde` behavior:
//! - Field names use **snake_case** in Rust, which is also what the backend emits
//! - Optional fields are omitted from request bodies when `None`
//!   (using `#[serde(skip_serializing_if = "Option::is_none")]`)
//! - Identifiers are UUID strings and kept as `String`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shared::dto::auth::{LoginRequest, LoginResponse};
//!
//! let request = LoginRequest {
//!     email: "ana@example.com".to_string(),
//!     password: "secret".to_string(),
//! };
//!
//! let response: LoginResponse = reqwest::Client::new()
//!     .post("http://127.0.0.1:8000/api/accounts/login/")
//!     .json(&request)
//!     .send()
//!     .await?
//!     .json()
//!     .await?;
//! ```

pub mod dto;
pub mod utils;

// Wildcard re-exports: every DTO is public API
pub use dto::*;
pub use utils::*;
