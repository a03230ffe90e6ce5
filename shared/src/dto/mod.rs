//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures exchanged with the backend REST API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Email/password login, Google login, error payloads
//! - [`accounts`] - User records, profile updates, signup, contact form
//! - [`posts`] - Posts, categories, tags and post filters
//! - [`interactions`] - Comments (one level of replies) and likes
//! - [`resources`] - Downloadable JSON resources
//!
//! ## Serialization Format
//!
//! - **Field naming**: snake_case, identical to the backend serializers
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **Timestamps**: RFC 3339 strings, parsed into `chrono::DateTime<Utc>`
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/accounts/login/
//! Content-Type: application/json
//!
//! {
//!   "email": "ana@example.com",
//!   "password": "MyPassword123!"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "refresh": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
//!   "access": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
//!   "user": {
//!     "id": "0b8f...",
//!     "email": "ana@example.com",
//!     "first_name": "Ana",
//!     "last_name": "Lopez",
//!     "role": "author"
//!   }
//! }
//! ```

pub mod accounts;
pub mod auth;
pub mod interactions;
pub mod posts;
pub mod resources;

pub use accounts::*;
pub use auth::*;
pub use interactions::*;
pub use posts::*;
pub use resources::*;
