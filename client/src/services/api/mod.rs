//! # Backend API Client Module
//!
//! HTTP client for communicating with the blog's REST backend.
//! Every function takes `&ApiClient`, issues one request and returns
//! `Result<T, AppError>`.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs         - Module exports and documentation
//! ├── client.rs      - ApiClient, bearer header, status/error mapping
//! ├── auth.rs        - Email and Google login
//! ├── users.rs       - Signup and user management
//! ├── contact.rs     - Contact form
//! ├── posts.rs       - Posts (listing, detail, multipart create)
//! ├── categories.rs  - Categories
//! ├── tags.rs        - Tags
//! ├── comments.rs    - Comments and replies
//! ├── likes.rs       - Likes
//! └── resources.rs   - Resources (listing, upload, file download)
//! ```
//!
//! ## Fallbacks
//!
//! Nothing here swallows an error. A page that would rather render an empty
//! list than fail opts in explicitly:
//!
//! ```rust,no_run
//! use blog_client::core::error::ResultExt;
//! use blog_client::services::api::{categories, ApiClient};
//!
//! async fn sidebar(client: &ApiClient) -> usize {
//!     categories::get_categories(client).await.or_fallback("categories").len()
//! }
//! ```

pub mod auth;
pub mod categories;
pub mod client;
pub mod comments;
pub mod contact;
pub mod likes;
pub mod posts;
pub mod resources;
pub mod tags;
pub mod users;

pub use client::ApiClient;
pub use resources::DownloadedFile;
