//! # Blog Client - Library Root
//!
//! Client SDK for the blog platform's REST backend: session handling, an
//! authentication-gated router and typed wrappers for every endpoint.
//! UIs embed it; it has no binary of its own.
//!
//! ## Features
//!
//! - **Session**: bearer token and decoded identity, persisted across restarts
//! - **Route Guard**: protected views refuse navigation without a session
//! - **REST API**: accounts, posts, categories, tags, comments, likes, resources
//! - **Uniform Errors**: every call returns `Result<T, AppError>`
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              blog-client (this crate)                  │
//! ├────────────────────────────────────────────────────────┤
//! │  Reqwest       - HTTP client (JSON, multipart)         │
//! │  Tokio         - Async runtime, login prompt channel   │
//! │  parking_lot   - Shared session lock                   │
//! │  lib-auth      - Token claims                          │
//! │  tracing       - Structured logging                    │
//! └────────────────────────────────────────────────────────┘
//!          │
//!          │ HTTP, Authorization: Bearer <token>
//!          ▼
//! ┌─────────────────┐
//! │  REST backend   │
//! └─────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: [`app::App`] orchestrator (bootstrap, login, logout, navigate)
//! - **config**: [`config::ClientConfig`] from environment variables
//! - **core**: error type and service traits
//! - **logging**: `tracing` subscriber setup
//! - **router**: route table, guard policy and navigation
//! - **services**: `api` request functions and [`services::api::ApiClient`]
//! - **session**: token store and durable storage
//! - **utils**: input validation
//!
//! ### Module Dependency Graph
//!
//! ```text
//! app
//!   ├── services::api ──┐
//!   ├── router ─────────┼──► session ──► lib-auth (claims)
//!   └── utils           │
//!                       └──► shared (DTOs)
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use blog_client::app::App;
//! use blog_client::config::ClientConfig;
//! use blog_client::core::error::ResultExt;
//! use blog_client::services::api::posts;
//! use shared::PostFilters;
//!
//! # async fn run() -> blog_client::core::error::Result<()> {
//! let config = ClientConfig::from_env();
//! let app = App::bootstrap(&config)?;
//!
//! let latest = posts::get_posts(app.api(), &PostFilters::default())
//!     .await
//!     .or_fallback("posts");
//! println!("{} posts", latest.len());
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod config;
pub mod core;
pub mod logging;
pub mod router;
pub mod services;
pub mod session;
pub mod utils;

pub use app::App;
pub use config::ClientConfig;
pub use crate::core::error::{AppError, Result, ResultExt};
pub use session::{Identity, SessionStore, SharedSession};
