//! # Services Module
//!
//! External service integrations. The only one is the blog backend.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 Embedding UI                 │
//! │                                              │
//! │   App ──► ApiClient ◄── SharedSession        │
//! │               │          (bearer token)      │
//! └───────────────┼──────────────────────────────┘
//!                 │ HTTP/JSON, multipart
//!                 ▼
//! ┌──────────────────────────────────────────────┐
//! │  REST backend                                │
//! │                                              │
//! │  /api/accounts/*      login, users, contact  │
//! │  /api/posts/*         posts, categories, tags│
//! │  /api/interactions/*  comments, likes        │
//! │  /api/resources/*     workflow files         │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! Returns `Result<T, AppError>`:
//! - Transport failures: `AppError::Network`
//! - Non-2xx answers: `AppError::Api` with the payload's `message`,
//!   `detail` or `error`, else a per-operation text ("Failed to fetch posts")
//! - Unparseable 2xx bodies: `AppError::MalformedResponse`
//!
//! ## Thread Safety
//!
//! `ApiClient` wraps a `reqwest::Client` (internally pooled and thread-safe)
//! and is cheap to clone; share it across tasks freely.

pub mod api;
