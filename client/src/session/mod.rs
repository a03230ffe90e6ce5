//! # Session
//!
//! Client-side session state: the bearer token, the identity decoded from
//! it, the durable copy of both tokens and the login-required signal.
//!
//! ## Lifecycle
//!
//! ```text
//! bootstrap            login / Google login          logout
//!    │                        │                        │
//!    ▼                        ▼                        ▼
//! SessionStore::restore → set_session(token, ..) → clear_session()
//!    (durable → memory)     (durable, then memory)   (memory + durable)
//! ```
//!
//! The store is wrapped once into a [`SharedSession`] and that handle is
//! injected into the [`crate::router::Router`] and the
//! [`crate::services::api::ApiClient`]. Write guards are taken for the
//! duration of a synchronous mutation only, never across an `.await`.
//!
//! ## Usage
//!
//! ```rust
//! use blog_client::session::{MemoryStorage, SessionStore};
//!
//! let session = SessionStore::new(MemoryStorage::new()).shared();
//! assert!(!session.read().is_authenticated());
//!
//! session.read().require_login();
//! assert!(session.read().login_prompt_pending());
//! ```

pub mod storage;
pub mod store;

pub use storage::{FileStorage, MemoryStorage, TokenStorage, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};
pub use store::{Identity, SessionStore, SharedSession};
