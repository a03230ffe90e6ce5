//! # Utility Functions
//!
//! Shared utility functions used across the client.
//!
//! ## Modules
//!
//! - **[`validation`]**: Input validation run before a request is sent
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Cross-crate display helpers (names, excerpts)
//! - [`crate::core`]: Core abstractions and error types

pub mod validation;
