//! # Handlers
//!
//! Flow implementations behind the [`crate::app::App`] methods.

pub mod auth;
