//! # Authentication Library
//!
//! Bearer token claim decoding for the client session.

pub mod token;

// Re-export commonly used types
pub use token::{decode_claims, encode_claims, Claims, TokenError};
