//! # Route Guard
//!
//! Synchronous access check run on every navigation attempt.

use std::fmt;
use std::str::FromStr;

use crate::core::error::AppError;
use crate::router::routes::Route;

/// What happens to a navigation the guard refuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuardPolicy {
    /// Cancel the navigation, stay on the current route and raise the
    /// login-required signal.
    #[default]
    BlockAndSignal,
    /// Send the user to the home route.
    RedirectHome,
}

impl GuardPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            GuardPolicy::BlockAndSignal => "block",
            GuardPolicy::RedirectHome => "redirect",
        }
    }
}

impl fmt::Display for GuardPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GuardPolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "block" | "block-and-signal" => Ok(GuardPolicy::BlockAndSignal),
            "redirect" | "redirect-home" => Ok(GuardPolicy::RedirectHome),
            other => Err(AppError::Validation(format!(
                "unknown guard policy '{}' (expected 'block' or 'redirect')",
                other
            ))),
        }
    }
}

/// Outcome of a single guard evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Deny,
}

/// Only a protected route without a session is denied. Token expiry is not
/// considered; the backend rejects stale tokens with 401.
pub fn check(route: &Route, authenticated: bool) -> GuardDecision {
    if route.requires_auth && !authenticated {
        GuardDecision::Deny
    } else {
        GuardDecision::Allow
    }
}
