//! # Shared Utility Functions
//!
//! Display helpers used by the client and by UI shells built on it.
//!
//! - [`display_name`] - Join first and last name, tolerating blanks
//! - [`excerpt`] - Truncate text on a character boundary with an ellipsis
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{display_name, excerpt};
//!
//! assert_eq!(display_name("Ana", "Lopez"), "Ana Lopez");
//! assert_eq!(excerpt("Hello, world", 5), "Hello...");
//! ```

/// Join a first and last name for display.
///
/// Blank parts are skipped so a user without a last name does not get a
/// trailing space.
///
/// # Examples
///
/// ```rust
/// use shared::utils::display_name;
///
/// assert_eq!(display_name("Ana", "Lopez"), "Ana Lopez");
/// assert_eq!(display_name("Ana", ""), "Ana");
/// assert_eq!(display_name(" ", " "), "");
/// ```
pub fn display_name(first_name: &str, last_name: &str) -> String {
    [first_name.trim(), last_name.trim()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Truncate `text` to at most `max_chars` characters, appending `...` when cut.
///
/// Counts characters, not bytes, so multi-byte text never splits mid-char.
///
/// # Examples
///
/// ```rust
/// use shared::utils::excerpt;
///
/// assert_eq!(excerpt("short", 10), "short");
/// assert_eq!(excerpt("añoñoño", 3), "año...");
/// ```
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", text[..cut].trim_end()),
        None => text.to_string(),
    }
}
