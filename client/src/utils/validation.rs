//! Validation utilities for user input

use shared::NewUser;

use crate::core::error::{AppError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }

    /// `Err(AppError::Validation)` carrying the message when invalid
    pub fn into_result(self) -> Result<()> {
        match self.error {
            Some(message) if !self.is_valid => Err(AppError::Validation(message)),
            _ => Ok(()),
        }
    }
}

/// Validate email format
pub fn validate_email(email: &str) -> ValidationResult {
    let email = email.trim();
    if email.is_empty() {
        return ValidationResult::err("Email is required");
    }

    let Some((local, domain)) = email.split_once('@') else {
        return ValidationResult::err("Invalid email format");
    };

    if domain.contains('@') || email.chars().any(char::is_whitespace) {
        return ValidationResult::err("Invalid email format");
    }

    if local.is_empty() {
        return ValidationResult::err("Email username cannot be empty");
    }

    if domain.is_empty() || !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return ValidationResult::err("Invalid email domain");
    }

    ValidationResult::ok()
}

/// A password only has to be present; strength is the backend's call.
pub fn validate_password(password: &str) -> ValidationResult {
    if password.is_empty() {
        return ValidationResult::err("Password is required");
    }
    ValidationResult::ok()
}

/// A first or last name must not be blank
pub fn validate_name(name: &str, field: &str) -> ValidationResult {
    if name.trim().is_empty() {
        return ValidationResult::err(format!("{} is required", field));
    }
    ValidationResult::ok()
}

/// Validate a whole signup form, first failure wins
pub fn validate_signup(new_user: &NewUser) -> Result<()> {
    validate_name(&new_user.first_name, "First name").into_result()?;
    validate_name(&new_user.last_name, "Last name").into_result()?;
    validate_email(&new_user.email).into_result()?;
    if new_user.credential.auth_provider == "email" {
        validate_password(&new_user.credential.password).into_result()?;
    }
    Ok(())
}
