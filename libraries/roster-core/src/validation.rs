//! Field validation rules for user input

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, RosterError};
use crate::types::UserDto;

/// Minimum accepted password length
pub const MIN_PASSWORD_LEN: usize = 3;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.com$").expect("email pattern is a valid regex")
});

/// Reject blank names
pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(RosterError::invalid_input("Name cannot be blank"));
    }
    Ok(())
}

/// Reject blank emails and anything not shaped like `local@domain.com`
pub fn validate_email(email: &str) -> Result<()> {
    if email.trim().is_empty() {
        return Err(RosterError::invalid_input("Email cannot be blank"));
    }
    if !EMAIL_PATTERN.is_match(email) {
        return Err(RosterError::invalid_input("Email must end with .com"));
    }
    Ok(())
}

/// Reject blank or too-short passwords
pub fn validate_password(password: &str) -> Result<()> {
    if password.trim().is_empty() {
        return Err(RosterError::invalid_input("Password cannot be blank"));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(RosterError::invalid_input(format!(
            "Password must be at least {} characters long",
            MIN_PASSWORD_LEN
        )));
    }
    Ok(())
}

/// Validate the public fields of a DTO
pub fn validate_dto(dto: &UserDto) -> Result<()> {
    validate_name(&dto.name)?;
    validate_email(&dto.email)
}
