//! Core error types for Roster

use thiserror::Error;

use crate::types::UserId;

/// Result type alias using `RosterError`
pub type Result<T> = std::result::Result<T, RosterError>;

/// Core error type for Roster
#[derive(Error, Debug)]
pub enum RosterError {
    /// No user with this identifier
    #[error("User not found with id: {0}")]
    NotFound(UserId),

    /// Email already registered on the checked creation path
    #[error("Email already exists: {0}")]
    DuplicateEmail(String),

    /// Field validation failure
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Database errors (for gateway implementations)
    #[error("Database error: {0}")]
    Database(String),
}

impl RosterError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for RosterError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_carries_id() {
        let err = RosterError::NotFound(999);
        assert_eq!(err.to_string(), "User not found with id: 999");
    }

    #[test]
    fn duplicate_email_message_carries_email() {
        let err = RosterError::DuplicateEmail("alice@test.com".to_string());
        assert_eq!(err.to_string(), "Email already exists: alice@test.com");
    }
}
