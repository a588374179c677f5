//! Storage boundary for user records

use crate::error::Result;
use crate::types::{User, UserId};
use async_trait::async_trait;

/// Persistence gateway for user records
///
/// Implementations store and fetch records and nothing else: no validation,
/// no defaults, no uniqueness rules. Those belong to `UserService`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserGateway: Send + Sync {
    /// Get all users, ordered by identifier
    async fn find_all(&self) -> Result<Vec<User>>;

    /// Get a user by identifier
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>>;

    /// Get a user by email. `None` means no user has this email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Insert the record if it has no identifier, otherwise overwrite every field
    ///
    /// Returns the stored record, with its identifier assigned.
    async fn save(&self, user: User) -> Result<User>;

    /// Delete a user by identifier
    async fn delete_by_id(&self, id: UserId) -> Result<()>;

    /// Check whether a user with this identifier exists
    async fn exists_by_id(&self, id: UserId) -> Result<bool>;
}
