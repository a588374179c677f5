//! User service: the business rules on top of a `UserGateway`

use tracing::{debug, info, instrument, warn};

use crate::error::{Result, RosterError};
use crate::gateway::UserGateway;
use crate::types::{User, UserDto, UserId};
use crate::validation;

/// Password stored when a user is created without one
pub const DEFAULT_PASSWORD: &str = "defaultPassword123";

/// Service for user management operations
#[derive(Debug, Clone)]
pub struct UserService<G> {
    gateway: G,
}

impl<G: UserGateway> UserService<G> {
    /// Create a new user service over the given gateway
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Create a user from a DTO
    ///
    /// The DTO carries no password, so the stored record gets
    /// [`DEFAULT_PASSWORD`]. Email uniqueness is **not** checked on this path;
    /// use [`create_with_password`](Self::create_with_password) for that.
    #[instrument(skip(self, dto), fields(email = %dto.email))]
    pub async fn create(&self, dto: UserDto) -> Result<UserDto> {
        validation::validate_dto(&dto)?;

        let mut user = User::from(dto);
        if !user.has_password() {
            user.password = Some(DEFAULT_PASSWORD.to_string());
        }
        // Storage assigns identifiers
        user.id = None;

        let saved = self.gateway.save(user).await?;
        info!(user_id = ?saved.id, "Created user with default password");

        Ok(UserDto::from(saved))
    }

    /// Create a user from a full record, rejecting emails already in use
    ///
    /// Fails with [`RosterError::DuplicateEmail`] before anything is saved if
    /// another record has the same email. The check and the insert are separate
    /// storage calls, so two concurrent calls for one new email can both pass.
    #[instrument(skip(self, user), fields(email = %user.email))]
    pub async fn create_with_password(&self, mut user: User) -> Result<UserDto> {
        validation::validate_name(&user.name)?;
        validation::validate_email(&user.email)?;

        if self.gateway.find_by_email(&user.email).await?.is_some() {
            warn!("Rejected duplicate email");
            return Err(RosterError::DuplicateEmail(user.email));
        }

        // A taken email wins over a weak password
        validation::validate_password(user.password.as_deref().unwrap_or_default())?;

        user.id = None;
        let saved = self.gateway.save(user).await?;
        info!(user_id = ?saved.id, "Created user");

        Ok(UserDto::from(saved))
    }

    /// Get a user by identifier
    #[instrument(skip(self))]
    pub async fn get(&self, id: UserId) -> Result<UserDto> {
        self.gateway
            .find_by_id(id)
            .await?
            .map(UserDto::from)
            .ok_or(RosterError::NotFound(id))
    }

    /// Get all users. Empty storage yields an empty list.
    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<UserDto>> {
        let users = self.gateway.find_all().await?;
        debug!(count = users.len(), "Fetched users");

        Ok(users.into_iter().map(UserDto::from).collect())
    }

    /// Overwrite name and email of an existing user
    ///
    /// The stored password and identifier are left as they are.
    #[instrument(skip(self, dto))]
    pub async fn update(&self, dto: UserDto, id: UserId) -> Result<UserDto> {
        let mut existing = self
            .gateway
            .find_by_id(id)
            .await?
            .ok_or(RosterError::NotFound(id))?;

        validation::validate_dto(&dto)?;

        existing.name = dto.name;
        existing.email = dto.email;

        let saved = self.gateway.save(existing).await?;
        info!(user_id = id, "Updated user");

        Ok(UserDto::from(saved))
    }

    /// Delete a user
    ///
    /// Returns `true` only when a follow-up existence check confirms the
    /// record is gone.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: UserId) -> Result<bool> {
        if !self.gateway.exists_by_id(id).await? {
            return Err(RosterError::NotFound(id));
        }

        self.gateway.delete_by_id(id).await?;
        let removed = !self.gateway.exists_by_id(id).await?;
        if removed {
            info!(user_id = id, "Deleted user");
        } else {
            warn!(user_id = id, "User still present after delete");
        }

        Ok(removed)
    }
}
