//! User domain types

use serde::{Deserialize, Serialize};
use std::fmt;

use super::UserId;

/// Persisted user record, including credentials
///
/// The password is accepted on input but never serialized back out. Use
/// [`UserDto`] for anything that leaves the service.
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-support", derive(sqlx::FromRow))]
pub struct User {
    /// Storage-assigned identifier, `None` until first save
    #[serde(default)]
    pub id: Option<UserId>,

    /// Display name
    pub name: String,

    /// Contact email
    pub email: String,

    /// Plain password as supplied by the caller
    #[serde(default, skip_serializing)]
    pub password: Option<String>,
}

impl User {
    /// Create an unsaved user record
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            password: Some(password.into()),
        }
    }

    /// Create a user record with a known identifier
    pub fn with_id(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id),
            ..Self::new(name, email, password)
        }
    }

    /// Whether a non-empty password is set
    pub fn has_password(&self) -> bool {
        self.password.as_deref().is_some_and(|p| !p.is_empty())
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Public user representation
///
/// Deliberately has no password field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserDto {
    /// Identifier, absent until assigned by storage
    #[serde(default)]
    pub id: Option<UserId>,

    /// Display name
    pub name: String,

    /// Contact email
    pub email: String,
}

impl UserDto {
    /// Create a DTO without an identifier
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
        }
    }
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// DTO to record. The password stays unset; callers apply their own default.
impl From<UserDto> for User {
    fn from(dto: UserDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            email: dto.email,
            password: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dto_drops_password() {
        let user = User::with_id(1, "Alice Smith", "alice.smith@test.com", "securePass");
        let dto = UserDto::from(&user);

        assert_eq!(dto.id, Some(1));
        assert_eq!(dto.name, "Alice Smith");
        assert_eq!(dto.email, "alice.smith@test.com");

        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("password").is_none());
    }

    #[test]
    fn round_trip_loses_password() {
        let user = User::with_id(1, "Alice Smith", "alice.smith@test.com", "securePass");
        let back = User::from(UserDto::from(&user));

        assert_eq!(back.id, user.id);
        assert_eq!(back.name, user.name);
        assert_eq!(back.email, user.email);
        assert_eq!(back.password, None);
        assert!(!back.has_password());
    }

    #[test]
    fn absence_maps_to_absence() {
        let none: Option<User> = None;
        assert_eq!(none.as_ref().map(UserDto::from), None);

        let none: Option<UserDto> = None;
        assert_eq!(none.map(User::from), None);
    }

    #[test]
    fn record_never_serializes_password() {
        let user = User::new("Bob", "bob@test.com", "myPassword");
        let json = serde_json::to_string(&user).unwrap();

        assert!(!json.contains("myPassword"));
        assert!(!format!("{:?}", user).contains("myPassword"));
    }

    #[test]
    fn record_deserializes_with_password() {
        let user: User = serde_json::from_str(
            r#"{"name":"Bob","email":"bob@test.com","password":"myPassword"}"#,
        )
        .unwrap();

        assert_eq!(user.id, None);
        assert_eq!(user.password.as_deref(), Some("myPassword"));
    }

    #[test]
    fn empty_password_is_not_set() {
        let mut user = User::new("Bob", "bob@test.com", "");
        assert!(!user.has_password());

        user.password = None;
        assert!(!user.has_password());
    }
}
