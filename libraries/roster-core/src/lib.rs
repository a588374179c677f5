//! Roster Core
//!
//! Storage-agnostic types, traits, and business rules for the Roster user service.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User` (the persisted record) and `UserDto` (the public shape)
//! - **Gateway Trait**: `UserGateway`, the storage boundary the service talks to
//! - **Service**: `UserService`, the only place with decisions (defaults, uniqueness)
//! - **Error Handling**: Unified `RosterError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use roster_core::types::{User, UserDto};
//!
//! let user = User::new("Alice", "alice@example.com", "secret");
//! let dto = UserDto::from(&user);
//!
//! assert_eq!(dto.name, "Alice");
//! assert!(dto.id.is_none());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod gateway;
pub mod service;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use error::{Result, RosterError};
pub use gateway::UserGateway;
pub use service::{UserService, DEFAULT_PASSWORD};
pub use types::{User, UserDto, UserId};
