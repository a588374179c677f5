//! Domain types for Roster

mod user;

pub use user::{User, UserDto};

/// User identifier, assigned by storage on first save
pub type UserId = i64;
