/// Shared application state
use roster_core::UserService;
use roster_storage::SqliteUserGateway;
use std::sync::Arc;

/// User service wired onto the SQLite gateway
pub type Users = UserService<SqliteUserGateway>;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<Users>,
}

impl AppState {
    pub fn new(users: Arc<Users>) -> Self {
        Self { users }
    }
}
