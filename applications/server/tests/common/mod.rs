/// Common test utilities and fixtures
use axum::Router;
use roster_core::UserService;
use roster_server::{api, state::AppState};
use roster_storage::SqliteUserGateway;
use sqlx::SqlitePool;
use std::sync::Arc;
use tempfile::TempDir;

/// Router over a fresh file-backed database
pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    _temp_dir: TempDir,
}

/// Create a test app with migrations applied
pub async fn create_test_app() -> TestApp {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_url = format!("sqlite://{}", temp_dir.path().join("test.db").display());

    let pool = roster_storage::create_pool(&db_url)
        .await
        .expect("Failed to create pool");
    roster_storage::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    let users = Arc::new(UserService::new(SqliteUserGateway::new(pool.clone())));
    let router = api::router(AppState::new(users));

    TestApp {
        router,
        pool,
        _temp_dir: temp_dir,
    }
}

/// Test user fixtures
pub mod fixtures {
    pub const ALICE_NAME: &str = "Alice Smith";
    pub const ALICE_EMAIL: &str = "alice.smith@test.com";
    pub const ALICE_PASSWORD: &str = "securePass";
}
