//! User record queries

use crate::error::Result;
use roster_core::types::{User, UserId};
use sqlx::SqlitePool;

const SELECT_USER: &str = "SELECT id, name, email, password FROM users";

/// Get all users, ordered by id
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<User>> {
    let users = sqlx::query_as::<_, User>(&format!("{SELECT_USER} ORDER BY id"))
        .fetch_all(pool)
        .await?;

    Ok(users)
}

/// Get a user by id
pub async fn get_by_id(pool: &SqlitePool, id: UserId) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(&format!("{SELECT_USER} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(user)
}

/// Get the first user registered with this email
pub async fn get_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(&format!(
        "{SELECT_USER} WHERE email = ? ORDER BY id LIMIT 1"
    ))
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Insert a new user and return its id
pub async fn insert(pool: &SqlitePool, user: &User) -> Result<UserId> {
    let result = sqlx::query("INSERT INTO users (name, email, password) VALUES (?, ?, ?)")
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password)
        .execute(pool)
        .await?;

    Ok(result.last_insert_rowid())
}

/// Overwrite every column of an existing user
///
/// Returns `false` if no row has this id.
pub async fn update(pool: &SqlitePool, id: UserId, user: &User) -> Result<bool> {
    let result = sqlx::query("UPDATE users SET name = ?, email = ?, password = ? WHERE id = ?")
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Delete a user. Deleting a missing id is not an error.
pub async fn delete(pool: &SqlitePool, id: UserId) -> Result<()> {
    sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}

/// Check if a user exists
pub async fn exists(pool: &SqlitePool, id: UserId) -> Result<bool> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE id = ?")
        .bind(id)
        .fetch_one(pool)
        .await?;

    Ok(count > 0)
}
