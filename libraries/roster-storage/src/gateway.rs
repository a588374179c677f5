use crate::users;
use async_trait::async_trait;
use roster_core::{
    error::{Result, RosterError},
    gateway::UserGateway,
    types::{User, UserId},
};
use sqlx::SqlitePool;

/// `UserGateway` backed by `SQLite`
#[derive(Debug, Clone)]
pub struct SqliteUserGateway {
    pool: SqlitePool,
}

impl SqliteUserGateway {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserGateway for SqliteUserGateway {
    async fn find_all(&self) -> Result<Vec<User>> {
        Ok(users::get_all(&self.pool).await?)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>> {
        Ok(users::get_by_id(&self.pool, id).await?)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(users::get_by_email(&self.pool, email).await?)
    }

    async fn save(&self, mut user: User) -> Result<User> {
        match user.id {
            None => {
                let id = users::insert(&self.pool, &user).await?;
                user.id = Some(id);
                Ok(user)
            }
            Some(id) => {
                if users::update(&self.pool, id, &user).await? {
                    Ok(user)
                } else {
                    Err(RosterError::NotFound(id))
                }
            }
        }
    }

    async fn delete_by_id(&self, id: UserId) -> Result<()> {
        Ok(users::delete(&self.pool, id).await?)
    }

    async fn exists_by_id(&self, id: UserId) -> Result<bool> {
        Ok(users::exists(&self.pool, id).await?)
    }
}
