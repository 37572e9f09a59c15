use async_trait::async_trait;
use sqlx::Row;

use crate::application::ports::user_repository::UserRepository;
use crate::domain::user::User;
use crate::infrastructure::db::PgPool;

pub struct SqlxUserRepository {
    pub pool: PgPool,
}

impl SqlxUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqlxUserRepository {
    async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<User>> {
        let row = sqlx::query(r#"SELECT user_id, username, role FROM users WHERE username = $1"#)
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|r| User {
            user_id: r.get("user_id"),
            username: r.get("username"),
            role: r.get("role"),
        }))
    }
}
