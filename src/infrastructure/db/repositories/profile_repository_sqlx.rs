use async_trait::async_trait;
use sqlx::Row;

use crate::application::ports::profile_repository::ProfileRepository;
use crate::domain::profile::Profile;
use crate::infrastructure::db::PgPool;

pub struct SqlxProfileRepository {
    pub pool: PgPool,
}

impl SqlxProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for SqlxProfileRepository {
    async fn create(&self, profile: &Profile) -> anyhow::Result<()> {
        sqlx::query(
            r#"INSERT INTO profiles (user_id, first_name, last_name, phone, email, address, city, state, zip)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)"#,
        )
        .bind(profile.user_id)
        .bind(profile.first_name.as_deref())
        .bind(profile.last_name.as_deref())
        .bind(profile.phone.as_deref())
        .bind(profile.email.as_deref())
        .bind(profile.address.as_deref())
        .bind(profile.city.as_deref())
        .bind(profile.state.as_deref())
        .bind(profile.zip.as_deref())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get(&self, user_id: i32) -> anyhow::Result<Option<Profile>> {
        let row = sqlx::query(
            r#"SELECT user_id, first_name, last_name, phone, email, address, city, state, zip
               FROM profiles
               WHERE user_id = $1"#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(|r| Profile {
            user_id: r.get("user_id"),
            first_name: r.get("first_name"),
            last_name: r.get("last_name"),
            phone: r.get("phone"),
            email: r.get("email"),
            address: r.get("address"),
            city: r.get("city"),
            state: r.get("state"),
            zip: r.get("zip"),
        }))
    }

    async fn update(&self, profile: &Profile) -> anyhow::Result<bool> {
        let res = sqlx::query(
            r#"UPDATE profiles
               SET first_name = $1, last_name = $2, phone = $3, email = $4,
                   address = $5, city = $6, state = $7, zip = $8
               WHERE user_id = $9"#,
        )
        .bind(profile.first_name.as_deref())
        .bind(profile.last_name.as_deref())
        .bind(profile.phone.as_deref())
        .bind(profile.email.as_deref())
        .bind(profile.address.as_deref())
        .bind(profile.city.as_deref())
        .bind(profile.state.as_deref())
        .bind(profile.zip.as_deref())
        .bind(profile.user_id)
        .execute(&self.pool)
        .await?;
        Ok(res.rows_affected() > 0)
    }
}
