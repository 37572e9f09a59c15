use async_trait::async_trait;
use sqlx::Row;

use crate::application::ports::category_repository::CategoryRepository;
use crate::domain::catalog::Category;
use crate::infrastructure::db::PgPool;

pub struct SqlxCategoryRepository {
    pub pool: PgPool,
}

impl SqlxCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_row(row: &sqlx::postgres::PgRow) -> Category {
    Category {
        category_id: row.get("category_id"),
        name: row.get("name"),
        description: row.get("description"),
    }
}

#[async_trait]
impl CategoryRepository for SqlxCategoryRepository {
    async fn list_all(&self) -> anyhow::Result<Vec<Category>> {
        let rows = sqlx::query(
            r#"SELECT category_id, name, description FROM categories
               ORDER BY category_id"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(map_row).collect())
    }

    async fn get_by_id(&self, category_id: i32) -> anyhow::Result<Option<Category>> {
        let row = sqlx::query(
            r#"SELECT category_id, name, description FROM categories
               WHERE category_id = $1"#,
        )
        .bind(category_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(map_row))
    }

    async fn create(&self, name: &str, description: Option<&str>) -> anyhow::Result<Category> {
        let row = sqlx::query(
            r#"INSERT INTO categories (name, description) VALUES ($1, $2)
               RETURNING category_id, name, description"#,
        )
        .bind(name)
        .bind(description)
        .fetch_one(&self.pool)
        .await?;
        Ok(map_row(&row))
    }

    async fn update(
        &self,
        category_id: i32,
        name: &str,
        description: Option<&str>,
    ) -> anyhow::Result<()> {
        sqlx::query(
            r#"UPDATE categories
               SET name = $1, description = $2
               WHERE category_id = $3"#,
        )
        .bind(name)
        .bind(description)
        .bind(category_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete(&self, category_id: i32) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM categories WHERE category_id = $1")
            .bind(category_id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}
