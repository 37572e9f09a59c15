use async_trait::async_trait;
use sqlx::Row;

use crate::application::ports::product_repository::ProductRepository;
use crate::domain::catalog::{Product, ProductFilters};
use crate::infrastructure::db::PgPool;

pub struct SqlxProductRepository {
    pub pool: PgPool,
}

impl SqlxProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_row(row: &sqlx::postgres::PgRow) -> Product {
    Product {
        product_id: row.get("product_id"),
        name: row.get("name"),
        price: row.get("price"),
        category_id: row.get("category_id"),
        description: row.get("description"),
        color: row.get("color"),
        image_url: row.get("image_url"),
        stock: row.get("stock"),
        featured: row.get("featured"),
    }
}

#[async_trait]
impl ProductRepository for SqlxProductRepository {
    async fn get_by_id(&self, product_id: i32) -> anyhow::Result<Option<Product>> {
        let row = sqlx::query(
            r#"SELECT product_id, name, price, category_id, description,
                      color, image_url, stock, featured
               FROM products
               WHERE product_id = $1"#,
        )
        .bind(product_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(map_row))
    }

    async fn list_by_category(&self, category_id: i32) -> anyhow::Result<Vec<Product>> {
        let rows = sqlx::query(
            r#"SELECT product_id, name, price, category_id, description,
                      color, image_url, stock, featured
               FROM products
               WHERE category_id = $1
               ORDER BY product_id"#,
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(map_row).collect())
    }

    async fn search(&self, filters: &ProductFilters) -> anyhow::Result<Vec<Product>> {
        // NULL binds leave the corresponding filter unconstrained.
        let rows = sqlx::query(
            r#"SELECT product_id, name, price, category_id, description,
                      color, image_url, stock, featured
               FROM products
               WHERE ($1::INTEGER IS NULL OR category_id = $1)
                 AND ($2::NUMERIC IS NULL OR price >= $2)
                 AND ($3::NUMERIC IS NULL OR price <= $3)
                 AND ($4::VARCHAR IS NULL OR color = $4)
               ORDER BY product_id"#,
        )
        .bind(filters.category_id)
        .bind(filters.min_price)
        .bind(filters.max_price)
        .bind(filters.color.as_deref())
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(map_row).collect())
    }
}
