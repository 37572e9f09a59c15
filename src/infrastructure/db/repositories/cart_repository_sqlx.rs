use async_trait::async_trait;
use sqlx::Row;

use crate::application::ports::cart_repository::CartRepository;
use crate::domain::cart::{ShoppingCart, ShoppingCartItem};
use crate::domain::catalog::Product;
use crate::infrastructure::db::PgPool;

pub struct SqlxCartRepository {
    pub pool: PgPool,
}

impl SqlxCartRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartRepository for SqlxCartRepository {
    async fn get_by_user_id(&self, user_id: i32) -> anyhow::Result<ShoppingCart> {
        let rows = sqlx::query(
            r#"SELECT sc.product_id, sc.quantity,
                      p.name, p.price, p.category_id, p.description,
                      p.color, p.image_url, p.stock, p.featured
               FROM shopping_cart sc
               JOIN products p ON sc.product_id = p.product_id
               WHERE sc.user_id = $1"#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        let mut cart = ShoppingCart::default();
        for row in rows {
            let product = Product {
                product_id: row.get("product_id"),
                name: row.get("name"),
                price: row.get("price"),
                category_id: row.get("category_id"),
                description: row.get("description"),
                color: row.get("color"),
                image_url: row.get("image_url"),
                stock: row.get("stock"),
                featured: row.get("featured"),
            };
            cart.add(ShoppingCartItem {
                product,
                quantity: row.get("quantity"),
            });
        }
        Ok(cart)
    }

    async fn add_product(&self, user_id: i32, product_id: i32) -> anyhow::Result<()> {
        // Single-statement upsert on the (user_id, product_id) key, so
        // concurrent adds increment rather than racing check-then-insert.
        sqlx::query(
            r#"INSERT INTO shopping_cart (user_id, product_id, quantity)
               VALUES ($1, $2, 1)
               ON CONFLICT (user_id, product_id)
               DO UPDATE SET quantity = shopping_cart.quantity + 1"#,
        )
        .bind(user_id)
        .bind(product_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn update_quantity(
        &self,
        user_id: i32,
        product_id: i32,
        quantity: i32,
    ) -> anyhow::Result<bool> {
        let res = sqlx::query(
            r#"UPDATE shopping_cart
               SET quantity = $1
               WHERE user_id = $2 AND product_id = $3"#,
        )
        .bind(quantity)
        .bind(user_id)
        .bind(product_id)
        .execute(&self.pool)
        .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn clear(&self, user_id: i32) -> anyhow::Result<()> {
        sqlx::query("DELETE FROM shopping_cart WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
