use async_trait::async_trait;

use crate::domain::cart::ShoppingCart;

#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Cart rows joined with their product snapshots.
    async fn get_by_user_id(&self, user_id: i32) -> anyhow::Result<ShoppingCart>;
    /// Atomic conditional upsert: insert at quantity 1, else increment by 1.
    async fn add_product(&self, user_id: i32, product_id: i32) -> anyhow::Result<()>;
    /// Unconditional overwrite. Returns whether a row was affected.
    async fn update_quantity(
        &self,
        user_id: i32,
        product_id: i32,
        quantity: i32,
    ) -> anyhow::Result<bool>;
    /// Deletes all rows for the user. Idempotent.
    async fn clear(&self, user_id: i32) -> anyhow::Result<()>;
}
