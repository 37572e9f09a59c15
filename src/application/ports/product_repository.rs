use async_trait::async_trait;

use crate::domain::catalog::{Product, ProductFilters};

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_by_id(&self, product_id: i32) -> anyhow::Result<Option<Product>>;
    async fn list_by_category(&self, category_id: i32) -> anyhow::Result<Vec<Product>>;
    async fn search(&self, filters: &ProductFilters) -> anyhow::Result<Vec<Product>>;
}
