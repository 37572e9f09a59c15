use async_trait::async_trait;

use crate::domain::catalog::Category;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn list_all(&self) -> anyhow::Result<Vec<Category>>;
    async fn get_by_id(&self, category_id: i32) -> anyhow::Result<Option<Category>>;
    async fn create(&self, name: &str, description: Option<&str>) -> anyhow::Result<Category>;
    /// Overwrites name/description. A missing id is not reported.
    async fn update(
        &self,
        category_id: i32,
        name: &str,
        description: Option<&str>,
    ) -> anyhow::Result<()>;
    /// Returns whether a row was deleted.
    async fn delete(&self, category_id: i32) -> anyhow::Result<bool>;
}
