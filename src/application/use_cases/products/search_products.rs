use crate::application::error::AppResult;
use crate::application::ports::product_repository::ProductRepository;
use crate::domain::catalog::{Product, ProductFilters};

pub struct SearchProducts<'a, R: ProductRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: ProductRepository + ?Sized> SearchProducts<'a, R> {
    /// An empty match is an empty success, not an error.
    pub async fn execute(&self, filters: &ProductFilters) -> AppResult<Vec<Product>> {
        Ok(self.repo.search(filters).await?)
    }
}
