use crate::application::error::{AppError, AppResult};
use crate::application::ports::product_repository::ProductRepository;
use crate::domain::catalog::Product;

pub struct ListCategoryProducts<'a, R: ProductRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: ProductRepository + ?Sized> ListCategoryProducts<'a, R> {
    /// Empty result is not-found here, like the category listing. The
    /// category itself is not checked for existence.
    pub async fn execute(&self, category_id: i32) -> AppResult<Vec<Product>> {
        let products = self.repo.list_by_category(category_id).await?;
        if products.is_empty() {
            return Err(AppError::NotFound("no products found in category"));
        }
        Ok(products)
    }
}
