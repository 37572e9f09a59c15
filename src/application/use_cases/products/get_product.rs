use crate::application::error::{AppError, AppResult};
use crate::application::ports::product_repository::ProductRepository;
use crate::domain::catalog::Product;

pub struct GetProduct<'a, R: ProductRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: ProductRepository + ?Sized> GetProduct<'a, R> {
    pub async fn execute(&self, product_id: i32) -> AppResult<Product> {
        self.repo
            .get_by_id(product_id)
            .await?
            .ok_or(AppError::NotFound("product not found"))
    }
}
