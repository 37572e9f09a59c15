use crate::application::error::{AppError, AppResult};
use crate::application::ports::cart_repository::CartRepository;
use crate::application::ports::product_repository::ProductRepository;
use crate::domain::catalog::Product;

pub struct AddProduct<'a, C: CartRepository + ?Sized, P: ProductRepository + ?Sized> {
    pub cart_repo: &'a C,
    pub product_repo: &'a P,
}

impl<'a, C: CartRepository + ?Sized, P: ProductRepository + ?Sized> AddProduct<'a, C, P> {
    /// Insert at quantity 1, else increment by 1. The repository does this
    /// as a single atomic upsert, so concurrent adds for the same
    /// (user, product) cannot lose updates.
    /// Returns the product snapshot for the response body.
    pub async fn execute(&self, user_id: i32, product_id: i32) -> AppResult<Product> {
        let product = self
            .product_repo
            .get_by_id(product_id)
            .await?
            .ok_or(AppError::NotFound("product not found"))?;
        self.cart_repo.add_product(user_id, product_id).await?;
        Ok(product)
    }
}
