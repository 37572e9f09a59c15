use crate::application::error::{AppError, AppResult};
use crate::application::ports::cart_repository::CartRepository;

pub struct UpdateQuantity<'a, R: CartRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: CartRepository + ?Sized> UpdateQuantity<'a, R> {
    /// Unconditional overwrite of the row's quantity. A quantity below 1 is
    /// rejected before any data access; a missing row is not-found and no
    /// row is created.
    pub async fn execute(&self, user_id: i32, product_id: i32, quantity: i32) -> AppResult<()> {
        if quantity < 1 {
            return Err(AppError::Validation(
                "quantity must be at least 1".to_string(),
            ));
        }
        let updated = self
            .repo
            .update_quantity(user_id, product_id, quantity)
            .await?;
        if !updated {
            return Err(AppError::NotFound("product not found in cart"));
        }
        Ok(())
    }
}
