use crate::application::error::AppResult;
use crate::application::ports::cart_repository::CartRepository;
use crate::domain::cart::ShoppingCart;

pub struct GetCart<'a, R: CartRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: CartRepository + ?Sized> GetCart<'a, R> {
    /// An empty cart is a valid result, not an error (unlike the catalog
    /// listing endpoints).
    pub async fn execute(&self, user_id: i32) -> AppResult<ShoppingCart> {
        Ok(self.repo.get_by_user_id(user_id).await?)
    }
}
