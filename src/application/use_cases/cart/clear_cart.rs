use crate::application::error::AppResult;
use crate::application::ports::cart_repository::CartRepository;

pub struct ClearCart<'a, R: CartRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: CartRepository + ?Sized> ClearCart<'a, R> {
    /// Deletes all of the user's rows. Clearing an already-empty cart
    /// succeeds.
    pub async fn execute(&self, user_id: i32) -> AppResult<()> {
        Ok(self.repo.clear(user_id).await?)
    }
}
