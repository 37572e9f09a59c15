use crate::application::error::{AppError, AppResult};
use crate::application::ports::category_repository::CategoryRepository;

pub struct DeleteCategory<'a, R: CategoryRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: CategoryRepository + ?Sized> DeleteCategory<'a, R> {
    /// Deleting a category that does not exist is not-found, never success.
    /// Deletion of a category that products still reference is blocked by
    /// the foreign key and surfaces as a conflict.
    pub async fn execute(&self, category_id: i32) -> AppResult<()> {
        let deleted = self.repo.delete(category_id).await?;
        if !deleted {
            return Err(AppError::NotFound("category not found"));
        }
        Ok(())
    }
}
