use crate::application::error::{AppError, AppResult};
use crate::application::ports::category_repository::CategoryRepository;
use crate::domain::catalog::Category;

pub struct ListCategories<'a, R: CategoryRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: CategoryRepository + ?Sized> ListCategories<'a, R> {
    /// An empty catalog is reported as not-found, matching the legacy
    /// endpoint contract (the cart endpoints treat empty as success).
    pub async fn execute(&self) -> AppResult<Vec<Category>> {
        let categories = self.repo.list_all().await?;
        if categories.is_empty() {
            return Err(AppError::NotFound("no categories found"));
        }
        Ok(categories)
    }
}
