use crate::application::error::{AppError, AppResult};
use crate::application::ports::category_repository::CategoryRepository;
use crate::domain::catalog::Category;

pub struct GetCategory<'a, R: CategoryRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: CategoryRepository + ?Sized> GetCategory<'a, R> {
    pub async fn execute(&self, category_id: i32) -> AppResult<Category> {
        self.repo
            .get_by_id(category_id)
            .await?
            .ok_or(AppError::NotFound("category not found"))
    }
}
