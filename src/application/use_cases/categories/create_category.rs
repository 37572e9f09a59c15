use crate::application::error::AppResult;
use crate::application::ports::category_repository::CategoryRepository;
use crate::domain::catalog::Category;

pub struct CreateCategory<'a, R: CategoryRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: CategoryRepository + ?Sized> CreateCategory<'a, R> {
    pub async fn execute(&self, name: &str, description: Option<&str>) -> AppResult<Category> {
        Ok(self.repo.create(name, description).await?)
    }
}
