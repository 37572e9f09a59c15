use crate::application::error::AppResult;
use crate::application::ports::category_repository::CategoryRepository;

pub struct UpdateCategory<'a, R: CategoryRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: CategoryRepository + ?Sized> UpdateCategory<'a, R> {
    /// Overwrite without an existence check; updating a missing id is a
    /// silent no-op.
    pub async fn execute(
        &self,
        category_id: i32,
        name: &str,
        description: Option<&str>,
    ) -> AppResult<()> {
        Ok(self.repo.update(category_id, name, description).await?)
    }
}
