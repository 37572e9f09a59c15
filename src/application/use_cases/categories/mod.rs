pub mod create_category;
pub mod delete_category;
pub mod get_category;
pub mod list_categories;
pub mod list_category_products;
pub mod update_category;

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use assert_matches::assert_matches;
    use async_trait::async_trait;

    use crate::application::error::AppError;
    use crate::application::ports::category_repository::CategoryRepository;
    use crate::domain::catalog::Category;

    use super::create_category::CreateCategory;
    use super::delete_category::DeleteCategory;
    use super::get_category::GetCategory;
    use super::list_categories::ListCategories;
    use super::update_category::UpdateCategory;

    #[derive(Default)]
    struct FakeCategoryRepo {
        rows: Mutex<Vec<Category>>,
    }

    impl FakeCategoryRepo {
        fn with(rows: Vec<Category>) -> Self {
            Self {
                rows: Mutex::new(rows),
            }
        }
    }

    fn category(id: i32, name: &str) -> Category {
        Category {
            category_id: id,
            name: name.into(),
            description: None,
        }
    }

    #[async_trait]
    impl CategoryRepository for FakeCategoryRepo {
        async fn list_all(&self) -> anyhow::Result<Vec<Category>> {
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn get_by_id(&self, category_id: i32) -> anyhow::Result<Option<Category>> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|c| c.category_id == category_id)
                .cloned())
        }

        async fn create(&self, name: &str, description: Option<&str>) -> anyhow::Result<Category> {
            let mut rows = self.rows.lock().unwrap();
            let next_id = rows.iter().map(|c| c.category_id).max().unwrap_or(0) + 1;
            let created = Category {
                category_id: next_id,
                name: name.into(),
                description: description.map(Into::into),
            };
            rows.push(created.clone());
            Ok(created)
        }

        async fn update(
            &self,
            category_id: i32,
            name: &str,
            description: Option<&str>,
        ) -> anyhow::Result<()> {
            let mut rows = self.rows.lock().unwrap();
            if let Some(row) = rows.iter_mut().find(|c| c.category_id == category_id) {
                row.name = name.into();
                row.description = description.map(Into::into);
            }
            Ok(())
        }

        async fn delete(&self, category_id: i32) -> anyhow::Result<bool> {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|c| c.category_id != category_id);
            Ok(rows.len() < before)
        }
    }

    #[tokio::test]
    async fn empty_catalog_is_not_found() {
        let repo = FakeCategoryRepo::default();
        let result = ListCategories { repo: &repo }.execute().await;
        assert_matches!(result, Err(AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn listing_returns_all_categories() {
        let repo = FakeCategoryRepo::with(vec![category(1, "Electronics"), category(2, "Fashion")]);
        let listed = ListCategories { repo: &repo }.execute().await.unwrap();
        assert_eq!(listed.len(), 2);
    }

    #[tokio::test]
    async fn missing_category_is_not_found() {
        let repo = FakeCategoryRepo::with(vec![category(1, "Electronics")]);
        let result = GetCategory { repo: &repo }.execute(999).await;
        assert_matches!(result, Err(AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn create_assigns_a_generated_id() {
        let repo = FakeCategoryRepo::with(vec![category(1, "Electronics")]);
        let created = CreateCategory { repo: &repo }
            .execute("Home & Garden", Some("tools and decor"))
            .await
            .unwrap();
        assert_eq!(created.category_id, 2);
        assert_eq!(created.name, "Home & Garden");
    }

    #[tokio::test]
    async fn update_of_missing_id_is_a_silent_noop() {
        let repo = FakeCategoryRepo::with(vec![category(1, "Electronics")]);
        UpdateCategory { repo: &repo }
            .execute(42, "Renamed", None)
            .await
            .unwrap();
        let unchanged = GetCategory { repo: &repo }.execute(1).await.unwrap();
        assert_eq!(unchanged.name, "Electronics");
    }

    #[tokio::test]
    async fn delete_of_missing_category_is_not_found() {
        let repo = FakeCategoryRepo::with(vec![category(1, "Electronics")]);
        let result = DeleteCategory { repo: &repo }.execute(999).await;
        assert_matches!(result, Err(AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_removes_the_row() {
        let repo = FakeCategoryRepo::with(vec![category(1, "Electronics")]);
        DeleteCategory { repo: &repo }.execute(1).await.unwrap();
        let result = GetCategory { repo: &repo }.execute(1).await;
        assert_matches!(result, Err(AppError::NotFound(_)));
    }
}
