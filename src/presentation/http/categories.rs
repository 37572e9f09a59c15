use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::error::AppError;
use crate::application::use_cases::categories::create_category::CreateCategory;
use crate::application::use_cases::categories::delete_category::DeleteCategory;
use crate::application::use_cases::categories::get_category::GetCategory;
use crate::application::use_cases::categories::list_categories::ListCategories;
use crate::application::use_cases::categories::list_category_products::ListCategoryProducts;
use crate::application::use_cases::categories::update_category::UpdateCategory;
use crate::bootstrap::app_context::AppContext;
use crate::domain::catalog::Category;
use crate::presentation::http::auth::{self, Bearer};
use crate::presentation::http::products::ProductResponse;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub category_id: i32,
    pub name: String,
    pub description: Option<String>,
}

impl From<Category> for CategoryResponse {
    fn from(c: Category) -> Self {
        CategoryResponse {
            category_id: c.category_id,
            name: c.name,
            description: c.description,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CategoryRequest {
    pub name: String,
    pub description: Option<String>,
}

#[utoipa::path(get, path = "/categories", tag = "Categories", responses(
    (status = 200, body = [CategoryResponse]),
    (status = 404, description = "No categories found")
))]
pub async fn list_categories(
    State(ctx): State<AppContext>,
) -> Result<Json<Vec<CategoryResponse>>, AppError> {
    let repo = ctx.category_repo();
    let uc = ListCategories { repo: repo.as_ref() };
    let categories = uc.execute().await?;
    Ok(Json(categories.into_iter().map(Into::into).collect()))
}

#[utoipa::path(get, path = "/categories/{id}", tag = "Categories",
    params(("id" = i32, Path, description = "Category id")),
    responses(
        (status = 200, body = CategoryResponse),
        (status = 404, description = "Category not found")
    ))]
pub async fn get_category(
    State(ctx): State<AppContext>,
    Path(id): Path<i32>,
) -> Result<Json<CategoryResponse>, AppError> {
    let repo = ctx.category_repo();
    let uc = GetCategory { repo: repo.as_ref() };
    let category = uc.execute(id).await?;
    Ok(Json(category.into()))
}

#[utoipa::path(get, path = "/categories/{id}/products", tag = "Categories",
    params(("id" = i32, Path, description = "Category id")),
    responses(
        (status = 200, body = [ProductResponse]),
        (status = 404, description = "No products found in category")
    ))]
pub async fn list_category_products(
    State(ctx): State<AppContext>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let repo = ctx.product_repo();
    let uc = ListCategoryProducts { repo: repo.as_ref() };
    let products = uc.execute(id).await?;
    Ok(Json(products.into_iter().map(Into::into).collect()))
}

#[utoipa::path(post, path = "/categories", tag = "Categories", request_body = CategoryRequest,
    responses(
        (status = 201, body = CategoryResponse),
        (status = 403, description = "Caller is not an admin")
    ))]
pub async fn create_category(
    State(ctx): State<AppContext>,
    bearer: Option<Bearer>,
    Json(req): Json<CategoryRequest>,
) -> Result<(StatusCode, Json<CategoryResponse>), AppError> {
    let user = auth::current_user(&ctx, bearer).await?;
    auth::require_admin(&user)?;

    let repo = ctx.category_repo();
    let uc = CreateCategory { repo: repo.as_ref() };
    let created = uc.execute(&req.name, req.description.as_deref()).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(put, path = "/categories/{id}", tag = "Categories", request_body = CategoryRequest,
    params(("id" = i32, Path, description = "Category id")),
    responses(
        (status = 204, description = "Updated"),
        (status = 403, description = "Caller is not an admin")
    ))]
pub async fn update_category(
    State(ctx): State<AppContext>,
    Path(id): Path<i32>,
    bearer: Option<Bearer>,
    Json(req): Json<CategoryRequest>,
) -> Result<StatusCode, AppError> {
    let user = auth::current_user(&ctx, bearer).await?;
    auth::require_admin(&user)?;

    let repo = ctx.category_repo();
    let uc = UpdateCategory { repo: repo.as_ref() };
    uc.execute(id, &req.name, req.description.as_deref()).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(delete, path = "/categories/{id}", tag = "Categories",
    params(("id" = i32, Path, description = "Category id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 403, description = "Caller is not an admin"),
        (status = 404, description = "Category not found"),
        (status = 409, description = "Products still reference the category")
    ))]
pub async fn delete_category(
    State(ctx): State<AppContext>,
    Path(id): Path<i32>,
    bearer: Option<Bearer>,
) -> Result<StatusCode, AppError> {
    let user = auth::current_user(&ctx, bearer).await?;
    auth::require_admin(&user)?;

    let repo = ctx.category_repo();
    let uc = DeleteCategory { repo: repo.as_ref() };
    uc.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/categories", get(list_categories).post(create_category))
        .route(
            "/categories/:id",
            get(get_category)
                .put(update_category)
                .delete(delete_category),
        )
        .route("/categories/:id/products", get(list_category_products))
        .with_state(ctx)
}
