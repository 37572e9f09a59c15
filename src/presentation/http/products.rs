use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::error::AppError;
use crate::application::use_cases::products::get_product::GetProduct;
use crate::application::use_cases::products::search_products::SearchProducts;
use crate::bootstrap::app_context::AppContext;
use crate::domain::catalog::{Product, ProductFilters};

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub product_id: i32,
    pub name: String,
    pub price: Decimal,
    pub category_id: i32,
    pub description: Option<String>,
    pub color: Option<String>,
    pub image_url: Option<String>,
    pub stock: i32,
    pub featured: bool,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        ProductResponse {
            product_id: p.product_id,
            name: p.name,
            price: p.price,
            category_id: p.category_id,
            description: p.description,
            color: p.color,
            image_url: p.image_url,
            stock: p.stock,
            featured: p.featured,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchProductsQuery {
    pub cat: Option<i32>,
    #[serde(rename = "minPrice")]
    pub min_price: Option<Decimal>,
    #[serde(rename = "maxPrice")]
    pub max_price: Option<Decimal>,
    pub color: Option<String>,
}

#[utoipa::path(get, path = "/products", tag = "Products",
    params(
        ("cat" = Option<i32>, Query, description = "Filter by category id"),
        ("minPrice" = Option<String>, Query, description = "Minimum price"),
        ("maxPrice" = Option<String>, Query, description = "Maximum price"),
        ("color" = Option<String>, Query, description = "Filter by color")
    ),
    responses((status = 200, body = [ProductResponse])))]
pub async fn search_products(
    State(ctx): State<AppContext>,
    q: Option<Query<SearchProductsQuery>>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let filters = q
        .map(|Query(q)| ProductFilters {
            category_id: q.cat,
            min_price: q.min_price,
            max_price: q.max_price,
            color: q.color,
        })
        .unwrap_or_default();
    let repo = ctx.product_repo();
    let uc = SearchProducts { repo: repo.as_ref() };
    let products = uc.execute(&filters).await?;
    Ok(Json(products.into_iter().map(Into::into).collect()))
}

#[utoipa::path(get, path = "/products/{id}", tag = "Products",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, body = ProductResponse),
        (status = 404, description = "Product not found")
    ))]
pub async fn get_product(
    State(ctx): State<AppContext>,
    Path(id): Path<i32>,
) -> Result<Json<ProductResponse>, AppError> {
    let repo = ctx.product_repo();
    let uc = GetProduct { repo: repo.as_ref() };
    let product = uc.execute(id).await?;
    Ok(Json(product.into()))
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/products", get(search_products))
        .route("/products/:id", get(get_product))
        .with_state(ctx)
}
