use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::error::AppError;
use crate::application::use_cases::cart::add_product::AddProduct;
use crate::application::use_cases::cart::clear_cart::ClearCart;
use crate::application::use_cases::cart::get_cart::GetCart;
use crate::application::use_cases::cart::update_quantity::UpdateQuantity;
use crate::bootstrap::app_context::AppContext;
use crate::domain::cart::ShoppingCart;
use crate::presentation::http::auth::{self, Bearer};
use crate::presentation::http::products::ProductResponse;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartItemResponse {
    pub product: ProductResponse,
    pub quantity: i32,
    pub line_total: Decimal,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItemResponse>,
    pub total: Decimal,
}

impl From<ShoppingCart> for CartResponse {
    fn from(cart: ShoppingCart) -> Self {
        let total = cart.total();
        let items = cart
            .items()
            .map(|item| CartItemResponse {
                line_total: item.line_total(),
                quantity: item.quantity,
                product: item.product.clone().into(),
            })
            .collect();
        CartResponse { items, total }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCartItemRequest {
    pub quantity: i32,
}

#[utoipa::path(get, path = "/cart", tag = "Cart", responses(
    (status = 200, body = CartResponse),
    (status = 401, description = "Missing or invalid token")
))]
pub async fn get_cart(
    State(ctx): State<AppContext>,
    bearer: Option<Bearer>,
) -> Result<Json<CartResponse>, AppError> {
    let user = auth::current_user(&ctx, bearer).await?;

    let repo = ctx.cart_repo();
    let uc = GetCart { repo: repo.as_ref() };
    let cart = uc.execute(user.user_id).await?;
    Ok(Json(cart.into()))
}

#[utoipa::path(post, path = "/cart/products/{productId}", tag = "Cart",
    params(("productId" = i32, Path, description = "Product to add")),
    responses(
        (status = 200, body = ProductResponse),
        (status = 404, description = "Product not found")
    ))]
pub async fn add_to_cart(
    State(ctx): State<AppContext>,
    Path(product_id): Path<i32>,
    bearer: Option<Bearer>,
) -> Result<Json<ProductResponse>, AppError> {
    let user = auth::current_user(&ctx, bearer).await?;

    let cart_repo = ctx.cart_repo();
    let product_repo = ctx.product_repo();
    let uc = AddProduct {
        cart_repo: cart_repo.as_ref(),
        product_repo: product_repo.as_ref(),
    };
    let product = uc.execute(user.user_id, product_id).await?;
    Ok(Json(product.into()))
}

#[utoipa::path(put, path = "/cart/products/{productId}", tag = "Cart",
    request_body = UpdateCartItemRequest,
    params(("productId" = i32, Path, description = "Product to update")),
    responses(
        (status = 200, body = String),
        (status = 400, description = "Quantity below 1"),
        (status = 404, description = "Product not in cart")
    ))]
pub async fn update_cart_item(
    State(ctx): State<AppContext>,
    Path(product_id): Path<i32>,
    bearer: Option<Bearer>,
    Json(req): Json<UpdateCartItemRequest>,
) -> Result<String, AppError> {
    let user = auth::current_user(&ctx, bearer).await?;

    let repo = ctx.cart_repo();
    let uc = UpdateQuantity { repo: repo.as_ref() };
    uc.execute(user.user_id, product_id, req.quantity).await?;
    Ok("Product quantity updated successfully".to_string())
}

#[utoipa::path(delete, path = "/cart", tag = "Cart", responses(
    (status = 200, body = String),
    (status = 404, description = "User not found")
))]
pub async fn clear_cart(
    State(ctx): State<AppContext>,
    bearer: Option<Bearer>,
) -> Result<String, AppError> {
    let user = auth::current_user(&ctx, bearer).await?;

    let repo = ctx.cart_repo();
    let uc = ClearCart { repo: repo.as_ref() };
    uc.execute(user.user_id).await?;
    Ok("All products have been removed from the cart".to_string())
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/cart", get(get_cart).delete(clear_cart))
        .route(
            "/cart/products/:product_id",
            post(add_to_cart).put(update_cart_item),
        )
        .with_state(ctx)
}
