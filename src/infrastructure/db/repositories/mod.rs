pub mod cart_repository_sqlx;
pub mod category_repository_sqlx;
pub mod product_repository_sqlx;
pub mod profile_repository_sqlx;
pub mod user_repository_sqlx;
