pub mod cart_repository;
pub mod category_repository;
pub mod product_repository;
pub mod profile_repository;
pub mod user_repository;
