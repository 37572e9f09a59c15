pub mod add_product;
pub mod clear_cart;
pub mod get_cart;
pub mod update_quantity;

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use assert_matches::assert_matches;
    use async_trait::async_trait;

    use crate::application::error::AppError;
    use crate::application::ports::cart_repository::CartRepository;
    use crate::application::ports::product_repository::ProductRepository;
    use crate::domain::cart::{ShoppingCart, ShoppingCartItem};
    use crate::domain::catalog::{Product, ProductFilters};

    use super::add_product::AddProduct;
    use super::clear_cart::ClearCart;
    use super::get_cart::GetCart;
    use super::update_quantity::UpdateQuantity;

    fn product(id: i32, price: &str) -> Product {
        Product {
            product_id: id,
            name: format!("product {id}"),
            price: price.parse().unwrap(),
            category_id: 1,
            description: None,
            color: None,
            image_url: None,
            stock: 25,
            featured: false,
        }
    }

    struct FakeProductRepo {
        products: Vec<Product>,
    }

    #[async_trait]
    impl ProductRepository for FakeProductRepo {
        async fn get_by_id(&self, product_id: i32) -> anyhow::Result<Option<Product>> {
            Ok(self
                .products
                .iter()
                .find(|p| p.product_id == product_id)
                .cloned())
        }

        async fn list_by_category(&self, category_id: i32) -> anyhow::Result<Vec<Product>> {
            Ok(self
                .products
                .iter()
                .filter(|p| p.category_id == category_id)
                .cloned()
                .collect())
        }

        async fn search(&self, _filters: &ProductFilters) -> anyhow::Result<Vec<Product>> {
            Ok(self.products.clone())
        }
    }

    /// Rows keyed by (user_id, product_id), mirroring the persisted unit.
    struct FakeCartRepo {
        rows: Mutex<HashMap<(i32, i32), i32>>,
        products: Vec<Product>,
    }

    #[async_trait]
    impl CartRepository for FakeCartRepo {
        async fn get_by_user_id(&self, user_id: i32) -> anyhow::Result<ShoppingCart> {
            let rows = self.rows.lock().unwrap();
            let mut cart = ShoppingCart::default();
            for (&(uid, pid), &quantity) in rows.iter() {
                if uid != user_id {
                    continue;
                }
                let product = self
                    .products
                    .iter()
                    .find(|p| p.product_id == pid)
                    .cloned()
                    .expect("cart row references a known product");
                cart.add(ShoppingCartItem { product, quantity });
            }
            Ok(cart)
        }

        async fn add_product(&self, user_id: i32, product_id: i32) -> anyhow::Result<()> {
            let mut rows = self.rows.lock().unwrap();
            *rows.entry((user_id, product_id)).or_insert(0) += 1;
            Ok(())
        }

        async fn update_quantity(
            &self,
            user_id: i32,
            product_id: i32,
            quantity: i32,
        ) -> anyhow::Result<bool> {
            let mut rows = self.rows.lock().unwrap();
            match rows.get_mut(&(user_id, product_id)) {
                Some(q) => {
                    *q = quantity;
                    Ok(true)
                }
                None => Ok(false),
            }
        }

        async fn clear(&self, user_id: i32) -> anyhow::Result<()> {
            let mut rows = self.rows.lock().unwrap();
            rows.retain(|&(uid, _), _| uid != user_id);
            Ok(())
        }
    }

    fn repos() -> (FakeCartRepo, FakeProductRepo) {
        let products = vec![product(7, "19.99"), product(8, "5.00")];
        (
            FakeCartRepo {
                rows: Mutex::new(HashMap::new()),
                products: products.clone(),
            },
            FakeProductRepo { products },
        )
    }

    #[tokio::test]
    async fn adding_twice_yields_one_row_at_quantity_two() {
        let (cart_repo, product_repo) = repos();
        let uc = AddProduct {
            cart_repo: &cart_repo,
            product_repo: &product_repo,
        };
        uc.execute(1, 7).await.unwrap();
        uc.execute(1, 7).await.unwrap();

        let cart = GetCart { repo: &cart_repo }.execute(1).await.unwrap();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(7).unwrap().quantity, 2);
    }

    #[tokio::test]
    async fn adding_an_unknown_product_is_not_found() {
        let (cart_repo, product_repo) = repos();
        let uc = AddProduct {
            cart_repo: &cart_repo,
            product_repo: &product_repo,
        };
        let result = uc.execute(1, 999).await;
        assert_matches!(result, Err(AppError::NotFound(_)));
        let cart = GetCart { repo: &cart_repo }.execute(1).await.unwrap();
        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn add_returns_the_product_snapshot() {
        let (cart_repo, product_repo) = repos();
        let added = AddProduct {
            cart_repo: &cart_repo,
            product_repo: &product_repo,
        }
        .execute(1, 7)
        .await
        .unwrap();
        assert_eq!(added.product_id, 7);
        assert_eq!(added.price, "19.99".parse().unwrap());
    }

    #[tokio::test]
    async fn updating_a_product_not_in_cart_is_not_found_and_creates_no_row() {
        let (cart_repo, _) = repos();
        let result = UpdateQuantity { repo: &cart_repo }.execute(1, 7, 3).await;
        assert_matches!(result, Err(AppError::NotFound(_)));
        let cart = GetCart { repo: &cart_repo }.execute(1).await.unwrap();
        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn updated_quantity_shows_up_in_the_fetched_cart() {
        let (cart_repo, product_repo) = repos();
        AddProduct {
            cart_repo: &cart_repo,
            product_repo: &product_repo,
        }
        .execute(1, 7)
        .await
        .unwrap();
        UpdateQuantity { repo: &cart_repo }
            .execute(1, 7, 5)
            .await
            .unwrap();

        let cart = GetCart { repo: &cart_repo }.execute(1).await.unwrap();
        assert_eq!(cart.get(7).unwrap().quantity, 5);
    }

    #[tokio::test]
    async fn nonpositive_quantity_is_rejected_before_any_data_access() {
        let (cart_repo, product_repo) = repos();
        AddProduct {
            cart_repo: &cart_repo,
            product_repo: &product_repo,
        }
        .execute(1, 7)
        .await
        .unwrap();

        for bad in [0, -3] {
            let result = UpdateQuantity { repo: &cart_repo }.execute(1, 7, bad).await;
            assert_matches!(result, Err(AppError::Validation(_)));
        }
        // the stored row is untouched
        let cart = GetCart { repo: &cart_repo }.execute(1).await.unwrap();
        assert_eq!(cart.get(7).unwrap().quantity, 1);
    }

    #[tokio::test]
    async fn clearing_is_idempotent() {
        let (cart_repo, product_repo) = repos();
        AddProduct {
            cart_repo: &cart_repo,
            product_repo: &product_repo,
        }
        .execute(1, 7)
        .await
        .unwrap();

        ClearCart { repo: &cart_repo }.execute(1).await.unwrap();
        let first = GetCart { repo: &cart_repo }.execute(1).await.unwrap();
        assert!(first.is_empty());

        ClearCart { repo: &cart_repo }.execute(1).await.unwrap();
        let second = GetCart { repo: &cart_repo }.execute(1).await.unwrap();
        assert!(second.is_empty());
    }

    #[tokio::test]
    async fn clearing_leaves_other_users_carts_alone() {
        let (cart_repo, product_repo) = repos();
        let uc = AddProduct {
            cart_repo: &cart_repo,
            product_repo: &product_repo,
        };
        uc.execute(1, 7).await.unwrap();
        uc.execute(2, 8).await.unwrap();

        ClearCart { repo: &cart_repo }.execute(1).await.unwrap();
        let other = GetCart { repo: &cart_repo }.execute(2).await.unwrap();
        assert_eq!(other.len(), 1);
    }

    /// The end-to-end sequence from the contract: add, add again, clear.
    #[tokio::test]
    async fn add_add_clear_scenario() {
        let (cart_repo, product_repo) = repos();
        let add = AddProduct {
            cart_repo: &cart_repo,
            product_repo: &product_repo,
        };
        let get = GetCart { repo: &cart_repo };

        add.execute(1, 7).await.unwrap();
        assert_eq!(get.execute(1).await.unwrap().get(7).unwrap().quantity, 1);

        add.execute(1, 7).await.unwrap();
        assert_eq!(get.execute(1).await.unwrap().get(7).unwrap().quantity, 2);

        ClearCart { repo: &cart_repo }.execute(1).await.unwrap();
        assert!(get.execute(1).await.unwrap().is_empty());
    }
}
