use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::domain::catalog::Product;

/// One persisted cart row joined with its product snapshot.
#[derive(Debug, Clone)]
pub struct ShoppingCartItem {
    pub product: Product,
    pub quantity: i32,
}

impl ShoppingCartItem {
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// In-memory view of a user's cart, keyed by product id. Exists only as a
/// query result; the persisted unit is the row.
#[derive(Debug, Clone, Default)]
pub struct ShoppingCart {
    items: BTreeMap<i32, ShoppingCartItem>,
}

impl ShoppingCart {
    pub fn add(&mut self, item: ShoppingCartItem) {
        self.items.insert(item.product.product_id, item);
    }

    pub fn get(&self, product_id: i32) -> Option<&ShoppingCartItem> {
        self.items.get(&product_id)
    }

    /// Items in ascending product-id order.
    pub fn items(&self) -> impl Iterator<Item = &ShoppingCartItem> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total(&self) -> Decimal {
        self.items.values().map(ShoppingCartItem::line_total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i32, price: &str) -> Product {
        Product {
            product_id: id,
            name: format!("product {id}"),
            price: price.parse().unwrap(),
            category_id: 1,
            description: None,
            color: None,
            image_url: None,
            stock: 10,
            featured: false,
        }
    }

    #[test]
    fn line_total_multiplies_price_by_quantity() {
        let item = ShoppingCartItem {
            product: product(1, "2.50"),
            quantity: 3,
        };
        assert_eq!(item.line_total(), "7.50".parse().unwrap());
    }

    #[test]
    fn total_sums_line_totals() {
        let mut cart = ShoppingCart::default();
        cart.add(ShoppingCartItem {
            product: product(1, "2.50"),
            quantity: 2,
        });
        cart.add(ShoppingCartItem {
            product: product(2, "10.00"),
            quantity: 1,
        });
        assert_eq!(cart.total(), "15.00".parse().unwrap());
    }

    #[test]
    fn empty_cart_totals_zero() {
        let cart = ShoppingCart::default();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Decimal::ZERO);
    }

    #[test]
    fn items_iterate_in_product_id_order() {
        let mut cart = ShoppingCart::default();
        cart.add(ShoppingCartItem {
            product: product(9, "1.00"),
            quantity: 1,
        });
        cart.add(ShoppingCartItem {
            product: product(3, "1.00"),
            quantity: 1,
        });
        let ids: Vec<i32> = cart.items().map(|i| i.product.product_id).collect();
        assert_eq!(ids, vec![3, 9]);
    }
}
