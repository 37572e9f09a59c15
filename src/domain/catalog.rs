use rust_decimal::Decimal;

#[derive(Debug, Clone)]
pub struct Category {
    pub category_id: i32,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Product {
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

/// Optional filters for the catalog search. A `None` field does not
/// constrain the result.
#[derive(Debug, Clone, Default)]
pub struct ProductFilters {
    pub category_id: Option<i32>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub color: Option<String>,
}
