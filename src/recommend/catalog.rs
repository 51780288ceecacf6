use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub description: String,
}

impl Product {
    pub fn new(id: i64, title: &str, description: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    /// Position of the first product carrying `id`, if any.
    pub fn position(products: &[Product], id: i64) -> Option<usize> {
        products.iter().position(|p| p.id == id)
    }
}

impl Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Product {{ id: {}, title: {} }}", self.id, self.title)
    }
}

lazy_static! {
    pub static ref CATALOG: Vec<Product> = vec![
        Product::new(1, "Product A", "This is a great product for your needs."),
        Product::new(
            2,
            "Product B",
            "An excellent choice for anyone looking for quality."
        ),
        Product::new(
            3,
            "Product C",
            "A fantastic product that meets all your requirements."
        ),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_three_products() {
        let ids = CATALOG.iter().map(|p| p.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn position_finds_first_match() {
        assert_eq!(Product::position(&CATALOG, 3), Some(2));
        assert_eq!(Product::position(&CATALOG, 42), None);
    }

    #[test]
    fn product_deserializes_from_json() {
        let product: Product = serde_json::from_str(
            r#"{"id": 7, "title": "Product Z", "description": "Plain text."}"#,
        )
        .unwrap();
        assert_eq!(product, Product::new(7, "Product Z", "Plain text."));
    }
}
