// fixtures/mod.rs - Sample catalog data
//
// Reusable product data for the demo item provider and for tests.
// The philosophy: "Set up your data once, use it everywhere."

use crate::web_app::model::Product;

/// Build a product with empty passthrough fields.
pub fn product(id: i64, name: &str, price: f64, product_type: &str) -> Product {
    Product {
        id,
        name: name.to_string(),
        price,
        product_type: product_type.to_string(),
        extra: serde_json::Map::new(),
    }
}

/// A small demo catalog covering several product types and price points.
pub fn sample_products() -> Vec<Product> {
    vec![
        product(1, "Trail Running Shoes", 89.99, "footwear"),
        product(2, "Waterproof Shell Jacket", 179.00, "outerwear"),
        product(3, "Merino Hiking Socks", 14.50, "footwear"),
        product(4, "Insulated Down Vest", 129.95, "outerwear"),
        product(5, "Aluminum Trekking Poles", 59.99, "equipment"),
        product(6, "Two-Person Backpacking Tent", 249.00, "equipment"),
        product(7, "Titanium Camp Mug", 24.99, "equipment"),
        product(8, "Approach Shoes", 119.00, "footwear"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_products_have_unique_ids() {
        let products = sample_products();
        let mut ids: Vec<i64> = products.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn test_sample_products_cover_multiple_types() {
        let products = sample_products();
        let mut types: Vec<&str> = products.iter().map(|p| p.product_type.as_str()).collect();
        types.sort_unstable();
        types.dedup();
        assert!(types.len() >= 3);
    }
}
