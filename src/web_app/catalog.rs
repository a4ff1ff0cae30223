// web_app/catalog.rs - Catalog view-model core
//
// Pure functions behind the product list: the filter projection, the manual
// price sort, distinct-type extraction, and the shape check for the remote
// catalog payload.
//
// Philosophy: no signals here. The page wires these into the reactive graph;
// everything in this module is testable without a runtime.

use crate::web_app::model::{FilterState, Product};
use thiserror::Error;

/// Errors raised while decoding the remote catalog payload
#[derive(Debug, Error)]
pub enum PayloadError {
    /// The body parsed as JSON but was not an array of products.
    #[error("expected an array of products, got {0}")]
    NotAnArray(&'static str),
    /// An element of the array did not match the product shape.
    #[error("malformed product record: {0}")]
    Item(#[from] serde_json::Error),
}

/// Project the base collection through the current filters.
///
/// Original order is preserved. The price check only runs once either bound
/// has moved off its sentinel default; the type check only runs when a
/// concrete type is selected. An inverted range (`min > max`) simply yields
/// an empty projection.
pub fn apply_filters(base: &[Product], filters: &FilterState) -> Vec<Product> {
    let mut projected: Vec<Product> = base.to_vec();

    if filters.price_filter_active() {
        projected.retain(|p| p.price >= filters.min_price && p.price <= filters.max_price);
    }

    if filters.type_filter_active() {
        projected.retain(|p| p.product_type == filters.selected_type);
    }

    projected
}

/// Sort a product list ascending by price.
///
/// Stable: products with equal prices keep their relative order.
pub fn sort_by_price(products: &mut [Product]) {
    products.sort_by(|a, b| a.price.total_cmp(&b.price));
}

/// Distinct product types in order of first appearance.
///
/// Type cardinality is low, so the linear `contains` scan stays cheap.
pub fn distinct_types(products: &[Product]) -> Vec<String> {
    let mut types = Vec::new();
    for product in products {
        if !types.contains(&product.product_type) {
            types.push(product.product_type.clone());
        }
    }
    types
}

/// Validate and decode the remote catalog body.
///
/// The endpoint is expected to return a JSON array of product objects;
/// anything else is a malformed payload.
pub fn products_from_value(value: serde_json::Value) -> Result<Vec<Product>, PayloadError> {
    let items = match value {
        serde_json::Value::Array(items) => items,
        other => return Err(PayloadError::NotAnArray(json_kind(&other))),
    };

    items
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(PayloadError::from))
        .collect()
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
