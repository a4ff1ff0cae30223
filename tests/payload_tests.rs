// Remote payload decoding tests
//
// The loader accepts only a JSON array of product objects; anything else is
// rejected, and a rejected payload must leave view state untouched.

use serde_json::json;
use storefront::web_app::catalog::{distinct_types, products_from_value, PayloadError};
use storefront::web_app::model::Product;

#[test]
fn array_body_decodes_to_products() {
    let products = products_from_value(json!([
        {"id": 1, "name": "Trail Shoes", "price": 89.99, "type": "footwear"},
        {"id": 2, "name": "Shell Jacket", "price": 179.0, "type": "outerwear"}
    ]))
    .unwrap();

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].name, "Trail Shoes");
    assert_eq!(products[1].product_type, "outerwear");
}

#[test]
fn empty_array_is_a_valid_catalog() {
    let products = products_from_value(json!([])).unwrap();
    assert!(products.is_empty());
    assert!(distinct_types(&products).is_empty());
}

#[test]
fn object_body_is_rejected() {
    let err = products_from_value(json!({"products": []})).unwrap_err();
    assert!(matches!(err, PayloadError::NotAnArray("an object")));
}

#[test]
fn scalar_bodies_are_rejected() {
    for (body, kind) in [
        (json!(null), "null"),
        (json!(true), "a boolean"),
        (json!(3), "a number"),
        (json!("nope"), "a string"),
    ] {
        let err = products_from_value(body).unwrap_err();
        assert!(matches!(err, PayloadError::NotAnArray(k) if k == kind));
    }
}

#[test]
fn malformed_item_is_rejected() {
    let err = products_from_value(json!([
        {"id": 1, "name": "No price", "type": "A"}
    ]))
    .unwrap_err();

    assert!(matches!(err, PayloadError::Item(_)));
}

#[test]
fn rejected_payload_leaves_state_at_prior_values() {
    // Replay of the loader's failure branch: nothing is written on Err
    let mut type_options: Vec<String> = Vec::new();
    let mut displayed: Vec<Product> = Vec::new();

    if let Ok(products) = products_from_value(json!({})) {
        type_options = distinct_types(&products);
        displayed = products;
    }

    assert!(type_options.is_empty());
    assert!(displayed.is_empty());
}

#[test]
fn unknown_fields_round_trip_unmodified() {
    let products = products_from_value(json!([
        {
            "id": 5,
            "name": "Camp Mug",
            "price": 24.99,
            "type": "equipment",
            "color": "titanium",
            "capacity_ml": 450,
            "tags": ["camping", "drinkware"]
        }
    ]))
    .unwrap();

    let wire = serde_json::to_value(&products[0]).unwrap();
    assert_eq!(wire["color"], "titanium");
    assert_eq!(wire["capacity_ml"], 450);
    assert_eq!(wire["tags"], json!(["camping", "drinkware"]));
    assert_eq!(wire["type"], "equipment");
}

#[test]
fn mongo_style_underscore_id_is_accepted() {
    let products = products_from_value(json!([
        {"_id": 99, "name": "Legacy", "price": 1.0, "type": "misc"}
    ]))
    .unwrap();

    assert_eq!(products[0].id, 99);
}
