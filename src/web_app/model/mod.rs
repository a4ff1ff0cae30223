// web_app/model/mod.rs - Shared data models for client and server
//
// These structs are used throughout the application for type-safe
// communication between the WASM client and the server.

use serde::{Deserialize, Serialize};

/// Sentinel defaults for the price filter. While BOTH bounds sit at these
/// values the price filter is bypassed entirely; moving either bound arms
/// the inclusive range check.
pub const MIN_PRICE_DEFAULT: f64 = 0.0;
pub const MAX_PRICE_DEFAULT: f64 = 3000.0;

/// Selector value meaning "no type filter".
pub const TYPE_ALL: &str = "all";

/// Product record from the catalog
///
/// Only the fields the view interprets are typed. Everything else the
/// catalog sends is kept verbatim in `extra` and round-trips untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Stable unique identifier; the hosted catalog names it `_id`
    #[serde(alias = "_id")]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    pub price: f64,
    #[serde(rename = "type")]
    pub product_type: String,
    /// Opaque passthrough fields
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Filter parameters applied to the base collection
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub min_price: f64,
    pub max_price: f64,
    pub selected_type: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            min_price: MIN_PRICE_DEFAULT,
            max_price: MAX_PRICE_DEFAULT,
            selected_type: TYPE_ALL.to_string(),
        }
    }
}

impl FilterState {
    /// True once either price bound has moved off its sentinel default.
    pub fn price_filter_active(&self) -> bool {
        self.min_price != MIN_PRICE_DEFAULT || self.max_price != MAX_PRICE_DEFAULT
    }

    /// True when a concrete product type is selected.
    pub fn type_filter_active(&self) -> bool {
        self.selected_type != TYPE_ALL
    }
}
