// web_app/api/catalog.rs - Remote catalog client
//
// One outbound GET against the configured catalog endpoint. The endpoint URL
// is configuration, not behavioral contract; the default points at the
// hosted demo backend.

use reqwest::{Client, StatusCode};

use crate::web_app::catalog::{products_from_value, PayloadError};
use crate::web_app::model::Product;

const DEFAULT_PRODUCTS_URL: &str = "https://backendju-3.onrender.com/api/products";
const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Failures while reading the remote catalog
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The request never produced a response.
    #[error("catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The catalog endpoint answered with a non-success status.
    #[error("catalog responded with status {0}")]
    Status(StatusCode),
    /// The response body was not an array of products.
    #[error(transparent)]
    Payload(#[from] PayloadError),
}

/// The catalog endpoint URL, from `PRODUCTS_API_URL` or the default.
pub fn products_url() -> String {
    std::env::var("PRODUCTS_API_URL").unwrap_or_else(|_| DEFAULT_PRODUCTS_URL.to_string())
}

/// Fetch all products from the remote catalog.
///
/// Never retried; callers decide what a failure means for their state.
pub async fn fetch_catalog() -> Result<Vec<Product>, CatalogError> {
    let url = products_url();
    tracing::debug!("Fetching catalog from {}", url);

    let client = Client::builder().user_agent(APP_USER_AGENT).build()?;
    let response = client.get(&url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(CatalogError::Status(status));
    }

    let body: serde_json::Value = response.json().await?;
    Ok(products_from_value(body)?)
}
