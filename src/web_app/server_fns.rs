// web_app/server_fns.rs - Leptos server function declarations
//
// These are accessible from both client (WASM) and server (native Rust).
// The #[server] macro automatically generates:
// - On server: The actual function implementation
// - On client: A stub that makes HTTP POST requests to the server
//
// IMPORTANT: This file must be compiled for BOTH ssr and hydrate features!

use leptos::prelude::*;

use crate::web_app::model::Product;

/// Fetch the full product catalog from the remote API.
///
/// Parameterless: the endpoint is fixed server-side configuration. The error
/// branch carries the catalog error text back to the caller, which logs it
/// and keeps its prior state.
#[server(FetchProducts, "/api")]
pub async fn fetch_products() -> Result<Vec<Product>, ServerFnError> {
    use crate::web_app::api::catalog;

    tracing::info!("Catalog fetch requested");

    let products = catalog::fetch_catalog().await;

    match &products {
        Ok(list) => tracing::info!("Catalog fetch succeeded: {} products", list.len()),
        Err(e) => tracing::error!("Catalog fetch failed: {}", e),
    }

    products.map_err(|e| ServerFnError::new(format!("catalog fetch failed: {e}")))
}
