// web_app/components/product.rs - Product display components
//
// Components for displaying products:
// - ProductRow: one catalog row (the row renderer)
// - ProductListView: the displayed list, keyed by product id

use leptos::prelude::*;

use crate::web_app::model::Product;

use super::common::{Badge, PriceDisplay};

/// Single product row
#[component]
pub fn ProductRow(
    /// The product to display
    product: Product,
) -> impl IntoView {
    view! {
        <li class="flex items-center justify-between gap-4 bg-white px-4 py-3 rounded-lg \
                   border border-gray-100 shadow-sm">
            <span class="font-medium text-gray-900">{product.name.clone()}</span>
            <div class="flex items-center gap-3">
                <Badge>{product.product_type.clone()}</Badge>
                <PriceDisplay price=product.price />
            </div>
        </li>
    }
}

/// The displayed list, or the placeholder when it is empty
#[component]
pub fn ProductListView(
    /// Products to render
    products: Signal<Vec<Product>>,
) -> impl IntoView {
    view! {
        <ul class="space-y-2 mt-6">
            <Show
                when=move || !products.get().is_empty()
                fallback=|| view! {
                    <p class="text-center text-gray-500 py-12">"No products available"</p>
                }
            >
                <For
                    each=move || products.get()
                    key=|p| p.id
                    children=move |product| {
                        view! { <ProductRow product=product /> }
                    }
                />
            </Show>
        </ul>
    }
}

#[cfg(test)]
mod tests {
    use crate::web_app::model::Product;

    fn product(id: i64, price: f64) -> Product {
        Product {
            id,
            name: format!("Product {id}"),
            price,
            product_type: "misc".to_string(),
            extra: serde_json::Map::new(),
        }
    }

    #[test]
    fn test_empty_state_condition() {
        let products: Vec<Product> = vec![];
        assert!(products.is_empty());

        let products = vec![product(1, 10.0)];
        assert!(!products.is_empty());
    }

    #[test]
    fn test_row_keys_are_product_ids() {
        let products = vec![product(3, 10.0), product(7, 20.0)];
        let keys: Vec<i64> = products.iter().map(|p| p.id).collect();
        assert_eq!(keys, vec![3, 7]);
    }
}
