// web_app/context.rs - Item store context
//
// The item store supplies the authoritative base collection for the product
// list: the filter projection always starts from `items`, never from the
// remote fetch result.

use leptos::prelude::*;

use crate::web_app::model::Product;

/// Reactive store of catalog items shared through context
#[derive(Clone, Copy)]
pub struct ItemStore {
    pub items: RwSignal<Vec<Product>>,
}

impl ItemStore {
    pub fn new(items: Vec<Product>) -> Self {
        Self {
            items: RwSignal::new(items),
        }
    }
}

/// Provides the item store to every component below it
#[component]
pub fn ItemProvider(
    /// Initial base collection
    #[prop(default = Vec::new())]
    items: Vec<Product>,
    children: Children,
) -> impl IntoView {
    provide_context(ItemStore::new(items));
    children()
}

/// Access the item store provided by an ancestor `ItemProvider`.
pub fn use_item_store() -> ItemStore {
    expect_context::<ItemStore>()
}
