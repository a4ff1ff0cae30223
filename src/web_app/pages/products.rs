// web_app/pages/products.rs - Product list page
//
// Owns the catalog view state: the one-shot remote fetch, the filter/sort
// projection over the item store, and the handlers behind the controls.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::web_app::catalog::{apply_filters, distinct_types, sort_by_price};
use crate::web_app::components::{FilterBar, ProductListView};
use crate::web_app::context::use_item_store;
use crate::web_app::model::{FilterState, Product, MAX_PRICE_DEFAULT, MIN_PRICE_DEFAULT, TYPE_ALL};
use crate::web_app::server_fns::fetch_products;

/// Product catalog page
///
/// The state machine is deliberately flat: no pending or error states for
/// the fetch. A failed fetch is logged and the view keeps whatever it had.
#[component]
pub fn ProductListPage() -> impl IntoView {
    let store = use_item_store();

    // Displayed list starts empty until the first recompute
    let displayed = RwSignal::new(Vec::<Product>::new());

    // Filter state
    let min_price = RwSignal::new(MIN_PRICE_DEFAULT);
    let max_price = RwSignal::new(MAX_PRICE_DEFAULT);
    let selected_type = RwSignal::new(TYPE_ALL.to_string());

    // Type options come from the fetched catalog, not from the item store
    let type_options = RwSignal::new(Vec::<String>::new());

    // One-shot catalog fetch. The effect tracks no signals, so it runs once
    // on the client after mount (effects never run during SSR). On failure
    // both signals keep their prior values.
    Effect::new(move || {
        spawn_local(async move {
            match fetch_products().await {
                Ok(products) => {
                    type_options.set(distinct_types(&products));
                    // The fetched sequence lands in the displayed list once;
                    // every recompute below reads the item store instead.
                    displayed.set(products);
                }
                Err(e) => leptos::logging::error!("error fetching products: {e}"),
            }
        });
    });

    // Recompute the projection whenever the base collection or any filter
    // parameter changes. A manual sort survives only until this runs again.
    Effect::new(move || {
        let filters = FilterState {
            min_price: min_price.get(),
            max_price: max_price.get(),
            selected_type: selected_type.get(),
        };
        let base = store.items.get();
        displayed.set(apply_filters(&base, &filters));
    });

    // Reorder the current projection ascending by price
    let on_sort = Callback::new(move |()| {
        displayed.update(|products| sort_by_price(products));
    });

    // Hand the displayed list to the order workflow. Nothing is validated
    // here; the order service is an external collaborator.
    let on_buy = Callback::new(move |()| {
        let items = displayed.get_untracked();
        let ids: Vec<i64> = items.iter().map(|p| p.id).collect();
        leptos::logging::log!("items to buy: {} products {:?}", items.len(), ids);
    });

    let displayed_view: Signal<Vec<Product>> = displayed.into();
    let type_options_view: Signal<Vec<String>> = type_options.into();

    view! {
        <div class="max-w-4xl mx-auto px-4 py-8">
            <FilterBar
                min_price=min_price
                max_price=max_price
                selected_type=selected_type
                type_options=type_options_view
                on_sort=on_sort
                on_buy=on_buy
            />

            <ProductListView products=displayed_view />
        </div>
    }
}
