// web_app/components/filters.rs - Filter and sort controls
//
// These components make up the control strip above the product list:
// - PriceRangeInputs: numeric min/max bound to the price signals
// - TypeSelect: product type selector fed by the derived type set
// - FilterBar: the full strip, sort/buy triggers included

use leptos::prelude::*;

use crate::web_app::model::TYPE_ALL;

use super::common::Button;

/// Coercion applied to the numeric inputs: anything that does not parse
/// (including an emptied field) lands on 0.0.
pub fn parse_price_input(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

/// Min/max price inputs
///
/// Each keystroke writes straight into the filter signals; the projection
/// reapplies on every change, so there is no separate "apply" step.
#[component]
pub fn PriceRangeInputs(
    /// Minimum price bound
    min_price: RwSignal<f64>,
    /// Maximum price bound
    max_price: RwSignal<f64>,
) -> impl IntoView {
    view! {
        <label class="flex items-center gap-2 text-sm font-medium text-gray-700">
            "Min Price:"
            <input
                type="number"
                class="w-24 px-2 py-1.5 border border-gray-300 rounded-lg text-sm \
                       focus:ring-2 focus:ring-blue-500 focus:border-transparent outline-none"
                prop:value=move || min_price.get().to_string()
                on:input=move |ev| min_price.set(parse_price_input(&event_target_value(&ev)))
            />
        </label>

        <label class="flex items-center gap-2 text-sm font-medium text-gray-700">
            "Max Price:"
            <input
                type="number"
                class="w-24 px-2 py-1.5 border border-gray-300 rounded-lg text-sm \
                       focus:ring-2 focus:ring-blue-500 focus:border-transparent outline-none"
                prop:value=move || max_price.get().to_string()
                on:input=move |ev| max_price.set(parse_price_input(&event_target_value(&ev)))
            />
        </label>
    }
}

/// Product type selector
///
/// Always offers the explicit "All" option; the rest comes from the type set
/// derived from the fetched catalog, with a placeholder option while that
/// set is still empty.
#[component]
pub fn TypeSelect(
    /// Currently selected type ("all" = no filter)
    selected_type: RwSignal<String>,
    /// Distinct types observed in the fetched catalog
    type_options: Signal<Vec<String>>,
) -> impl IntoView {
    view! {
        <label class="flex items-center gap-2 text-sm font-medium text-gray-700">
            "Filter by Type:"
            <select
                class="px-3 py-1.5 border border-gray-300 rounded-lg bg-white text-sm \
                       focus:ring-2 focus:ring-blue-500 focus:border-transparent \
                       outline-none cursor-pointer"
                on:change=move |ev| selected_type.set(event_target_value(&ev))
            >
                <option value=TYPE_ALL selected=move || selected_type.get() == TYPE_ALL>
                    "All"
                </option>
                {move || {
                    let options = type_options.get();
                    if options.is_empty() {
                        view! {
                            <option value=TYPE_ALL>"No types available"</option>
                        }
                        .into_any()
                    } else {
                        options
                            .into_iter()
                            .map(|product_type| {
                                let value = product_type.clone();
                                let checked = product_type.clone();
                                view! {
                                    <option
                                        value=value
                                        selected=move || selected_type.get() == checked
                                    >
                                        {product_type}
                                    </option>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }
                }}
            </select>
        </label>
    }
}

/// Complete filter strip
///
/// Both price-labeled buttons run the same sort handler; the range inputs
/// already refilter on every change, so the second button adds no extra
/// filtering step.
#[component]
pub fn FilterBar(
    /// Minimum price bound
    min_price: RwSignal<f64>,
    /// Maximum price bound
    max_price: RwSignal<f64>,
    /// Currently selected type
    selected_type: RwSignal<String>,
    /// Distinct types for the selector
    type_options: Signal<Vec<String>>,
    /// Sort trigger
    on_sort: Callback<()>,
    /// Buy trigger
    on_buy: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="flex flex-wrap items-center gap-4 bg-white p-4 rounded-xl border border-gray-200 shadow-sm">
            <Button on_click=on_sort>"Sort by Price"</Button>

            <PriceRangeInputs min_price=min_price max_price=max_price />

            <Button on_click=on_sort>"Filter by Price Range"</Button>

            <TypeSelect selected_type=selected_type type_options=type_options />

            <Button on_click=on_buy>"Buy Now"</Button>
        </div>
    }
}
