// web_app/components/common.rs - Reusable UI components
//
// Small, composable components used across the catalog view.
// Philosophy: Pure, stateless components that receive all data via props.

use leptos::prelude::*;

/// Primary button component
#[component]
pub fn Button(
    /// Button label text
    children: Children,
    /// Click handler
    on_click: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 \
                   transition-colors font-medium shadow-sm active:transform active:scale-95"
            on:click=move |_| on_click.run(())
        >
            {children()}
        </button>
    }
}

/// Badge component for short labels (product types)
#[component]
pub fn Badge(children: Children) -> impl IntoView {
    view! {
        <span class="px-2.5 py-0.5 text-xs font-medium rounded-full bg-gray-100 text-gray-800 border border-gray-200">
            {children()}
        </span>
    }
}

/// Price display component
///
/// Formats and displays a price value.
#[component]
pub fn PriceDisplay(
    /// The price value
    price: f64,
    /// Whether to highlight (larger, bolder)
    #[prop(default = false)]
    highlight: bool,
) -> impl IntoView {
    let class = if highlight {
        "text-xl font-bold text-green-600"
    } else {
        "text-gray-900 font-medium"
    };

    view! {
        <span class=class>
            {format!("${:.2}", price)}
        </span>
    }
}
