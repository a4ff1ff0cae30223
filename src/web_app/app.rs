// web_app/app.rs - Root application component
//
// This is the entry point for the Leptos application.
// It sets up routing, the shared item store, and meta tags.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::fixtures::sample_products;
use crate::web_app::context::ItemProvider;
use crate::web_app::pages::ProductListPage;

/// Root application component
///
/// Sets up:
/// - Meta tags
/// - The item store (the base collection the filters operate on)
/// - Router with routes
#[component]
pub fn App() -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();

    view! {
        // HTML meta tags
        <Title text="Storefront" />
        <Meta name="description" content="Product catalog with price and type filtering" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        // Stylesheet link (Tailwind CSS)
        <Stylesheet id="leptos" href="/pkg/storefront.css" />

        // The item provider stands in for the upstream item source; the demo
        // catalog seeds the base collection.
        <ItemProvider items=sample_products()>
            <Router>
                <main class="min-h-screen bg-gray-50 font-sans text-gray-900">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=ProductListPage />
                        <Route path=path!("/products") view=ProductListPage />
                    </Routes>
                </main>
            </Router>
        </ItemProvider>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"Page not found"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors"
                >
                    "Go to Products"
                </a>
            </div>
        </div>
    }
}
