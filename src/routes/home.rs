//! Storefront landing page. Intentionally minimal while the catalog features
//! are built out elsewhere.

use crate::components::AppShell;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="max-w-7xl mx-auto px-6 lg:px-12 py-20 text-center">
                <h1 class="text-4xl font-black text-gray-900 tracking-tight">
                    "Smart Shop"
                </h1>
                <p class="mt-3 text-gray-500 font-medium">
                    "Everything you need, from sellers you trust."
                </p>
                <div class="mt-8">
                    <A
                        href="/signup"
                        {..}
                        class="inline-flex items-center px-6 py-3 text-sm font-black text-white bg-blue-600 rounded-xl shadow-lg shadow-blue-500/30 hover:bg-blue-700 transition-all"
                    >
                        "Create an account"
                    </A>
                </div>
            </div>
        </AppShell>
    }
}
