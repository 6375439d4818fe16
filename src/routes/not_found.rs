//! Minimalistic 404 page for unknown routes.

use crate::components::AppShell;
use leptos::prelude::*;
use leptos_router::components::A;

/// Renders a clean not-found page for top-level route fallbacks.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="flex flex-col items-center justify-center min-h-[50vh] text-center px-4">
                <div class="relative">
                    <h1 class="text-9xl font-black text-gray-100 select-none">"404"</h1>
                    <p class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 text-2xl font-bold text-gray-900 whitespace-nowrap">
                        "Page not found"
                    </p>
                </div>

                <div class="mt-4 space-y-6">
                    <p class="text-gray-500 max-w-sm mx-auto">
                        "The page you requested is missing or has moved."
                    </p>
                    <A
                        href="/"
                        {..}
                        class="inline-flex items-center px-5 py-2.5 text-sm font-bold text-white bg-blue-600 rounded-xl hover:bg-blue-700 transition-all"
                    >
                        "Back to the store"
                    </A>
                </div>
            </div>
        </AppShell>
    }
}
