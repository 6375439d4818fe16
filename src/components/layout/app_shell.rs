//! Storefront chrome: brand bar with product search and account actions,
//! plus the department/navigation row. It centralizes header markup and the
//! mobile menu toggle so routes can focus on content. Navigation is purely
//! client-side; the catalog and cart counters are placeholders until their
//! features land.

use crate::app_lib::build_info;
use leptos::prelude::*;
use leptos_router::components::A;

/// Department links shown in the "All Departments" dropdown.
const DEPARTMENTS: [(&str, &str); 8] = [
    ("Electronics", "/products?category=electronics"),
    ("Fashion", "/products?category=fashion"),
    ("Home & Garden", "/products?category=home-garden"),
    ("Sports & Outdoors", "/products?category=sports"),
    ("Toys & Games", "/products?category=toys"),
    ("Beauty & Health", "/products?category=beauty"),
    ("Automotive", "/products?category=automotive"),
    ("Groceries", "/products?category=groceries"),
];

/// Primary navigation links.
const NAV_LINKS: [(&str, &str); 5] = [
    ("Home", "/"),
    ("Products", "/products"),
    ("Shops", "/shops"),
    ("Offers", "/offers"),
    ("Become A Seller", "/become-a-seller"),
];

/// Wraps routes with the storefront header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let toggle_menu = move |_| {
        set_menu_open.update(|open| *open = !*open);
    };

    view! {
        <div class="min-h-screen flex flex-col bg-gray-50">
            <header class="w-full bg-white font-sans">
                <div class="bg-white py-5">
                    <div class="max-w-7xl mx-auto px-6 lg:px-12 flex items-center justify-between gap-10">
                        <A
                            href="/"
                            {..}
                            class="flex items-center gap-2 text-2xl font-black text-blue-600 shrink-0 tracking-tighter"
                            on:click=move |_| set_menu_open.set(false)
                        >
                            <span class="material-symbols-outlined text-3xl">"storefront"</span>
                            <span>"NEXUS"</span>
                        </A>

                        <div class="flex-1 max-w-xl hidden md:block">
                            <div class="relative">
                                <input
                                    type="text"
                                    placeholder="Search products..."
                                    class="w-full bg-gray-50 border border-gray-200 rounded-lg py-2.5 pl-5 pr-12 focus:bg-white focus:ring-2 focus:ring-blue-500/20 focus:border-blue-500 transition-all outline-none text-sm"
                                />
                                <button
                                    type="button"
                                    class="absolute right-3 top-1/2 -translate-y-1/2 bg-blue-600 text-white p-1.5 rounded-md hover:bg-blue-700 transition-colors"
                                >
                                    <span class="material-symbols-outlined text-base">"search"</span>
                                </button>
                            </div>
                        </div>

                        <HeaderActions />
                    </div>
                </div>

                <div class="w-full bg-white py-3 border-t border-gray-50">
                    <div class="max-w-7xl mx-auto px-6 lg:px-12 flex items-center justify-between">
                        <div class="flex items-center gap-6">
                            <div class="relative group">
                                <button
                                    type="button"
                                    class="flex items-center gap-3 bg-gray-900 text-white px-5 py-2.5 rounded-lg hover:bg-blue-600 transition-all duration-300 font-semibold text-sm"
                                >
                                    <span class="material-symbols-outlined text-lg">"grid_view"</span>
                                    <span>"All Departments"</span>
                                    <span class="material-symbols-outlined text-sm opacity-70 group-hover:rotate-180 transition-transform">
                                        "expand_more"
                                    </span>
                                </button>

                                <div class="absolute top-[calc(100%+5px)] left-0 w-64 bg-white border border-gray-100 rounded-xl shadow-2xl opacity-0 invisible translate-y-2 group-hover:opacity-100 group-hover:visible group-hover:translate-y-0 transition-all duration-200 z-[110] py-2">
                                    {DEPARTMENTS
                                        .into_iter()
                                        .map(|(name, href)| {
                                            view! {
                                                <a
                                                    href=href
                                                    class="flex items-center justify-between px-5 py-3 hover:bg-blue-50 hover:text-blue-600 transition-colors text-sm font-medium text-gray-700"
                                                >
                                                    {name}
                                                </a>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>

                            <nav class="hidden lg:flex items-center gap-1">
                                {NAV_LINKS
                                    .into_iter()
                                    .map(|(name, href)| {
                                        view! {
                                            <a
                                                href=href
                                                class="px-4 py-2 text-[13px] font-bold text-gray-600 hover:text-blue-600 rounded-md hover:bg-gray-50 transition-all"
                                            >
                                                {name}
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </nav>
                        </div>

                        <button
                            type="button"
                            class="inline-flex items-center p-2 w-10 h-10 justify-center text-sm text-gray-500 rounded-lg lg:hidden hover:bg-gray-100 focus:outline-none focus:ring-2 focus:ring-gray-200"
                            aria-controls="navbar-links"
                            aria-expanded=move || menu_open.get().to_string()
                            on:click=toggle_menu
                        >
                            <span class="sr-only">"Open main menu"</span>
                            <span class="material-symbols-outlined">"menu"</span>
                        </button>
                    </div>

                    <div
                        id="navbar-links"
                        class="lg:hidden px-6"
                        class:hidden=move || !menu_open.get()
                    >
                        <ul class="font-medium flex flex-col p-4 mt-4 border border-gray-100 rounded-lg bg-gray-50">
                            {NAV_LINKS
                                .into_iter()
                                .map(|(name, href)| {
                                    view! {
                                        <li>
                                            <a
                                                href=href
                                                class="block py-2 px-3 text-gray-900 rounded hover:bg-gray-100"
                                                on:click=move |_| set_menu_open.set(false)
                                            >
                                                {name}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </div>
            </header>

            <main class="flex-1">{children()}</main>

            <footer class="py-6 text-center text-xs text-gray-400 uppercase tracking-widest font-bold">
                "© 2026 Nexus E-Commerce Inc."
                <span class="ml-2 normal-case tracking-normal font-normal" title="build">
                    {build_info::short_commit_hash()}
                </span>
            </footer>
        </div>
    }
}

/// Account, wishlist, and cart shortcuts on the right of the brand bar.
#[component]
fn HeaderActions() -> impl IntoView {
    view! {
        <div class="flex items-center gap-2 text-gray-700">
            <A
                href="/login"
                {..}
                class="flex items-center gap-2.5 hover:text-blue-600 transition-colors group"
            >
                <div class="p-2 group-hover:bg-blue-50 rounded-full transition-colors">
                    <span class="material-symbols-outlined">"person"</span>
                </div>
                <div class="hidden lg:block">
                    <p class="text-[10px] text-gray-400 font-bold uppercase tracking-wider leading-none">
                        "Account"
                    </p>
                    <p class="text-sm font-bold">"Sign In"</p>
                </div>
            </A>

            <a
                href="/wishlist"
                class="relative group p-2 hover:bg-blue-50 rounded-full transition-colors"
            >
                <span class="material-symbols-outlined group-hover:text-blue-600">"favorite"</span>
                <span class="absolute top-1 right-1 bg-red-500 text-white text-[10px] font-bold h-4 w-4 flex items-center justify-center rounded-full border-2 border-white">
                    "0"
                </span>
            </a>

            <a
                href="/cart"
                class="relative group p-2 hover:bg-blue-50 rounded-full transition-colors"
            >
                <span class="material-symbols-outlined group-hover:text-blue-600">
                    "shopping_cart"
                </span>
                <span class="absolute top-1 right-1 bg-blue-600 text-white text-[10px] font-bold h-4 w-4 flex items-center justify-center rounded-full border-2 border-white">
                    "0"
                </span>
            </a>
        </div>
    }
}
