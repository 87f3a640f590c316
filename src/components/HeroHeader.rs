/*
 * Copyright 2024 Neatify
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

use crate::icons::{BrainIcon, CameraIcon};
use leptos::*;

#[component]
pub fn HeroHeader() -> impl IntoView {
    view! {
        <MobileMenuProvider>
            // Sticky translucent navigation
            <header class="sticky top-0 z-50 bg-white/90 backdrop-blur-md shadow-sm">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex justify-between items-center py-4">
                        // Logo
                        <div class="flex items-center space-x-3">
                            <div class="w-10 h-10 bg-gradient-to-r from-blue-600 to-purple-600 rounded-xl flex items-center justify-center">
                                <CameraIcon class="w-6 h-6 text-white"/>
                            </div>
                            <h1 class="text-2xl font-bold text-gray-900">"Neatify サポート"</h1>
                        </div>

                        // Desktop navigation
                        <nav class="hidden md:flex space-x-8">
                            <NavLink href="#usage" text="使い方"/>
                            <NavLink href="#faq" text="FAQ"/>
                            <NavLink href="#contact" text="お問い合わせ"/>
                        </nav>

                        <MobileMenuButton/>
                    </div>
                </div>

                // Mobile navigation menu
                <MobileMenu/>
            </header>

            // Hero section
            <section class="py-20 px-4 sm:px-6 lg:px-8">
                <div class="max-w-4xl mx-auto text-center">
                    <div class="inline-flex items-center space-x-2 bg-blue-100 px-4 py-2 rounded-full text-blue-800 text-sm font-medium mb-6">
                        <BrainIcon class="w-4 h-4"/>
                        <span>"AI搭載部屋審査アプリ"</span>
                    </div>
                    <h2 class="text-5xl font-bold text-gray-900 mb-6 leading-tight">
                        "Neatify サポートセンター"
                    </h2>
                    <p class="text-xl text-gray-600 mb-8 leading-relaxed">
                        "AIを使用して部屋の清潔さを評価し、友達と進捗を共有する"
                        <br/>
                        "革新的なソーシャル生産性アプリのサポートサイトです"
                    </p>
                    <div class="flex flex-wrap justify-center gap-4">
                        <a
                            href="#usage"
                            class="bg-blue-600 text-white px-8 py-3 rounded-lg hover:bg-blue-700 transition-colors font-medium"
                        >
                            "使い方を見る"
                        </a>
                        <a
                            href="#contact"
                            class="bg-white text-blue-600 px-8 py-3 rounded-lg border-2 border-blue-600 hover:bg-blue-50 transition-colors font-medium"
                        >
                            "お問い合わせ"
                        </a>
                    </div>
                </div>
            </section>
        </MobileMenuProvider>
    }
}

#[component]
fn NavLink(href: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <a href=href class="text-gray-600 hover:text-blue-600 transition-colors">
            {text}
        </a>
    }
}

#[island]
fn MobileMenuProvider(children: Children) -> impl IntoView {
    provide_context(RwSignal::new(false));
    children()
}

#[island]
fn MobileMenuButton() -> impl IntoView {
    let (menu_open, set_menu_open) = expect_context::<RwSignal<bool>>().split();

    view! {
        <button
            class="md:hidden p-2 text-gray-600 hover:text-gray-900 transition-colors"
            on:click=move |_| set_menu_open.update(|n| *n = !*n)
            aria-label="Toggle navigation menu"
        >
            <svg
                class="h-6 w-6"
                fill="none"
                viewBox="0 0 24 24"
                stroke="currentColor"
            >
                <path
                    class=move || if menu_open.get() { "hidden" } else { "" }
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    stroke-width="2"
                    d="M4 6h16M4 12h16M4 18h16"
                />
                <path
                    class=move || if menu_open.get() { "" } else { "hidden" }
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    stroke-width="2"
                    d="M6 18L18 6M6 6l12 12"
                />
            </svg>
        </button>
    }
}

#[island]
fn MobileMenu() -> impl IntoView {
    let menu_open = expect_context::<RwSignal<bool>>().read_only();
    let set_menu_open = expect_context::<RwSignal<bool>>().write_only();

    view! {
        <div
            class=move || format!(
                "md:hidden absolute top-full left-0 right-0 bg-white/95 backdrop-blur-md shadow-sm transition-all duration-300 ease-out {}",
                if menu_open.get() {
                    "opacity-100 translate-y-0"
                } else {
                    "opacity-0 -translate-y-2 pointer-events-none"
                }
            )
        >
            <div class="px-4 py-6 space-y-4">
                <MobileNavLink
                    href="#usage"
                    text="使い方"
                    on_click=move || set_menu_open.set(false)
                />
                <MobileNavLink
                    href="#faq"
                    text="FAQ"
                    on_click=move || set_menu_open.set(false)
                />
                <MobileNavLink
                    href="#contact"
                    text="お問い合わせ"
                    on_click=move || set_menu_open.set(false)
                />
            </div>
        </div>
    }
}

#[component]
fn MobileNavLink<F>(href: &'static str, text: &'static str, on_click: F) -> impl IntoView
where
    F: Fn() + 'static,
{
    view! {
        <a
            href=href
            class="block text-gray-600 hover:text-blue-600 transition-colors text-base font-medium py-2"
            on:click=move |_| on_click()
        >
            {text}
        </a>
    }
}
