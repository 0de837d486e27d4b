//! Navigation Component
//!
//! Header navigation bar with brand, links, and the sign in/out control.

use leptos::*;
use leptos_router::*;

use crate::app::routes;
use crate::state::global::GlobalState;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let sign_out_state = state.clone();
    let sign_out = move |_| {
        sign_out_state.sign_out();
        navigate(routes::LOGIN_REGISTER, Default::default());
    };

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href=routes::RECORDS class="flex items-center space-x-3">
                        <span class="text-2xl">"💰"</span>
                        <span class="text-xl font-bold text-white">"Tally"</span>
                    </A>

                    // Navigation links
                    <div class="flex items-center space-x-1">
                        <NavLink href=routes::RECORDS label="Records" />
                        <NavLink href=routes::CHARTS label="Charts" />
                        <NavLink href=routes::REPORTS label="Reports" />

                        {move || {
                            if state.authenticated.get() {
                                view! {
                                    <button
                                        on:click=sign_out.clone()
                                        class="px-4 py-2 rounded-lg text-gray-300 hover:text-white
                                               hover:bg-gray-700 transition-colors"
                                    >
                                        "Sign out"
                                    </button>
                                }.into_view()
                            } else {
                                view! {
                                    <NavLink href=routes::LOGIN_REGISTER label="Sign in" />
                                }.into_view()
                            }
                        }}
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}
