//! Login / Register Page
//!
//! Single form with a mode toggle. Login stores the returned session token
//! and moves on to the records page; registration just reports success and
//! flips back to login mode.

use leptos::*;
use leptos_router::use_navigate;

use crate::api::{auth, ApiClient};
use crate::app::routes;
use crate::state::global::GlobalState;
use crate::state::session;

/// Login/register page component
#[component]
pub fn LoginRegister() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let client = use_context::<ApiClient>().expect("ApiClient not found");
    let navigate = use_navigate();

    let (registering, set_registering) = create_signal(false);
    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (busy, set_busy) = create_signal(false);

    let submit_state = state.clone();
    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let user = username.get_untracked();
        let pass = password.get_untracked();
        if user.trim().is_empty() || pass.is_empty() {
            submit_state.show_error("Username and password are required");
            return;
        }

        set_busy.set(true);

        let state = submit_state.clone();
        let client = client.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            if registering.get_untracked() {
                match auth::register(&client, user.trim(), &pass).await {
                    Ok(()) => {
                        state.show_success("Account created, you can sign in now");
                        set_registering.set(false);
                    }
                    Err(e) => state.show_error(&e.to_string()),
                }
            } else {
                match auth::login(&client, user.trim(), &pass).await {
                    Ok(token) => {
                        session::store_token(&token);
                        state.mark_signed_in();
                        state.show_success("Signed in");
                        navigate(routes::RECORDS, Default::default());
                    }
                    Err(e) => state.show_error(&e.to_string()),
                }
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="max-w-md mx-auto mt-12">
            <div class="bg-gray-800 rounded-xl p-8">
                // Mode toggle
                <div class="flex rounded-lg bg-gray-700 p-1 mb-6">
                    <ModeButton
                        label="Sign in"
                        active=Signal::derive(move || !registering.get())
                        on_select=move |_| set_registering.set(false)
                    />
                    <ModeButton
                        label="Create account"
                        active=Signal::from(registering)
                        on_select=move |_| set_registering.set(true)
                    />
                </div>

                <h1 class="text-2xl font-bold mb-6">
                    {move || if registering.get() { "Create your account" } else { "Welcome back" }}
                </h1>

                <form on:submit=submit class="space-y-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Username"</label>
                        <input
                            type="text"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Password"</label>
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <button
                        type="submit"
                        disabled=move || busy.get()
                        class="w-full px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               rounded-lg font-medium transition-colors"
                    >
                        {move || {
                            if busy.get() {
                                "Working..."
                            } else if registering.get() {
                                "Create account"
                            } else {
                                "Sign in"
                            }
                        }}
                    </button>
                </form>
            </div>
        </div>
    }
}

/// One half of the login/register mode toggle
#[component]
fn ModeButton(
    label: &'static str,
    #[prop(into)]
    active: Signal<bool>,
    on_select: impl Fn(ev::MouseEvent) + 'static,
) -> impl IntoView {
    view! {
        <button
            type="button"
            on:click=on_select
            class=move || format!(
                "flex-1 px-4 py-2 rounded-md text-sm font-medium transition-colors {}",
                if active.get() { "bg-gray-900 text-white" } else { "text-gray-400 hover:text-white" }
            )
        >
            {label}
        </button>
    }
}
