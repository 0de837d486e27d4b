//! App Root Component
//!
//! Main application component with routing, the shared API client, and the
//! session-expiry redirect.

use leptos::*;
use leptos_router::*;

use crate::api::ApiClient;
use crate::components::{Nav, Toast};
use crate::pages::{Charts, LoginRegister, Records, Reports};
use crate::state::global::{provide_global_state, GlobalState};

/// Client-side route table. Matching is first-match in order; the wildcard
/// funnels every unknown path back to the login/register view.
pub mod routes {
    pub const LOGIN_REGISTER: &str = "/loginRegister";
    pub const RECORDS: &str = "/records";
    pub const CHARTS: &str = "/charts";
    pub const REPORTS: &str = "/reports";
    pub const FALLBACK: &str = "/*any";
}

/// Delay between the expiry warning and the forced navigation to login
pub const REDIRECT_DELAY_MS: u32 = 1_500;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // One API client for the whole page lifetime, reachable from every view
    let client = ApiClient::from_storage(state.session_expired);
    provide_context(client);

    // When the backend rejects the session, warn once and schedule a
    // full-page navigation to login. The timer is fire-and-forget.
    let expiry_state = state.clone();
    create_effect(move |_| {
        if !expiry_state.session_expired.get() {
            return;
        }

        expiry_state.show_warning("Session expired, redirecting to login");

        gloo_timers::callback::Timeout::new(REDIRECT_DELAY_MS, move || {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(routes::LOGIN_REGISTER);
            }
        })
        .forget();
    });

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path=routes::LOGIN_REGISTER view=LoginRegister />
                        <Route path=routes::RECORDS view=Records />
                        <Route path=routes::CHARTS view=Charts />
                        <Route path=routes::REPORTS view=Reports />
                        <Route
                            path=routes::FALLBACK
                            view=|| view! { <Redirect path=routes::LOGIN_REGISTER /> }
                        />
                    </Routes>
                </main>

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}
