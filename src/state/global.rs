//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

use crate::state::session;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Whether a session token is currently held
    pub authenticated: RwSignal<bool>,
    /// Raised by the HTTP client when the backend rejects the session (401).
    /// The app root subscribes to this and schedules the login redirect.
    pub session_expired: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
    /// Warning message (for toasts)
    pub warning: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        authenticated: create_rw_signal(session::token().is_some()),
        session_expired: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
        warning: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        }).forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        }).forget();
    }

    /// Show a warning message (auto-clears after timeout)
    pub fn show_warning(&self, message: &str) {
        self.warning.set(Some(message.to_string()));

        let warning_signal = self.warning;
        gloo_timers::callback::Timeout::new(5000, move || {
            warning_signal.set(None);
        }).forget();
    }

    /// Record a fresh login: the new token is already in storage
    pub fn mark_signed_in(&self) {
        self.authenticated.set(true);
        self.session_expired.set(false);
    }

    /// Sign out: drop the token and flip the auth flag. The expiry flag is
    /// cleared too, so a sign-out during the redirect window cannot swallow
    /// a later expiry within the same page lifetime.
    pub fn sign_out(&self) {
        session::clear_token();
        self.authenticated.set(false);
        self.session_expired.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> GlobalState {
        GlobalState {
            authenticated: create_rw_signal(true),
            session_expired: create_rw_signal(false),
            error: create_rw_signal(None),
            success: create_rw_signal(None),
            warning: create_rw_signal(None),
        }
    }

    #[test]
    fn fresh_login_resets_the_expiry_flag() {
        let runtime = create_runtime();

        let state = test_state();
        state.session_expired.set(true);

        state.mark_signed_in();
        assert!(state.authenticated.get_untracked());
        assert!(!state.session_expired.get_untracked());

        runtime.dispose();
    }
}

// `sign_out` touches local storage via `session::clear_token`, so its test
// needs a browser environment.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn test_state() -> GlobalState {
        GlobalState {
            authenticated: create_rw_signal(true),
            session_expired: create_rw_signal(false),
            error: create_rw_signal(None),
            success: create_rw_signal(None),
            warning: create_rw_signal(None),
        }
    }

    #[wasm_bindgen_test]
    fn sign_out_clears_auth_and_expiry_flags() {
        let runtime = create_runtime();

        let state = test_state();
        state.session_expired.set(true);

        state.sign_out();
        assert!(!state.authenticated.get_untracked());
        assert!(!state.session_expired.get_untracked());

        runtime.dispose();
    }
}
