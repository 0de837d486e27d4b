//! Session Token Storage
//!
//! The session token is a single opaque string handed out by the login
//! endpoint. It lives under one key in browser local storage, is read on
//! every outgoing request, and is only ever replaced or removed, never
//! mutated in place. Absence of the token is not an error.

/// Local storage key holding the session token
const TOKEN_KEY: &str = "tally_token";

/// Read the session token from local storage, if any
pub fn token() -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage.get_item(TOKEN_KEY).ok()?
}

/// Store a new session token, replacing any previous one
pub fn store_token(token: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }
}

/// Remove the session token (sign out)
pub fn clear_token() {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn token_round_trip() {
        clear_token();
        assert_eq!(token(), None);

        store_token("abc123");
        assert_eq!(token().as_deref(), Some("abc123"));

        // Replacement, not mutation
        store_token("def456");
        assert_eq!(token().as_deref(), Some("def456"));

        clear_token();
        assert_eq!(token(), None);
    }
}
