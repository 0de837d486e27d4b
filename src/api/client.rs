//! HTTP Client
//!
//! A thin wrapper around `gloo_net` shared by every view through the Leptos
//! context. Outgoing requests resolve against a fixed base address and carry
//! the session token verbatim as the `Authorization` header whenever one is
//! in storage. Responses with status 401 raise the session-expiry signal the
//! app root subscribes to; every other failure is re-raised to the caller
//! unchanged. No retry, no timeout.

use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::{RwSignal, SignalGetUntracked, SignalSet};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::state::session;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Local storage key overriding the API base URL per deployment
const API_URL_KEY: &str = "tally_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(API_URL_KEY) {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Errors surfaced by API calls
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    #[error("request build error: {0}")]
    Build(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("{message}")]
    Status { code: u16, message: String },
    #[error("parse error: {0}")]
    Parse(String),
}

impl ApiError {
    /// True for the 401 responses that invalidate the session
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { code: 401, .. })
    }
}

/// Shared API client, provided once via context at app startup
#[derive(Clone)]
pub struct ApiClient {
    base: String,
    expiry: RwSignal<bool>,
}

impl ApiClient {
    /// Build a client against an explicit base address
    pub fn new(base: &str, expiry: RwSignal<bool>) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
            expiry,
        }
    }

    /// Build a client against the stored (or default) base address
    pub fn from_storage(expiry: RwSignal<bool>) -> Self {
        Self::new(&get_api_base(), expiry)
    }

    /// Resolve a relative path against the base address
    pub fn url(&self, path: &str) -> String {
        join_url(&self.base, path)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = with_auth(Request::get(&self.url(path)))
            .build()
            .map_err(|e| ApiError::Build(e.to_string()))?;

        let response = self.execute(request).await?;
        response.json().await.map_err(|e| ApiError::Parse(e.to_string()))
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let request = with_auth(Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Build(e.to_string()))?;

        let response = self.execute(request).await?;
        response.json().await.map_err(|e| ApiError::Parse(e.to_string()))
    }

    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let request = with_auth(Request::put(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Build(e.to_string()))?;

        let response = self.execute(request).await?;
        response.json().await.map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Post multipart form data (file uploads); the browser sets the
    /// content type and boundary itself.
    pub async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: web_sys::FormData,
    ) -> Result<T, ApiError> {
        let request = with_auth(Request::post(&self.url(path)))
            .body(form)
            .map_err(|e| ApiError::Build(e.to_string()))?;

        let response = self.execute(request).await?;
        response.json().await.map_err(|e| ApiError::Parse(e.to_string()))
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let request = with_auth(Request::delete(&self.url(path)))
            .build()
            .map_err(|e| ApiError::Build(e.to_string()))?;

        self.execute(request).await.map(|_| ())
    }

    /// Send a request and apply the response-side session check.
    ///
    /// A 401 raises the expiry signal before the error is re-raised, so
    /// callers may still react to the rejection themselves. Everything
    /// non-401 passes through untouched.
    async fn execute(&self, request: Request) -> Result<Response, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if response.ok() {
            return Ok(response);
        }

        let code = response.status();
        let message = error_message(response).await;

        self.check_session(code);

        Err(ApiError::Status { code, message })
    }

    /// Status-side session check: 401 is the only status that invalidates
    /// the session; everything else passes through without side effects.
    fn check_session(&self, code: u16) {
        if code == 401 {
            self.notify_expired();
        }
    }

    /// Raise the session-expiry signal at most once per expiry.
    ///
    /// Overlapping in-flight requests can all come back 401; only the first
    /// one should schedule the login redirect. The flag is reset on the next
    /// successful login.
    fn notify_expired(&self) {
        if !self.expiry.get_untracked() {
            self.expiry.set(true);
        }
    }
}

/// Attach the stored session token, if any, as the raw Authorization value
fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match session::token() {
        Some(token) => builder.header("Authorization", &token),
        None => builder,
    }
}

/// Extract the backend's `{"error": "..."}` message, with a generic fallback
async fn error_message(response: Response) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        error: String,
    }

    let status = response.status();
    match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => format!("request failed with status {}", status),
    }
}

/// Join a base address and a relative path with exactly one slash
fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn auth_header_matches_stored_token_verbatim() {
        session::store_token("abc123");
        let request = with_auth(Request::get("http://localhost:5000/records"))
            .build()
            .unwrap();
        assert_eq!(
            request.headers().get("Authorization").as_deref(),
            Some("abc123")
        );
        session::clear_token();
    }

    #[wasm_bindgen_test]
    fn no_token_means_no_auth_header() {
        session::clear_token();
        let request = with_auth(Request::get("http://localhost:5000/records"))
            .build()
            .unwrap();
        assert_eq!(request.headers().get("Authorization"), None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::create_runtime;

    #[test]
    fn join_url_normalizes_slashes() {
        assert_eq!(join_url("http://x:5000", "/records"), "http://x:5000/records");
        assert_eq!(join_url("http://x:5000/", "records"), "http://x:5000/records");
        assert_eq!(join_url("http://x:5000/", "/records"), "http://x:5000/records");
    }

    #[test]
    fn unauthorized_is_only_status_401() {
        let unauthorized = ApiError::Status {
            code: 401,
            message: "expired".to_string(),
        };
        let server_error = ApiError::Status {
            code: 500,
            message: "boom".to_string(),
        };
        let network = ApiError::Network("connection refused".to_string());

        assert!(unauthorized.is_unauthorized());
        assert!(!server_error.is_unauthorized());
        assert!(!network.is_unauthorized());
    }

    #[test]
    fn status_error_displays_backend_message() {
        let err = ApiError::Status {
            code: 400,
            message: "record not found".to_string(),
        };
        assert_eq!(err.to_string(), "record not found");
    }

    #[test]
    fn only_401_raises_the_expiry_signal() {
        let runtime = create_runtime();

        let expiry = leptos::create_rw_signal(false);
        let client = ApiClient::new("http://localhost:5000", expiry);

        for code in [200_u16, 400, 403, 404, 500, 503] {
            client.check_session(code);
            assert!(
                !expiry.get_untracked(),
                "status {} must not raise the expiry signal",
                code
            );
        }

        client.check_session(401);
        assert!(expiry.get_untracked());

        runtime.dispose();
    }

    #[test]
    fn expiry_signal_raised_once_for_overlapping_401s() {
        let runtime = create_runtime();

        let expiry = leptos::create_rw_signal(false);
        let client = ApiClient::new("http://localhost:5000", expiry);

        client.notify_expired();
        client.notify_expired();
        assert!(expiry.get_untracked());

        // Reset on login, a later 401 may raise it again
        expiry.set(false);
        client.notify_expired();
        assert!(expiry.get_untracked());

        runtime.dispose();
    }

    #[test]
    fn client_trims_trailing_slash_from_base() {
        let runtime = create_runtime();

        let expiry = leptos::create_rw_signal(false);
        let client = ApiClient::new("http://localhost:5000/", expiry);
        assert_eq!(client.url("/summary"), "http://localhost:5000/summary");

        runtime.dispose();
    }
}
