//! Authentication Endpoints
//!
//! Sign-in and registration against the Tally API. A successful login hands
//! back the opaque session token; storing it is the caller's business.

use crate::api::client::{ApiClient, ApiError};

#[derive(serde::Serialize)]
struct Credentials<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, serde::Deserialize)]
struct LoginResponse {
    #[allow(dead_code)]
    message: String,
    token: String,
}

#[derive(Debug, serde::Deserialize)]
struct RegisterResponse {
    #[allow(dead_code)]
    message: String,
}

/// Sign in, returning the session token on success
pub async fn login(client: &ApiClient, username: &str, password: &str) -> Result<String, ApiError> {
    let response: LoginResponse = client
        .post_json("/login", &Credentials { username, password })
        .await?;
    Ok(response.token)
}

/// Create a new account. The caller still has to sign in afterwards.
pub async fn register(client: &ApiClient, username: &str, password: &str) -> Result<(), ApiError> {
    client
        .post_json::<_, RegisterResponse>("/register", &Credentials { username, password })
        .await
        .map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_serialize_as_plain_fields() {
        let body = serde_json::to_value(Credentials {
            username: "alice",
            password: "secret",
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "username": "alice", "password": "secret" })
        );
    }
}
