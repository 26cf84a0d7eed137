//! Typed client for the Experts Land backend API.
//!
//! This module wraps reqwest to provide small typed helpers over the
//! backend's JSON endpoints. reqwest works on both native and WASM
//! platforms:
//! - Native: Uses hyper with rustls-tls for HTTPS
//! - WASM: Uses browser fetch() API internally
//!
//! The HTTP client is pooled for connection reuse. No authentication header
//! is attached here: the browser's ambient session cookie handling covers
//! authenticated endpoints.

pub mod auth;
pub mod sheets;
pub mod users;

use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;

/// Global HTTP client for connection pooling.
///
/// reqwest::Client handles connection pooling internally, so reusing a
/// single client across requests is much more efficient than creating one
/// per request.
static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    #[cfg(target_arch = "wasm32")]
    {
        reqwest::Client::new()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client")
    }
});

/// Base URL requests are resolved against.
///
/// In the browser this is the page origin, so the client talks to whatever
/// host served it. Native builds (tests, tooling) fall back to the
/// development backend.
fn api_base() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(origin) = web_sys::window().and_then(|w| w.location().origin().ok()) {
            return origin;
        }
    }

    "http://localhost:8000".to_string()
}

fn endpoint(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// GET `path` and deserialize the JSON response body.
pub(crate) async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    get_json_at(&endpoint(path)).await
}

async fn get_json_at<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = HTTP_CLIENT
        .get(url)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status(status.as_u16()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// POST a JSON body to `path` and deserialize the JSON response body.
pub(crate) async fn post_json<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = HTTP_CLIENT
        .post(endpoint(path))
        .json(body)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status(status.as_u16()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// POST to `path`, discarding any response body.
pub(crate) async fn post_no_content(path: &str) -> Result<(), ApiError> {
    let response = HTTP_CLIENT
        .post(endpoint(path))
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status(status.as_u16()));
    }

    Ok(())
}
