//! Raw API Port - Object-safe HTTP boundary
//!
//! Adapters exchange `serde_json::Value` so the trait stays object-safe and
//! can be stored behind `Arc<dyn RawApiPort>`. The application layer provides
//! the typed wrapper (`application::api::Api`) on top.

use serde_json::Value;

use super::ApiError;

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait RawApiPort: Send + Sync {
    /// `GET` a JSON document. Non-2xx statuses are reported as [`ApiError::Status`].
    async fn get_json(&self, path: &str) -> Result<Value, ApiError>;

    /// `POST` a JSON body and return the decoded JSON response.
    ///
    /// The body is decoded whatever the status code: the portal reports
    /// application failures as `{"error": ...}` with 4xx/5xx statuses.
    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;

    /// `POST` without a body (still sent as `application/json`).
    async fn post_empty(&self, path: &str) -> Result<Value, ApiError>;
}
