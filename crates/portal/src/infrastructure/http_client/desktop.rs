//! reqwest-backed HTTP adapter for desktop builds

use reqwest::{Client, Response};
use serde_json::Value;

use super::{join_url, status_message};
use crate::ports::outbound::{ApiError, RawApiPort};

/// HTTP client bound to one portal server
#[derive(Clone)]
pub struct ApiAdapter {
    client: Client,
    base_url: String,
}

impl ApiAdapter {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// Decode a mutation response. Failure bodies arrive with 4xx/5xx and
    /// still carry the `{"error": ...}` object the caller needs.
    async fn decode_any_status(response: Response) -> Result<Value, ApiError> {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
        serde_json::from_str(&text).map_err(|e| {
            if status.is_success() {
                ApiError::ParseError(e.to_string())
            } else {
                ApiError::Status {
                    status: status.as_u16(),
                    message: status_message(&text),
                }
            }
        })
    }
}

#[async_trait::async_trait]
impl RawApiPort for ApiAdapter {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: status_message(&text),
            });
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::ParseError(e.to_string()))
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        Self::decode_any_status(response).await
    }

    async fn post_empty(&self, path: &str) -> Result<Value, ApiError> {
        let response = self
            .client
            .post(self.url(path))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        Self::decode_any_status(response).await
    }
}
