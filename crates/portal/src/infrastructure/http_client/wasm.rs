//! gloo-net HTTP adapter for browser builds

use gloo_net::http::{Request, Response};
use serde_json::Value;

use super::{join_url, status_message};
use crate::ports::outbound::{ApiError, RawApiPort};

/// Fetch-based client. An empty base URL targets the page origin.
#[derive(Clone, Default)]
pub struct ApiAdapter {
    base_url: String,
}

impl ApiAdapter {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    async fn decode_any_status(response: Response) -> Result<Value, ApiError> {
        let ok = response.ok();
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
        serde_json::from_str(&text).map_err(|e| {
            if ok {
                ApiError::ParseError(e.to_string())
            } else {
                ApiError::Status {
                    status,
                    message: status_message(&text),
                }
            }
        })
    }
}

#[async_trait::async_trait(?Send)]
impl RawApiPort for ApiAdapter {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let response = Request::get(&self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status,
                message: status_message(&text),
            });
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::ParseError(e.to_string()))
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let response = Request::post(&self.url(path))
            .json(body)
            .map_err(|e| ApiError::SerializeError(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        Self::decode_any_status(response).await
    }

    async fn post_empty(&self, path: &str) -> Result<Value, ApiError> {
        let response = Request::post(&self.url(path))
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        Self::decode_any_status(response).await
    }
}
