//! Typed API wrapper for application services.
//!
//! `Api` wraps an `Arc<dyn RawApiPort>` and does the serde_json conversions,
//! so services work with typed requests and responses while the adapters
//! only ever see `serde_json::Value`.

use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

use mgcp_shared::ResponseResult;

use crate::ports::outbound::{ApiError, RawApiPort};

#[derive(Clone)]
pub struct Api {
    raw: Arc<dyn RawApiPort>,
}

impl Api {
    pub fn new(raw: Arc<dyn RawApiPort>) -> Self {
        Self { raw }
    }

    /// `GET` a plain JSON document
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let value = self.raw.get_json(path).await?;
        serde_json::from_value(value).map_err(|e| ApiError::ParseError(e.to_string()))
    }

    /// `POST` a JSON body to an endpoint answering with a `success` envelope
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ResponseResult<T>, ApiError> {
        let body_value =
            serde_json::to_value(body).map_err(|e| ApiError::SerializeError(e.to_string()))?;
        let value = self.raw.post_json(path, &body_value).await?;
        ResponseResult::from_value(value).map_err(|e| ApiError::ParseError(e.to_string()))
    }

    /// `POST` without a body to an endpoint answering with a `success` envelope
    pub async fn post_empty<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<ResponseResult<T>, ApiError> {
        let value = self.raw.post_empty(path).await?;
        ResponseResult::from_value(value).map_err(|e| ApiError::ParseError(e.to_string()))
    }
}
