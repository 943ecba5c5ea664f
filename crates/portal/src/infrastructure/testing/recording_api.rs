//! In-memory `RawApiPort` that answers scripted JSON per path

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::Value;

use super::lock;
use crate::ports::outbound::{ApiError, RawApiPort};

/// HTTP verb of a recorded call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordedMethod {
    Get,
    PostJson,
    PostEmpty,
}

/// One request the application issued
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: RecordedMethod,
    pub path: String,
    pub body: Option<Value>,
}

#[derive(Default)]
struct State {
    responses: HashMap<String, Result<Value, ApiError>>,
    calls: Vec<RecordedCall>,
}

/// Fake HTTP boundary.
///
/// Paths without a scripted answer fail with [`ApiError::RequestFailed`],
/// the same way an unreachable server would.
#[derive(Clone, Default)]
pub struct RecordingApi {
    state: Arc<Mutex<State>>,
}

impl RecordingApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every request to `path` with `body`
    pub fn respond(&self, path: &str, body: Value) {
        lock(&self.state)
            .responses
            .insert(path.to_string(), Ok(body));
    }

    /// Fail every request to `path` with `error`
    pub fn fail(&self, path: &str, error: ApiError) {
        lock(&self.state)
            .responses
            .insert(path.to_string(), Err(error));
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        lock(&self.state).calls.clone()
    }

    fn record(&self, method: RecordedMethod, path: &str, body: Option<Value>) -> Result<Value, ApiError> {
        let mut state = lock(&self.state);
        state.calls.push(RecordedCall {
            method,
            path: path.to_string(),
            body,
        });
        state
            .responses
            .get(path)
            .cloned()
            .unwrap_or_else(|| Err(ApiError::RequestFailed(format!("no response scripted for {}", path))))
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl RawApiPort for RecordingApi {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        self.record(RecordedMethod::Get, path, None)
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.record(RecordedMethod::PostJson, path, Some(body.clone()))
    }

    async fn post_empty(&self, path: &str) -> Result<Value, ApiError> {
        self.record(RecordedMethod::PostEmpty, path, None)
    }
}
