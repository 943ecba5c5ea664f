//! HTTP adapters for [`RawApiPort`](crate::ports::outbound::RawApiPort)
//!
//! The desktop build talks to the server with `reqwest`; the browser build
//! uses `gloo-net` against the page origin. Both expose the same
//! `ApiAdapter` type so the composition root does not care which one it got.

#[cfg(not(target_arch = "wasm32"))]
mod desktop;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::ApiAdapter;
#[cfg(target_arch = "wasm32")]
pub use wasm::ApiAdapter;

/// Join a server origin and an absolute path without doubling slashes
pub(crate) fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Best-effort error text from a non-2xx body
pub(crate) fn status_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}
