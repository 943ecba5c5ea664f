//! Desktop platform implementation
//!
//! The desktop shell has no address bar and no DOM we can query from Rust,
//! so the current route and input values are tracked here as the UI
//! renders them. Clipboard writes go through the webview.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::{future::Future, pin::Pin};

use crate::config::PortalConfig;
use crate::ports::outbound::{ClipboardCopy, PlatformPort};

#[derive(Clone)]
pub struct DesktopPlatform {
    path: Arc<RwLock<String>>,
    elements: Arc<RwLock<HashMap<String, String>>>,
}

impl DesktopPlatform {
    pub fn new(initial_path: &str) -> Self {
        Self {
            path: Arc::new(RwLock::new(initial_path.to_string())),
            elements: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl PlatformPort for DesktopPlatform {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        Box::pin(async move {
            tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
        })
    }

    fn current_path(&self) -> String {
        match self.path.read() {
            Ok(guard) => guard.clone(),
            Err(e) => {
                tracing::error!("Failed to acquire read lock for current path: {}", e);
                String::new()
            }
        }
    }

    fn set_current_path(&self, path: &str) {
        match self.path.write() {
            Ok(mut guard) => *guard = path.to_string(),
            Err(e) => tracing::error!("Failed to acquire write lock for current path: {}", e),
        }
    }

    fn element_value(&self, element_id: &str) -> Option<String> {
        match self.elements.read() {
            Ok(guard) => guard.get(element_id).cloned(),
            Err(e) => {
                tracing::error!("Failed to acquire read lock for elements: {}", e);
                None
            }
        }
    }

    fn set_element_value(&self, element_id: &str, value: &str) {
        match self.elements.write() {
            Ok(mut guard) => {
                guard.insert(element_id.to_string(), value.to_string());
            }
            Err(e) => tracing::error!("Failed to acquire write lock for elements: {}", e),
        }
    }

    fn copy_element_text(&self, element_id: &str) -> ClipboardCopy {
        let Some(text) = self.element_value(element_id) else {
            return ClipboardCopy::ElementMissing;
        };
        let script = match clipboard_script(&text) {
            Ok(script) => script,
            Err(e) => {
                tracing::warn!("Failed to encode clipboard text: {}", e);
                return ClipboardCopy::Failed;
            }
        };
        // The webview reports nothing back
        let _ = dioxus::document::eval(&script);
        tracing::debug!(
            element_id = %element_id,
            chars = text.chars().count(),
            "Clipboard write dispatched to webview"
        );
        ClipboardCopy::Dispatched
    }

    fn install_stylesheet(&self, _css: &str) {
        // No-op on desktop - styles go into the window's custom head
    }
}

/// Script that writes `text` to the clipboard, with `text` as a JS string literal
fn clipboard_script(text: &str) -> Result<String, serde_json::Error> {
    let literal = serde_json::to_string(text)?;
    Ok(format!("navigator.clipboard.writeText({});", literal))
}

/// Create platform services for desktop
pub fn create_platform(config: &PortalConfig) -> DesktopPlatform {
    let platform = DesktopPlatform::new(&config.page_path);
    if let Some(link) = &config.clipboard_link {
        platform.set_element_value(crate::application::actions::CLIENT_LINK_ELEMENT, link);
    }
    platform
}
