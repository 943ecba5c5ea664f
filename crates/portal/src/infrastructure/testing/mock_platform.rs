//! Deterministic `PlatformPort` for tests

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use super::lock;
use crate::ports::outbound::{ClipboardCopy, PlatformPort};

struct State {
    path: String,
    elements: HashMap<String, String>,
    copy_result: ClipboardCopy,
    sleeps: Vec<u64>,
    copied: Vec<String>,
    stylesheets: Vec<String>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            path: "/".to_string(),
            elements: HashMap::new(),
            copy_result: ClipboardCopy::Dispatched,
            sleeps: Vec::new(),
            copied: Vec::new(),
            stylesheets: Vec::new(),
        }
    }
}

/// Platform double: sleeps resolve immediately and are recorded,
/// the "document" is a map of element ids to values.
#[derive(Clone, Default)]
pub struct MockPlatform {
    state: Arc<Mutex<State>>,
}

impl MockPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(self, path: &str) -> Self {
        lock(&self.state).path = path.to_string();
        self
    }

    /// Result reported for copies of existing elements
    pub fn set_copy_result(&self, result: ClipboardCopy) {
        lock(&self.state).copy_result = result;
    }

    /// Requested sleep durations, in order
    pub fn sleeps(&self) -> Vec<u64> {
        lock(&self.state).sleeps.clone()
    }

    /// Ids of the elements copied to the clipboard
    pub fn copied(&self) -> Vec<String> {
        lock(&self.state).copied.clone()
    }

    pub fn stylesheets(&self) -> Vec<String> {
        lock(&self.state).stylesheets.clone()
    }
}

impl PlatformPort for MockPlatform {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        lock(&self.state).sleeps.push(ms);
        Box::pin(std::future::ready(()))
    }

    fn current_path(&self) -> String {
        lock(&self.state).path.clone()
    }

    fn set_current_path(&self, path: &str) {
        lock(&self.state).path = path.to_string();
    }

    fn element_value(&self, element_id: &str) -> Option<String> {
        lock(&self.state).elements.get(element_id).cloned()
    }

    fn set_element_value(&self, element_id: &str, value: &str) {
        lock(&self.state)
            .elements
            .insert(element_id.to_string(), value.to_string());
    }

    fn copy_element_text(&self, element_id: &str) -> ClipboardCopy {
        let mut state = lock(&self.state);
        if !state.elements.contains_key(element_id) {
            return ClipboardCopy::ElementMissing;
        }
        state.copied.push(element_id.to_string());
        state.copy_result
    }

    fn install_stylesheet(&self, css: &str) {
        lock(&self.state).stylesheets.push(css.to_string());
    }
}
