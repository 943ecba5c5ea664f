//! PlatformPort - Unified platform services interface
//!
//! This trait provides the platform-specific operations the application
//! layer needs: sleeping, the current page location, element values
//! and the clipboard. Browser and desktop builds implement it in
//! `infrastructure::platform`.

use std::{future::Future, pin::Pin};

/// Result of asking the platform to copy an element's text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardCopy {
    /// No element with the requested id exists
    ElementMissing,
    /// The copy command was issued; the platform gives no delivery guarantee
    Dispatched,
    /// The platform refused the copy command
    Failed,
}

/// Unified platform services port
///
/// Use via Dioxus context: `use_context::<Arc<dyn PlatformPort>>()`
pub trait PlatformPort: Send + Sync {
    /// Sleep for the given number of milliseconds
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>>;

    // -------------------------------------------------------------------------
    // Location operations
    // -------------------------------------------------------------------------

    /// Path of the page currently shown (`/cliente/propuesta/<token>`)
    fn current_path(&self) -> String;

    /// Record the route now displayed. Browsers track this themselves.
    fn set_current_path(&self, _path: &str) {}

    // -------------------------------------------------------------------------
    // Document operations
    // -------------------------------------------------------------------------

    /// Current value of an input element, `None` if no such element exists
    fn element_value(&self, element_id: &str) -> Option<String>;

    /// Set the value of an input element
    fn set_element_value(&self, element_id: &str, value: &str);

    /// Select the text of an input element and copy it to the clipboard
    fn copy_element_text(&self, element_id: &str) -> ClipboardCopy;

    /// Append a stylesheet to the document head
    fn install_stylesheet(&self, css: &str);
}
