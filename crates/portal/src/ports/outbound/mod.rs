//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to interact with external systems without
//! depending on concrete implementations.

pub mod api_port;
pub mod dialog_port;
pub mod notifier_port;
pub mod platform_port;
pub mod raw_api_port;
pub mod view_port;

pub use api_port::ApiError;
pub use dialog_port::{DialogPort, DialogResult, PromptResult};
pub use notifier_port::{Notification, NotificationKind, NotifierPort};
pub use platform_port::{ClipboardCopy, PlatformPort};
pub use raw_api_port::RawApiPort;
pub use view_port::{ViewPort, ViewUpdate};

#[cfg(test)]
pub use notifier_port::MockNotifierPort;
#[cfg(test)]
pub use view_port::MockViewPort;
