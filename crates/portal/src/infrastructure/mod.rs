//! Infrastructure adapters for the outbound ports

pub mod http_client;
pub mod platform;
pub mod ui_bridge;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use ui_bridge::{
    create_ui_bridge, BridgeInboxes, BridgePorts, DialogRequest, Inbox, InboxLease,
};
