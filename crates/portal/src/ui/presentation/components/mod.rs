//! Reusable UI components

pub mod dialog_host;
pub mod status_badge;
pub mod toast_host;

pub use dialog_host::DialogHost;
pub use status_badge::StatusBadge;
pub use toast_host::ToastHost;
