//! MGCP proposal portal client.
//!
//! Director and client pages for the proposal workflow: UI, application
//! actions and the HTTP/platform adapters behind them. Desktop and web
//! builds are selected at compile time with `cfg(target_arch)`.

pub mod application;
pub mod config;
pub mod infrastructure;
pub mod ports;
pub mod ui;

// Components address presentation modules as `crate::presentation::...`
pub use ui::presentation;

pub use ui::{app, Route};
