//! Portal port definitions.
//!
//! Application services only talk to the outside world (HTTP, browser,
//! dialogs, toasts, views) through the traits in `outbound`.

pub mod outbound;
