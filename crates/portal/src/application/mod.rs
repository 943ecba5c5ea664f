//! Application layer: use cases behind the outbound ports.

pub mod actions;
pub mod api;
pub mod error;
pub mod notifications;
pub mod services;
pub mod validation;

pub use actions::{ActionOutcome, ActionSettings, NegotiationForm, PortalActions};
pub use api::Api;
pub use error::ServiceError;
pub use validation::{is_valid_margin, parse_margin, ValidationError};
