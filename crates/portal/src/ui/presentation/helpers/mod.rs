//! Pure presentation helpers

pub mod format;

pub use format::{format_currency, format_date, IntoLocalDate};
