//! Client-side validation rules
//!
//! Only the margin is validated locally; the server re-validates everything.

use regex_lite::Regex;
use std::sync::LazyLock;

use mgcp_shared::requests::{MAX_MARGIN_PERCENT, MIN_MARGIN_PERCENT};

/// Leading decimal number, the way browsers read numeric prompt input
static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)").expect("valid regex")
});

/// Validation failures shown to the user as-is
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("La utilidad debe estar entre 25% y 35%")]
    MarginOutOfRange,
    #[error("Por favor, escriba sus comentarios")]
    EmptyComments,
}

/// True iff `25 <= value <= 35`. NaN is never valid.
pub fn is_valid_margin(value: f64) -> bool {
    (MIN_MARGIN_PERCENT..=MAX_MARGIN_PERCENT).contains(&value)
}

/// Parse the longest leading number of `input`, ignoring surrounding whitespace.
///
/// `"30%"` reads as 30 and `"abc"` as `None`.
pub fn parse_leading_number(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    let matched = LEADING_NUMBER.find(trimmed)?.as_str();
    match matched.trim_start_matches(['+', '-']) {
        "Infinity" if matched.starts_with('-') => Some(f64::NEG_INFINITY),
        "Infinity" => Some(f64::INFINITY),
        _ => matched.parse().ok(),
    }
}

/// Parse and validate the margin typed into the modify prompt.
pub fn parse_margin(input: &str) -> Result<f64, ValidationError> {
    match parse_leading_number(input) {
        Some(value) if is_valid_margin(value) => Ok(value),
        _ => Err(ValidationError::MarginOutOfRange),
    }
}

/// Require non-blank free-text comments, returning them untouched.
pub fn require_comments(comments: &str) -> Result<&str, ValidationError> {
    if comments.trim().is_empty() {
        Err(ValidationError::EmptyComments)
    } else {
        Ok(comments)
    }
}
