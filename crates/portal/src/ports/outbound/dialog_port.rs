//! Dialog Port - in-page confirmation and value prompts
//!
//! Replaces blocking browser `confirm`/`prompt` calls with an async contract
//! that returns a structured result, so actions can be driven headlessly.

/// Answer to a yes/no confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogResult {
    Confirmed,
    Declined,
}

impl DialogResult {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, DialogResult::Confirmed)
    }
}

/// Answer to a value prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResult {
    /// The user accepted the dialog; the text may be empty
    Submitted(String),
    Cancelled,
}

impl PromptResult {
    pub fn into_value(self) -> Option<String> {
        match self {
            PromptResult::Submitted(value) => Some(value),
            PromptResult::Cancelled => None,
        }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait DialogPort: Send + Sync {
    /// Ask the user to confirm `message`
    async fn confirm(&self, message: &str) -> DialogResult;

    /// Ask the user for a value, pre-filled with `default_value`
    async fn prompt(&self, message: &str, default_value: Option<&str>) -> PromptResult;
}
