//! `DialogPort` double answering from queues

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::lock;
use crate::ports::outbound::{DialogPort, DialogResult, PromptResult};

#[derive(Default)]
struct State {
    confirms: VecDeque<DialogResult>,
    prompts: VecDeque<PromptResult>,
    shown_confirms: Vec<String>,
    shown_prompts: Vec<(String, Option<String>)>,
}

/// Dialogs answered from pre-loaded queues.
///
/// An exhausted queue behaves like a user dismissing the dialog.
#[derive(Clone, Default)]
pub struct ScriptedDialogs {
    state: Arc<Mutex<State>>,
}

impl ScriptedDialogs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_confirm(&self, answer: DialogResult) {
        lock(&self.state).confirms.push_back(answer);
    }

    pub fn push_prompt(&self, answer: PromptResult) {
        lock(&self.state).prompts.push_back(answer);
    }

    /// Messages of the confirmations shown so far
    pub fn confirmations(&self) -> Vec<String> {
        lock(&self.state).shown_confirms.clone()
    }

    /// Messages and default values of the prompts shown so far
    pub fn prompts(&self) -> Vec<(String, Option<String>)> {
        lock(&self.state).shown_prompts.clone()
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl DialogPort for ScriptedDialogs {
    async fn confirm(&self, message: &str) -> DialogResult {
        let mut state = lock(&self.state);
        state.shown_confirms.push(message.to_string());
        state.confirms.pop_front().unwrap_or(DialogResult::Declined)
    }

    async fn prompt(&self, message: &str, default_value: Option<&str>) -> PromptResult {
        let mut state = lock(&self.state);
        state
            .shown_prompts
            .push((message.to_string(), default_value.map(str::to_string)));
        state.prompts.pop_front().unwrap_or(PromptResult::Cancelled)
    }
}
