//! In-page dialog state
//!
//! Dialog requests from concurrent actions wait in arrival order; only the
//! front one is shown. Answering it sends the reply back to the waiting
//! action and reveals the next one.

use dioxus::prelude::*;
use std::collections::VecDeque;

use crate::infrastructure::DialogRequest;
use crate::ports::outbound::{DialogResult, PromptResult};

#[derive(Clone, Copy)]
pub struct DialogState {
    pending: Signal<VecDeque<DialogRequest>>,
    answered: Signal<u64>,
}

/// What the dialog host renders for the front request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogView {
    Confirm { message: String },
    Prompt { message: String, default_value: String },
}

impl DialogState {
    pub fn new() -> Self {
        Self {
            pending: Signal::new(VecDeque::new()),
            answered: Signal::new(0),
        }
    }

    pub fn enqueue(&mut self, request: DialogRequest) {
        self.pending.write().push_back(request);
    }

    /// Changes every time a dialog is answered; used to key dialog widgets
    pub fn serial(&self) -> u64 {
        *self.answered.read()
    }

    pub fn current(&self) -> Option<DialogView> {
        self.pending.read().front().map(|request| match request {
            DialogRequest::Confirm { message, .. } => DialogView::Confirm {
                message: message.clone(),
            },
            DialogRequest::Prompt {
                message,
                default_value,
                ..
            } => DialogView::Prompt {
                message: message.clone(),
                default_value: default_value.clone().unwrap_or_default(),
            },
        })
    }

    /// Answer the front confirmation
    pub fn answer_confirm(&mut self, confirmed: bool) {
        let answer = if confirmed {
            DialogResult::Confirmed
        } else {
            DialogResult::Declined
        };
        let front = self.pending.write().pop_front();
        *self.answered.write() += 1;
        match front {
            Some(DialogRequest::Confirm { reply, .. }) => {
                let _ = reply.send(answer);
            }
            Some(DialogRequest::Prompt { reply, .. }) => {
                tracing::warn!("Confirmation answer given to a prompt; cancelling it");
                let _ = reply.send(PromptResult::Cancelled);
            }
            None => {}
        }
    }

    /// Answer the front prompt; `None` cancels it
    pub fn answer_prompt(&mut self, value: Option<String>) {
        let answer = match value {
            Some(value) => PromptResult::Submitted(value),
            None => PromptResult::Cancelled,
        };
        let front = self.pending.write().pop_front();
        *self.answered.write() += 1;
        match front {
            Some(DialogRequest::Prompt { reply, .. }) => {
                let _ = reply.send(answer);
            }
            Some(DialogRequest::Confirm { reply, .. }) => {
                tracing::warn!("Prompt answer given to a confirmation; declining it");
                let _ = reply.send(DialogResult::Declined);
            }
            None => {}
        }
    }
}
