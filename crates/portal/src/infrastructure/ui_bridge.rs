//! Channel adapters between the application ports and the Dioxus UI
//!
//! Actions run as spawned tasks and must not touch signals directly. Each
//! adapter here pushes a message onto an unbounded channel; the matching
//! host component owns the receiver and turns messages into UI state.
//! Dialog requests carry a oneshot sender for the user's answer.

use std::sync::{Arc, Mutex, PoisonError};

use futures_channel::{mpsc, oneshot};
use futures_util::StreamExt;

use crate::ports::outbound::{
    DialogPort, DialogResult, Notification, NotifierPort, PromptResult, ViewPort, ViewUpdate,
};

/// A dialog the UI must show
#[derive(Debug)]
pub enum DialogRequest {
    Confirm {
        message: String,
        reply: oneshot::Sender<DialogResult>,
    },
    Prompt {
        message: String,
        default_value: Option<String>,
        reply: oneshot::Sender<PromptResult>,
    },
}

impl DialogRequest {
    pub fn message(&self) -> &str {
        match self {
            DialogRequest::Confirm { message, .. } | DialogRequest::Prompt { message, .. } => {
                message
            }
        }
    }
}

/// Receiver shared by the host components; one lease at a time.
///
/// A host that unmounts drops its lease and the receiver goes back, so the
/// next host picks up messages queued in between.
pub struct Inbox<T> {
    receiver: Arc<Mutex<Option<mpsc::UnboundedReceiver<T>>>>,
}

impl<T> Clone for Inbox<T> {
    fn clone(&self) -> Self {
        Self {
            receiver: Arc::clone(&self.receiver),
        }
    }
}

impl<T> Inbox<T> {
    fn new(receiver: mpsc::UnboundedReceiver<T>) -> Self {
        Self {
            receiver: Arc::new(Mutex::new(Some(receiver))),
        }
    }

    /// Borrow the receiver until the lease is dropped. `None` while leased.
    pub fn lease(&self) -> Option<InboxLease<T>> {
        let receiver = self
            .receiver
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()?;
        Some(InboxLease {
            receiver: Some(receiver),
            slot: Arc::clone(&self.receiver),
        })
    }
}

/// Exclusive hold on an [`Inbox`] receiver
pub struct InboxLease<T> {
    receiver: Option<mpsc::UnboundedReceiver<T>>,
    slot: Arc<Mutex<Option<mpsc::UnboundedReceiver<T>>>>,
}

impl<T> InboxLease<T> {
    /// Next message; `None` once every sender is gone
    pub async fn next(&mut self) -> Option<T> {
        self.receiver.as_mut()?.next().await
    }
}

impl<T> Drop for InboxLease<T> {
    fn drop(&mut self) {
        if let Some(receiver) = self.receiver.take() {
            *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(receiver);
        }
    }
}

// =============================================================================
// Adapters
// =============================================================================

#[derive(Clone)]
pub struct ChannelDialogs {
    tx: mpsc::UnboundedSender<DialogRequest>,
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl DialogPort for ChannelDialogs {
    async fn confirm(&self, message: &str) -> DialogResult {
        let (reply, answer) = oneshot::channel();
        let request = DialogRequest::Confirm {
            message: message.to_string(),
            reply,
        };
        if self.tx.unbounded_send(request).is_err() {
            tracing::warn!("Dialog host is gone; treating confirmation as declined");
            return DialogResult::Declined;
        }
        answer.await.unwrap_or(DialogResult::Declined)
    }

    async fn prompt(&self, message: &str, default_value: Option<&str>) -> PromptResult {
        let (reply, answer) = oneshot::channel();
        let request = DialogRequest::Prompt {
            message: message.to_string(),
            default_value: default_value.map(str::to_string),
            reply,
        };
        if self.tx.unbounded_send(request).is_err() {
            tracing::warn!("Dialog host is gone; treating prompt as cancelled");
            return PromptResult::Cancelled;
        }
        answer.await.unwrap_or(PromptResult::Cancelled)
    }
}

#[derive(Clone)]
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<Notification>,
}

impl NotifierPort for ChannelNotifier {
    fn notify(&self, notification: Notification) {
        if let Err(e) = self.tx.unbounded_send(notification) {
            tracing::warn!(message = %e.into_inner().message, "Toast host is gone; dropping toast");
        }
    }
}

#[derive(Clone)]
pub struct ChannelView {
    tx: mpsc::UnboundedSender<ViewUpdate>,
}

impl ViewPort for ChannelView {
    fn refresh(&self, update: ViewUpdate) {
        if self.tx.unbounded_send(update).is_err() {
            tracing::warn!("View host is gone; dropping view update");
        }
    }
}

// =============================================================================
// Wiring
// =============================================================================

/// Port adapters, for the application side
#[derive(Clone)]
pub struct BridgePorts {
    pub dialogs: Arc<ChannelDialogs>,
    pub notifier: Arc<ChannelNotifier>,
    pub view: Arc<ChannelView>,
}

/// Receivers, for the UI side
#[derive(Clone)]
pub struct BridgeInboxes {
    pub dialogs: Inbox<DialogRequest>,
    pub notifications: Inbox<Notification>,
    pub view_updates: Inbox<ViewUpdate>,
}

/// Create the three channels and split them into ports and inboxes
pub fn create_ui_bridge() -> (BridgePorts, BridgeInboxes) {
    let (dialog_tx, dialog_rx) = mpsc::unbounded();
    let (notify_tx, notify_rx) = mpsc::unbounded();
    let (view_tx, view_rx) = mpsc::unbounded();

    let ports = BridgePorts {
        dialogs: Arc::new(ChannelDialogs { tx: dialog_tx }),
        notifier: Arc::new(ChannelNotifier { tx: notify_tx }),
        view: Arc::new(ChannelView { tx: view_tx }),
    };
    let inboxes = BridgeInboxes {
        dialogs: Inbox::new(dialog_rx),
        notifications: Inbox::new(notify_rx),
        view_updates: Inbox::new(view_rx),
    };
    (ports, inboxes)
}
