//! Recording sinks for toasts and view refreshes

use std::sync::{Arc, Mutex};

use super::lock;
use crate::ports::outbound::{Notification, NotifierPort, ViewPort, ViewUpdate};

#[derive(Clone, Default)]
pub struct RecordingNotifier {
    notifications: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        lock(&self.notifications).clone()
    }

    /// Just the toast texts, in order
    pub fn messages(&self) -> Vec<String> {
        lock(&self.notifications)
            .iter()
            .map(|n| n.message.clone())
            .collect()
    }
}

impl NotifierPort for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        lock(&self.notifications).push(notification);
    }
}

#[derive(Clone, Default)]
pub struct RecordingView {
    updates: Arc<Mutex<Vec<ViewUpdate>>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn updates(&self) -> Vec<ViewUpdate> {
        lock(&self.updates).clone()
    }
}

impl ViewPort for RecordingView {
    fn refresh(&self, update: ViewUpdate) {
        lock(&self.updates).push(update);
    }
}
