//! Toast state
//!
//! Wraps the application's `NotificationQueue` in a signal so the toast host
//! re-renders when a toast arrives, starts leaving or is removed.

use dioxus::prelude::*;
use uuid::Uuid;

use crate::application::notifications::{ActiveToast, LifecycleStep, NotificationQueue};
use crate::ports::outbound::Notification;

#[derive(Clone, Copy)]
pub struct ToastState {
    pub queue: Signal<NotificationQueue>,
}

impl ToastState {
    pub fn new() -> Self {
        Self {
            queue: Signal::new(NotificationQueue::new()),
        }
    }

    pub fn push(&mut self, notification: Notification) -> Uuid {
        self.queue.write().push(notification)
    }

    pub fn apply(&mut self, step: LifecycleStep) {
        self.queue.write().apply(step);
    }

    pub fn toasts(&self) -> Vec<ActiveToast> {
        self.queue.read().toasts().to_vec()
    }
}
