//! Notifier Port - transient toast notifications

use uuid::Uuid;

/// Default time a toast stays on screen before its exit animation
pub const DEFAULT_NOTIFICATION_MS: u64 = 3000;

/// Visual category of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }

    /// Background color of the toast
    pub fn background_color(&self) -> &'static str {
        match self {
            NotificationKind::Success => "#27ae60",
            NotificationKind::Error => "#e74c3c",
            NotificationKind::Info => "#3498db",
        }
    }

    /// CSS classes applied to the toast element
    pub fn css_class(&self) -> String {
        format!("notificacion notificacion-{}", self.as_str())
    }
}

/// A toast waiting to be shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub kind: NotificationKind,
    pub duration_ms: u64,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            kind,
            duration_ms: DEFAULT_NOTIFICATION_MS,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Error)
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }
}

/// Sink for toasts. Fire-and-forget: the notifier owns display and removal.
#[cfg_attr(test, mockall::automock)]
pub trait NotifierPort: Send + Sync {
    fn notify(&self, notification: Notification);
}
