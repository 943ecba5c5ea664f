//! Toast lifecycle
//!
//! A toast is visible for its `duration_ms`, then plays a 300 ms exit
//! animation and is removed. Toasts do not stack or de-duplicate: each one
//! renders at the same fixed position and overlaps the others.

use std::sync::atomic::{AtomicBool, Ordering};

use uuid::Uuid;

use crate::ports::outbound::{Notification, PlatformPort};

/// Length of the slide-out animation
pub const EXIT_ANIMATION_MS: u64 = 300;

/// Enter/exit keyframes used by every toast
pub const NOTIFICATION_STYLES: &str = r#"
    @keyframes slideIn {
        from {
            transform: translateX(100%);
            opacity: 0;
        }
        to {
            transform: translateX(0);
            opacity: 1;
        }
    }

    @keyframes slideOut {
        from {
            transform: translateX(0);
            opacity: 1;
        }
        to {
            transform: translateX(100%);
            opacity: 0;
        }
    }
"#;

/// One-time stylesheet installation guard
pub struct StyleRegistry {
    installed: AtomicBool,
}

impl StyleRegistry {
    pub const fn new() -> Self {
        Self {
            installed: AtomicBool::new(false),
        }
    }

    /// Run `install` with the toast stylesheet the first time only.
    ///
    /// Returns true when this call performed the installation.
    pub fn ensure(&self, install: impl FnOnce(&'static str)) -> bool {
        if self
            .installed
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return false;
        }
        install(NOTIFICATION_STYLES);
        true
    }

    pub fn is_installed(&self) -> bool {
        self.installed.load(Ordering::Acquire)
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static NOTIFICATION_STYLE_REGISTRY: StyleRegistry = StyleRegistry::new();

/// Install the toast animation stylesheet once per process.
pub fn ensure_notification_styles(install: impl FnOnce(&'static str)) -> bool {
    NOTIFICATION_STYLE_REGISTRY.ensure(install)
}

/// Display phase of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Sliding in or resting on screen
    Visible,
    /// Playing the exit animation
    Leaving,
}

impl ToastPhase {
    /// CSS animation for this phase
    pub fn animation(&self) -> &'static str {
        match self {
            ToastPhase::Visible => "slideIn 0.3s ease-in-out",
            ToastPhase::Leaving => "slideOut 0.3s ease-in-out",
        }
    }
}

/// A toast currently in the document
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveToast {
    pub notification: Notification,
    pub phase: ToastPhase,
}

/// Lifecycle transitions produced by [`run_notification_lifecycle`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleStep {
    BeginExit(Uuid),
    Remove(Uuid),
}

/// Toasts currently on screen, in arrival order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationQueue {
    toasts: Vec<ActiveToast>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a toast; returns its id
    pub fn push(&mut self, notification: Notification) -> Uuid {
        let id = notification.id;
        self.toasts.push(ActiveToast {
            notification,
            phase: ToastPhase::Visible,
        });
        id
    }

    /// Start the exit animation. Returns false if the toast is gone.
    pub fn begin_exit(&mut self, id: Uuid) -> bool {
        match self.toasts.iter_mut().find(|t| t.notification.id == id) {
            Some(toast) => {
                toast.phase = ToastPhase::Leaving;
                true
            }
            None => false,
        }
    }

    /// Drop a toast. Returns false if it was already removed.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.notification.id != id);
        self.toasts.len() != before
    }

    pub fn apply(&mut self, step: LifecycleStep) -> bool {
        match step {
            LifecycleStep::BeginExit(id) => self.begin_exit(id),
            LifecycleStep::Remove(id) => self.remove(id),
        }
    }

    pub fn toasts(&self) -> &[ActiveToast] {
        &self.toasts
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Drive one toast from display to removal.
///
/// Waits `duration_ms`, emits [`LifecycleStep::BeginExit`], waits for the
/// exit animation, then emits [`LifecycleStep::Remove`].
pub async fn run_notification_lifecycle(
    platform: &dyn PlatformPort,
    id: Uuid,
    duration_ms: u64,
    mut apply: impl FnMut(LifecycleStep),
) {
    platform.sleep_ms(duration_ms).await;
    apply(LifecycleStep::BeginExit(id));
    platform.sleep_ms(EXIT_ANIMATION_MS).await;
    apply(LifecycleStep::Remove(id));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::testing::MockPlatform;
    use crate::ports::outbound::NotificationKind;

    #[test]
    fn styles_are_installed_once() {
        let registry = StyleRegistry::new();
        let mut installs = 0;

        assert!(registry.ensure(|css| {
            assert!(css.contains("@keyframes slideIn"));
            installs += 1;
        }));
        assert!(!registry.ensure(|_| installs += 1));
        assert_eq!(installs, 1);
        assert!(registry.is_installed());
    }

    #[test]
    fn queue_keeps_overlapping_toasts_in_arrival_order() {
        let mut queue = NotificationQueue::new();
        let first = queue.push(Notification::info("uno"));
        let second = queue.push(Notification::info("uno"));

        assert_ne!(first, second);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.toasts()[0].notification.id, first);
    }

    #[test]
    fn exit_then_remove() {
        let mut queue = NotificationQueue::new();
        let id = queue.push(Notification::error("fallo"));

        assert!(queue.begin_exit(id));
        assert_eq!(queue.toasts()[0].phase, ToastPhase::Leaving);
        assert!(queue.remove(id));
        assert!(queue.is_empty());
        assert!(!queue.remove(id));
        assert!(!queue.begin_exit(id));
    }

    #[tokio::test]
    async fn lifecycle_waits_duration_then_exit_animation() {
        let platform = MockPlatform::new();
        let mut queue = NotificationQueue::new();
        let notification = Notification::new("hola", NotificationKind::Success).with_duration(5000);
        let id = queue.push(notification);

        let mut steps = Vec::new();
        run_notification_lifecycle(&platform, id, 5000, |step| {
            queue.apply(step);
            steps.push(step);
        })
        .await;

        assert_eq!(steps, vec![LifecycleStep::BeginExit(id), LifecycleStep::Remove(id)]);
        assert_eq!(platform.sleeps(), vec![5000, EXIT_ANIMATION_MS]);
        assert!(queue.is_empty());
    }
}
