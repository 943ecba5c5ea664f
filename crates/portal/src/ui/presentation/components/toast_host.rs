//! Toast host
//!
//! Drains the notifier channel, shows each toast at the fixed top-right
//! position and drives it through its display and exit phases.

use dioxus::prelude::*;

use crate::application::notifications::{run_notification_lifecycle, ActiveToast};
use crate::presentation::services::{use_inboxes, use_platform};
use crate::presentation::state::use_toast_state;

/// Inline style of one toast
pub fn toast_style(toast: &ActiveToast) -> String {
    format!(
        "position: fixed; top: 20px; right: 20px; padding: 15px 20px; \
         background: {}; color: white; border-radius: 5px; \
         box-shadow: 0 4px 6px rgba(0,0,0,0.1); z-index: 1000; animation: {};",
        toast.notification.kind.background_color(),
        toast.phase.animation()
    )
}

#[component]
pub fn ToastHost() -> Element {
    let inboxes = use_inboxes();
    let platform = use_platform();
    let toast_state = use_toast_state();

    use_hook(move || {
        let Some(mut rx) = inboxes.notifications.lease() else {
            tracing::warn!("Toast inbox already leased by another host");
            return;
        };
        spawn(async move {
            let mut toasts = toast_state;
            while let Some(notification) = rx.next().await {
                let duration_ms = notification.duration_ms;
                let id = toasts.push(notification);
                let platform = platform.clone();
                spawn(async move {
                    let mut toasts = toast_state;
                    run_notification_lifecycle(platform.as_ref(), id, duration_ms, |step| {
                        toasts.apply(step)
                    })
                    .await;
                });
            }
        });
    });

    let toasts = toast_state.toasts();

    rsx! {
        for toast in toasts {
            div {
                key: "{toast.notification.id}",
                class: "{toast.notification.kind.css_class()}",
                style: "{toast_style(&toast)}",
                "{toast.notification.message}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::notifications::ToastPhase;
    use crate::ports::outbound::Notification;

    #[test]
    fn style_follows_kind_and_phase() {
        let toast = ActiveToast {
            notification: Notification::error("Error de conexión"),
            phase: ToastPhase::Leaving,
        };

        let style = toast_style(&toast);

        assert!(style.contains("background: #e74c3c"));
        assert!(style.contains("top: 20px; right: 20px"));
        assert!(style.contains("z-index: 1000"));
        assert!(style.contains("slideOut 0.3s ease-in-out"));
    }
}
