//! In-page confirmation and prompt dialogs

use dioxus::prelude::*;

use crate::presentation::services::use_inboxes;
use crate::presentation::state::{use_dialog_state, DialogView};

#[component]
pub fn DialogHost() -> Element {
    let inboxes = use_inboxes();
    let dialog_state = use_dialog_state();

    use_hook(move || {
        let Some(mut rx) = inboxes.dialogs.lease() else {
            tracing::warn!("Dialog inbox already leased by another host");
            return;
        };
        spawn(async move {
            let mut dialogs = dialog_state;
            while let Some(request) = rx.next().await {
                tracing::debug!(message = %request.message(), "Showing dialog");
                dialogs.enqueue(request);
            }
        });
    });

    let serial = dialog_state.serial();
    let dialog = match dialog_state.current() {
        Some(DialogView::Confirm { message }) => rsx! {
            ConfirmDialog { key: "{serial}", message }
        },
        Some(DialogView::Prompt { message, default_value }) => rsx! {
            PromptDialog { key: "{serial}", message, default_value }
        },
        None => rsx! {},
    };

    rsx! {
        {dialog}
    }
}

#[component]
fn DialogFrame(children: Element) -> Element {
    rsx! {
        div {
            class: "dialogo-fondo",
            style: "position: fixed; inset: 0; background: rgba(0,0,0,0.5); display: flex; align-items: center; justify-content: center; z-index: 900;",
            div {
                class: "dialogo",
                style: "background: white; border-radius: 8px; padding: 24px; min-width: 320px; max-width: 90%; box-shadow: 0 10px 25px rgba(0,0,0,0.2);",
                onclick: |e| e.stop_propagation(),
                {children}
            }
        }
    }
}

#[component]
fn ConfirmDialog(message: String) -> Element {
    let mut dialog_state = use_dialog_state();

    rsx! {
        DialogFrame {
            p { style: "margin: 0 0 20px 0;", "{message}" }
            div {
                style: "display: flex; justify-content: flex-end; gap: 8px;",
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| dialog_state.answer_confirm(false),
                    "Cancelar"
                }
                button {
                    class: "btn btn-primary",
                    autofocus: true,
                    onclick: move |_| dialog_state.answer_confirm(true),
                    "Aceptar"
                }
            }
        }
    }
}

#[component]
fn PromptDialog(message: String, default_value: String) -> Element {
    let mut dialog_state = use_dialog_state();
    let mut value = use_signal(move || default_value);

    rsx! {
        DialogFrame {
            label { style: "display: block; margin-bottom: 8px;", "{message}" }
            input {
                r#type: "text",
                class: "form-control",
                style: "width: 100%; margin-bottom: 20px;",
                autofocus: true,
                value: "{value}",
                oninput: move |e| value.set(e.value()),
                onkeydown: move |e| {
                    if e.key() == Key::Enter {
                        dialog_state.answer_prompt(Some(value.read().clone()));
                    } else if e.key() == Key::Escape {
                        dialog_state.answer_prompt(None);
                    }
                },
            }
            div {
                style: "display: flex; justify-content: flex-end; gap: 8px;",
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| dialog_state.answer_prompt(None),
                    "Cancelar"
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| dialog_state.answer_prompt(Some(value.read().clone())),
                    "Aceptar"
                }
            }
        }
    }
}
