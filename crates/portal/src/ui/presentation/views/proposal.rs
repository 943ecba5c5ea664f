//! Director proposal page
//!
//! Send, resend and margin changes for one proposal, plus the client link
//! once the proposal has been sent.

use dioxus::prelude::*;

use crate::application::actions::CLIENT_LINK_ELEMENT;
use crate::presentation::components::StatusBadge;
use crate::presentation::helpers::{format_currency, format_date};
use crate::presentation::services::{use_platform, use_portal_actions};
use crate::presentation::state::use_view_state;

#[component]
pub fn ProposalView(proposal_id: String) -> Element {
    let actions = use_portal_actions();
    let platform = use_platform();
    let view_state = use_view_state();

    // The copy action reads the link through the platform
    {
        let proposal_id = proposal_id.clone();
        use_effect(move || {
            let link = view_state.snapshot.read().proposal(&proposal_id).link;
            if let Some(link) = link {
                platform.set_element_value(CLIENT_LINK_ELEMENT, &link);
            }
        });
    }

    let snapshot = view_state.proposal(&proposal_id);
    let can_send = snapshot.status.map_or(true, |s| s.is_sendable()) && !snapshot.needs_resend;

    let on_send = {
        let actions = actions.clone();
        let id = proposal_id.clone();
        move |_| {
            let actions = actions.clone();
            let id = id.clone();
            spawn(async move {
                actions.send_proposal(&id).await;
            });
        }
    };
    let on_resend = {
        let actions = actions.clone();
        let id = proposal_id.clone();
        move |_| {
            let actions = actions.clone();
            let id = id.clone();
            spawn(async move {
                actions.resend_proposal(&id).await;
            });
        }
    };
    let on_modify = {
        let actions = actions.clone();
        let id = proposal_id.clone();
        move |_| {
            let actions = actions.clone();
            let id = id.clone();
            spawn(async move {
                actions.modify_proposal(&id).await;
            });
        }
    };
    let on_copy = move |_| {
        actions.copy_link();
    };

    rsx! {
        div {
            class: "container",
            div {
                class: "d-flex align-items-center gap-2 mb-3",
                h2 { class: "m-0", "Propuesta {proposal_id}" }
                if let Some(status) = snapshot.status {
                    StatusBadge { status }
                }
            }

            if let Some(version) = snapshot.version {
                div {
                    class: "card mb-3",
                    div {
                        class: "card-body",
                        h5 { "Versión {version}" }
                        if let Some(price) = snapshot.final_price {
                            p { "Precio final: {format_currency(price)}" }
                        }
                        if !snapshot.changes.is_empty() {
                            ul {
                                for change in snapshot.changes.iter() {
                                    li { key: "{change}", "{change}" }
                                }
                            }
                        }
                    }
                }
            }

            div {
                class: "d-flex gap-2 mb-3",
                if can_send {
                    button { class: "btn btn-primary", onclick: on_send, "Enviar al cliente" }
                }
                button { class: "btn btn-outline-secondary", onclick: on_modify, "Modificar utilidad" }
                if snapshot.needs_resend {
                    button { class: "btn btn-warning", onclick: on_resend, "Reenviar al cliente" }
                }
            }

            if let Some(link) = snapshot.link.clone() {
                div {
                    class: "card",
                    div {
                        class: "card-body",
                        label { r#for: CLIENT_LINK_ELEMENT, "Enlace para el cliente" }
                        div {
                            class: "input-group",
                            input {
                                id: CLIENT_LINK_ELEMENT,
                                class: "form-control",
                                readonly: true,
                                value: "{link}",
                            }
                            button { class: "btn btn-outline-primary", onclick: on_copy, "Copiar" }
                        }
                        if let Some(expires_at) = snapshot.expires_at.as_deref() {
                            small { class: "text-muted", "Válido hasta {format_date(expires_at)}" }
                        }
                    }
                }
            }
        }
    }
}
