//! Client portal page
//!
//! Reached through the link the director sends. The client reviews the
//! generated documents, then accepts, rejects or asks to negotiate, and
//! signs the contract once it is generated.

use dioxus::prelude::*;

use mgcp_shared::DocumentSummary;

use crate::application::actions::{
    ActionOutcome, NegotiationForm, NEGOTIATION_COMMENTS_ELEMENT, NEGOTIATION_FORM_ELEMENT,
};
use crate::presentation::helpers::format_date;
use crate::presentation::services::{use_client_response_service, use_portal_actions};
use crate::presentation::state::use_view_state;

#[component]
pub fn ClientPortalView(token: String) -> Element {
    let actions = use_portal_actions();
    let responses = use_client_response_service();
    let view_state = use_view_state();

    let mut form = use_signal(NegotiationForm::default);
    let mut comments = use_signal(String::new);

    // Reloads whenever a response or signature is recorded for this token
    let documents = {
        let token = token.clone();
        use_resource(move || {
            let responses = responses.clone();
            let token = token.clone();
            let _revision = view_state.snapshot.read().client(&token).revision;
            async move { responses.list_documents(&token).await }
        })
    };

    let snapshot = view_state.client(&token);

    let on_accept = {
        let actions = actions.clone();
        move |_| {
            let actions = actions.clone();
            spawn(async move {
                actions.accept_proposal().await;
            });
        }
    };
    let on_reject = {
        let actions = actions.clone();
        move |_| {
            let actions = actions.clone();
            spawn(async move {
                actions.reject_proposal().await;
            });
        }
    };
    let on_submit_negotiation = {
        let actions = actions.clone();
        move |_| {
            let actions = actions.clone();
            let text = comments.read().clone();
            spawn(async move {
                if actions.submit_negotiation(&text).await == ActionOutcome::Completed {
                    form.write().hide();
                    comments.set(String::new());
                }
            });
        }
    };

    let listing = match documents.read().clone() {
        Some(Ok(listing)) => rsx! {
            h2 { "Propuesta {listing.proposal_number}" }
            DocumentList { documents: listing.documents }
        },
        Some(Err(e)) => rsx! {
            div { class: "alert alert-danger", "No se pudieron cargar los documentos: {e}" }
        },
        None => rsx! {
            p { class: "text-muted", "Cargando documentos..." }
        },
    };

    rsx! {
        div {
            class: "container",

            {listing}

            if let Some(message) = snapshot.message.as_deref() {
                div { class: "alert alert-info", "{message}" }
            }

            if !snapshot.is_closed() {
                div {
                    class: "d-flex gap-2 my-3",
                    button { class: "btn btn-success", onclick: on_accept, "Aceptar propuesta" }
                    button {
                        class: "btn btn-warning",
                        onclick: move |_| form.write().show(),
                        "Solicitar cambios"
                    }
                    button { class: "btn btn-danger", onclick: on_reject, "Rechazar" }
                }

                div {
                    id: NEGOTIATION_FORM_ELEMENT,
                    style: "display: {form.read().display()};",
                    label { r#for: NEGOTIATION_COMMENTS_ELEMENT, "Comentarios" }
                    textarea {
                        id: NEGOTIATION_COMMENTS_ELEMENT,
                        class: "form-control mb-2",
                        rows: "4",
                        value: "{comments}",
                        oninput: move |e| comments.set(e.value()),
                    }
                    div {
                        class: "d-flex gap-2",
                        button { class: "btn btn-primary", onclick: on_submit_negotiation, "Enviar comentarios" }
                        button {
                            class: "btn btn-secondary",
                            onclick: move |_| form.write().hide(),
                            "Cancelar"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn DocumentList(documents: Vec<DocumentSummary>) -> Element {
    rsx! {
        if documents.is_empty() {
            p { class: "text-muted", "Aún no hay documentos disponibles." }
        }
        ul {
            class: "list-group mb-3",
            for doc in documents {
                DocumentRow { key: "{doc.id}", doc }
            }
        }
    }
}

#[component]
fn DocumentRow(doc: DocumentSummary) -> Element {
    let actions = use_portal_actions();
    let mut signature = use_signal(String::new);

    let on_sign = {
        let document_id = doc.id.clone();
        move |_| {
            let actions = actions.clone();
            let document_id = document_id.clone();
            let name = signature.read().clone();
            spawn(async move {
                actions.sign_contract(&document_id, &name).await;
            });
        }
    };

    rsx! {
        li {
            class: "list-group-item",
            div {
                class: "d-flex justify-content-between align-items-center",
                span { "{doc.kind.label()} v{doc.version} - {format_date(&doc.generated_at)}" }
                span {
                    a { href: "{doc.view_url}", target: "_blank", "Ver" }
                    " | "
                    a { href: "{doc.download_url}", "Descargar" }
                }
            }
            if let Some(signed_at) = doc.signed_at.as_deref() {
                small { class: "text-success", "Firmado el {format_date(signed_at)}" }
            }
            if doc.awaits_signature() {
                div {
                    class: "input-group mt-2",
                    input {
                        class: "form-control",
                        placeholder: "Nombre del firmante",
                        value: "{signature}",
                        oninput: move |e| signature.set(e.value()),
                    }
                    button { class: "btn btn-primary", onclick: on_sign, "Firmar contrato" }
                }
            }
        }
    }
}
