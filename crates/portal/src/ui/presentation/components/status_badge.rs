use dioxus::prelude::*;

use mgcp_shared::ProposalStatus;

pub fn status_label(status: ProposalStatus) -> &'static str {
    match status {
        ProposalStatus::Pregenerada => "PREGENERADA",
        ProposalStatus::Enviada => "ENVIADA",
        ProposalStatus::Revision => "REVISION",
        ProposalStatus::Aceptada => "ACEPTADA",
        ProposalStatus::Rechazada => "RECHAZADA",
        ProposalStatus::Unknown => "DESCONOCIDO",
    }
}

#[component]
pub fn StatusBadge(status: ProposalStatus) -> Element {
    rsx! {
        span {
            class: "badge bg-{status.badge()}",
            "{status_label(status)}"
        }
    }
}
