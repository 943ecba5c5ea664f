//! Director dashboard: proposal counters and the client list

use dioxus::prelude::*;

use mgcp_shared::{ClientSummary, ProposalStatistics, ProposalStatus};

use crate::presentation::components::StatusBadge;
use crate::presentation::services::use_report_service;
use crate::ui::Route;

const STATUSES: [ProposalStatus; 5] = [
    ProposalStatus::Pregenerada,
    ProposalStatus::Enviada,
    ProposalStatus::Revision,
    ProposalStatus::Aceptada,
    ProposalStatus::Rechazada,
];

#[component]
pub fn DashboardView() -> Element {
    let reports = use_report_service();
    let navigator = use_navigator();
    let mut proposal_id = use_signal(String::new);

    let statistics = {
        let reports = reports.clone();
        use_resource(move || {
            let reports = reports.clone();
            async move { reports.statistics().await }
        })
    };
    let clients = use_resource(move || {
        let reports = reports.clone();
        async move { reports.clients().await }
    });

    let open_proposal = move |_| {
        let id = proposal_id.read().trim().to_string();
        if !id.is_empty() {
            navigator.push(Route::ProposalView { proposal_id: id });
        }
    };

    let statistics_view = match statistics.read().clone() {
        Some(Ok(stats)) => rsx! { StatisticsPanel { stats } },
        Some(Err(e)) => rsx! {
            div { class: "alert alert-danger", "No se pudieron cargar las estadísticas: {e}" }
        },
        None => rsx! { p { class: "text-muted", "Cargando estadísticas..." } },
    };
    let clients_view = match clients.read().clone() {
        Some(Ok(list)) => rsx! { ClientTable { clients: list } },
        Some(Err(e)) => rsx! {
            div { class: "alert alert-danger", "No se pudieron cargar los clientes: {e}" }
        },
        None => rsx! { p { class: "text-muted", "Cargando clientes..." } },
    };

    rsx! {
        div {
            class: "container",
            h2 { "Panel de propuestas" }

            div {
                class: "input-group mb-4",
                input {
                    class: "form-control",
                    placeholder: "ID de propuesta",
                    value: "{proposal_id}",
                    oninput: move |e| proposal_id.set(e.value()),
                }
                button { class: "btn btn-primary", onclick: open_proposal, "Abrir" }
            }

            {statistics_view}

            h3 { class: "mt-4", "Clientes" }
            {clients_view}
        }
    }
}

#[component]
fn StatisticsPanel(stats: ProposalStatistics) -> Element {
    rsx! {
        div {
            class: "d-flex flex-wrap gap-3",
            div {
                class: "card p-3",
                strong { "{stats.total}" }
                span { "Total" }
            }
            for status in STATUSES {
                div {
                    key: "{status:?}",
                    class: "card p-3",
                    strong { "{stats.count(status)}" }
                    StatusBadge { status }
                }
            }
            div {
                class: "card p-3",
                strong { "{stats.contratos_firmados}" }
                span { "Contratos firmados" }
            }
        }
        if let Some(rate) = stats.acceptance_rate() {
            p { class: "mt-2 text-muted", "Tasa de aceptación: {rate:.1}%" }
        }
    }
}

#[component]
fn ClientTable(clients: Vec<ClientSummary>) -> Element {
    if clients.is_empty() {
        return rsx! { p { class: "text-muted", "No hay clientes registrados." } };
    }

    rsx! {
        table {
            class: "table",
            thead {
                tr {
                    th { "Nombre" }
                    th { "Email" }
                    th { "Teléfono" }
                }
            }
            tbody {
                for client in clients {
                    tr {
                        key: "{client.id}",
                        td { "{client.name}" }
                        td { "{client.email}" }
                        td { {client.phone.clone().unwrap_or_else(|| "-".to_string())} }
                    }
                }
            }
        }
    }
}
