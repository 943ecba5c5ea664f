use dioxus::prelude::*;

use crate::ui::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    tracing::debug!(path = %path, "No route for path");

    rsx! {
        div {
            class: "container",
            h2 { "Página no encontrada" }
            p { class: "text-muted", "/{path}" }
            Link { to: Route::DashboardView {}, "Volver al panel" }
        }
    }
}
