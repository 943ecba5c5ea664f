use dioxus::prelude::*;

pub mod presentation;

use presentation::components::{DialogHost, ToastHost};
use presentation::services::{use_inboxes, use_platform, use_start_path};
use presentation::state::{use_view_state, DialogState, ToastState, ViewState};
use presentation::views::{ClientPortalView, DashboardView, NotFound, ProposalView};

/// Pages of the portal. The paths match the ones the server links to.
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(PortalLayout)]
        #[route("/")]
        DashboardView {},
        #[route("/propuestas/:proposal_id")]
        ProposalView { proposal_id: String },
        #[route("/cliente/propuesta/:token")]
        ClientPortalView { token: String },
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

/// Context providers and the hosts that drain the UI bridge.
///
/// The hosts sit outside the router so navigation never unmounts them.
#[component]
fn AppRoot() -> Element {
    // These must be created inside an active Dioxus runtime.
    use_context_provider(ToastState::new);
    use_context_provider(DialogState::new);
    use_context_provider(ViewState::new);

    rsx! {
        ViewUpdatePump {}
        Router::<Route> {}
        DialogHost {}
        ToastHost {}
    }
}

/// Navigation bar around the portal pages
#[component]
fn PortalLayout() -> Element {
    let platform = use_platform();
    let route = use_route::<Route>();
    let navigator = use_navigator();
    let start_path = use_start_path();

    // Desktop has no address bar; open the configured page once
    use_hook(move || {
        let Some(path) = start_path else {
            return;
        };
        match path.parse::<Route>() {
            Ok(route) => {
                tracing::info!(path = %path, "Opening start page");
                navigator.replace(route);
            }
            Err(e) => tracing::warn!(path = %path, "Ignoring unknown start page: {}", e),
        }
    });

    // Actions read the response token from the current path
    platform.set_current_path(&route.to_string());

    rsx! {
        nav {
            class: "navbar navbar-light bg-light mb-4 px-3",
            Link { to: Route::DashboardView {}, class: "navbar-brand", "MGCP" }
        }
        Outlet::<Route> {}
    }
}

/// Folds `ViewUpdate`s from the actions into the view state
#[component]
fn ViewUpdatePump() -> Element {
    let inboxes = use_inboxes();
    let view_state = use_view_state();

    use_hook(move || {
        let Some(mut rx) = inboxes.view_updates.lease() else {
            tracing::warn!("View update inbox already leased by another host");
            return;
        };
        spawn(async move {
            let mut view_state = view_state;
            while let Some(update) = rx.next().await {
                view_state.apply(update);
            }
        });
    });

    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_match_server_links() {
        assert_eq!(
            "/propuestas/p-1".parse::<Route>().ok(),
            Some(Route::ProposalView {
                proposal_id: "p-1".into()
            })
        );
        assert_eq!(
            "/cliente/propuesta/abc123".parse::<Route>().ok(),
            Some(Route::ClientPortalView {
                token: "abc123".into()
            })
        );
        assert_eq!(
            Route::ClientPortalView {
                token: "abc123".into()
            }
            .to_string(),
            mgcp_shared::paths::client_portal_page("abc123")
        );
    }

    #[test]
    fn unknown_paths_fall_through() {
        assert!(matches!(
            "/otra/cosa".parse::<Route>(),
            Ok(Route::NotFound { .. })
        ));
    }
}
