//! MGCP Portal - composition root binary.

use std::sync::Arc;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mgcp_portal::application::actions::ActionPorts;
use mgcp_portal::application::api::Api;
use mgcp_portal::application::notifications::ensure_notification_styles;
use mgcp_portal::application::services::{ClientResponseService, ProposalService, ReportService};
use mgcp_portal::application::PortalActions;
use mgcp_portal::config::PortalConfig;
use mgcp_portal::infrastructure::{create_ui_bridge, http_client::ApiAdapter, platform};
use mgcp_portal::ports::outbound::PlatformPort;
use mgcp_portal::presentation::PortalServices;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenvy::dotenv().ok();
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "mgcp_portal=debug,dioxus=info".into()),
            )
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    let config = PortalConfig::from_env();
    tracing::info!(base_url = %config.base_url, "Starting MGCP Portal");

    // Platform
    #[cfg(not(target_arch = "wasm32"))]
    let platform: Arc<dyn PlatformPort> = Arc::new(platform::create_platform(&config));
    #[cfg(target_arch = "wasm32")]
    let platform: Arc<dyn PlatformPort> = Arc::new(platform::create_platform());

    ensure_notification_styles(|css| platform.install_stylesheet(css));

    // HTTP
    let api = Api::new(Arc::new(ApiAdapter::new(&config.base_url)));
    let proposals = ProposalService::new(api.clone());
    let responses = ClientResponseService::new(api.clone());
    let reports = ReportService::new(api);

    // UI bridge: actions talk to the component tree through channels
    let (bridge, inboxes) = create_ui_bridge();
    let actions = PortalActions::new(
        proposals,
        responses.clone(),
        ActionPorts {
            dialogs: bridge.dialogs,
            notifier: bridge.notifier,
            view: bridge.view,
            platform: platform.clone(),
        },
        config.action_settings(),
    );

    // The browser opens whatever URL it was given
    #[cfg(not(target_arch = "wasm32"))]
    let start_path = Some(config.page_path.clone()).filter(|path| path != "/");
    #[cfg(target_arch = "wasm32")]
    let start_path = None;

    let services = PortalServices {
        actions,
        responses,
        reports,
        platform,
        inboxes,
        start_path,
    };

    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let head = format!(
            "<style>{}</style>",
            mgcp_portal::application::notifications::NOTIFICATION_STYLES
        );
        let cfg = dioxus_desktop::Config::new().with_custom_head(head);
        builder = builder.with_cfg(cfg);
    }

    builder.with_context(services).launch(mgcp_portal::app);
}
