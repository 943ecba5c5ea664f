//! Service providers for the presentation layer
//!
//! The composition root builds one [`PortalServices`] and hands it to the
//! launcher as context. Components reach services through the hooks below
//! and never see infrastructure adapter types, only ports and application
//! services.

use dioxus::prelude::*;
use std::sync::Arc;

use crate::application::services::{ClientResponseService, ReportService};
use crate::application::PortalActions;
use crate::infrastructure::BridgeInboxes;
use crate::ports::outbound::PlatformPort;

/// Everything the UI needs from the layers below
#[derive(Clone)]
pub struct PortalServices {
    pub actions: PortalActions,
    pub responses: ClientResponseService,
    pub reports: ReportService,
    pub platform: Arc<dyn PlatformPort>,
    /// Channel ends the toast, dialog and view hosts drain
    pub inboxes: BridgeInboxes,
    /// Route to open first when there is no address bar
    pub start_path: Option<String>,
}

fn use_services() -> PortalServices {
    use_context::<PortalServices>()
}

/// Hook to access the user-triggered actions
pub fn use_portal_actions() -> PortalActions {
    use_services().actions
}

/// Hook to access the client-portal read operations
pub fn use_client_response_service() -> ClientResponseService {
    use_services().responses
}

/// Hook to access the dashboard reports
pub fn use_report_service() -> ReportService {
    use_services().reports
}

/// Hook to access the platform port
pub fn use_platform() -> Arc<dyn PlatformPort> {
    use_services().platform
}

pub fn use_inboxes() -> BridgeInboxes {
    use_services().inboxes
}

pub fn use_start_path() -> Option<String> {
    use_services().start_path
}
