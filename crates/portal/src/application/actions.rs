//! Portal actions - the user-triggered flows of the portal
//!
//! Every action follows the same contract:
//! 1. ask for confirmation or a value through [`DialogPort`] and stop
//!    silently if the user declines;
//! 2. validate locally where a rule exists, with an error toast and no
//!    request on failure;
//! 3. call the server once (no retry, no timeout, no cancellation);
//! 4. on success show a toast, wait `refresh_delay_ms` and push a
//!    [`ViewUpdate`] built from the response; on failure show the server's
//!    error text, or a generic connection message for transport failures.
//!
//! Nothing prevents the same action from running twice concurrently.

use std::sync::Arc;

use mgcp_shared::{paths, DecisionType};

use crate::application::services::{ClientResponseService, ProposalService};
use crate::application::validation::{parse_margin, require_comments};
use crate::application::ServiceError;
use crate::ports::outbound::{
    ClipboardCopy, DialogPort, Notification, NotifierPort, PlatformPort, ViewPort, ViewUpdate,
};

/// Id of the input holding the client link on the director page
pub const CLIENT_LINK_ELEMENT: &str = "enlace_cliente";

/// Id of the negotiation form container on the client page
pub const NEGOTIATION_FORM_ELEMENT: &str = "formularioNegociacion";

/// Id of the negotiation comments field
pub const NEGOTIATION_COMMENTS_ELEMENT: &str = "comentariosNegociacion";

/// Default value suggested by the margin prompt
pub const DEFAULT_MARGIN_SUGGESTION: &str = "30";

/// User-facing texts
pub mod messages {
    pub const CONFIRM_SEND: &str = "¿Confirma el envío de esta propuesta al cliente?";
    pub const CONFIRM_RESEND: &str = "¿Reenviar la propuesta modificada al cliente?";
    pub const PROMPT_MARGIN: &str = "Ingrese nueva utilidad (25-35%):";
    pub const CONFIRM_ACCEPT: &str = "¿Confirma la aceptación de esta propuesta?";
    pub const CONFIRM_REJECT: &str = "¿Desea rechazar esta propuesta?";
    pub const PROMPT_REJECT_REASON: &str = "Indique el motivo del rechazo:";
    pub const CONFIRM_SIGN: &str = "¿Confirma la firma del contrato?";

    pub const SENT: &str = "✓ Propuesta enviada exitosamente";
    pub const RESENT: &str = "✓ Propuesta reenviada";
    pub const LINK_COPIED: &str = "✓ Enlace copiado al portapapeles";
    pub const ELEMENT_MISSING: &str = "Elemento no encontrado";
    pub const CONNECTION_ERROR: &str = "Error de conexión";

    pub const DIRECTOR_ERROR_PREFIX: &str = "Error: ";
    pub const CLIENT_ERROR_PREFIX: &str = "❌ Error: ";

    pub fn modified(version: u32) -> String {
        format!("✓ Propuesta actualizada a versión {}", version)
    }

    pub fn client_success(message: &str) -> String {
        format!("✓ {}", message)
    }
}

/// How an action invocation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The server accepted the operation and the view was refreshed
    Completed,
    /// The user declined or dismissed a dialog
    Cancelled,
    /// Local validation failed; nothing was sent
    Invalid,
    /// The server refused the operation or could not be reached
    Failed,
}

/// Visibility of the client negotiation form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NegotiationForm {
    #[default]
    Hidden,
    Shown,
}

impl NegotiationForm {
    pub fn show(&mut self) {
        *self = NegotiationForm::Shown;
    }

    pub fn hide(&mut self) {
        *self = NegotiationForm::Hidden;
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, NegotiationForm::Shown)
    }

    /// CSS `display` value of the form container
    pub fn display(&self) -> &'static str {
        match self {
            NegotiationForm::Shown => "block",
            NegotiationForm::Hidden => "none",
        }
    }
}

/// Tunables for the action flows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionSettings {
    /// Actor recorded as `usuario_director` on modifications
    pub director_label: String,
    /// Delay between the success toast and the view refresh
    pub refresh_delay_ms: u64,
    /// Display time of each toast
    pub notification_ms: u64,
}

impl Default for ActionSettings {
    fn default() -> Self {
        Self {
            director_label: "Director ACME".to_string(),
            refresh_delay_ms: 1500,
            notification_ms: crate::ports::outbound::notifier_port::DEFAULT_NOTIFICATION_MS,
        }
    }
}

/// Outbound ports the actions talk to
#[derive(Clone)]
pub struct ActionPorts {
    pub dialogs: Arc<dyn DialogPort>,
    pub notifier: Arc<dyn NotifierPort>,
    pub view: Arc<dyn ViewPort>,
    pub platform: Arc<dyn PlatformPort>,
}

/// Orchestrates dialogs, services, toasts and view refreshes
#[derive(Clone)]
pub struct PortalActions {
    proposals: ProposalService,
    responses: ClientResponseService,
    ports: ActionPorts,
    settings: ActionSettings,
}

impl PortalActions {
    pub fn new(
        proposals: ProposalService,
        responses: ClientResponseService,
        ports: ActionPorts,
        settings: ActionSettings,
    ) -> Self {
        Self {
            proposals,
            responses,
            ports,
            settings,
        }
    }

    pub fn settings(&self) -> &ActionSettings {
        &self.settings
    }

    // -------------------------------------------------------------------------
    // Director actions
    // -------------------------------------------------------------------------

    /// Send a proposal to its client
    pub async fn send_proposal(&self, proposal_id: &str) -> ActionOutcome {
        if !self.confirm(messages::CONFIRM_SEND).await {
            return ActionOutcome::Cancelled;
        }

        match self.proposals.send(proposal_id).await {
            Ok(sent) => {
                tracing::info!(
                    proposal_id = %proposal_id,
                    link = %sent.link,
                    expires_at = %sent.expires_at,
                    "Proposal sent to client"
                );
                self.complete(
                    messages::SENT,
                    ViewUpdate::ProposalSent {
                        proposal_id: proposal_id.to_string(),
                        link: sent.link,
                        expires_at: sent.expires_at,
                    },
                )
                .await
            }
            Err(e) => self.fail(e, messages::DIRECTOR_ERROR_PREFIX),
        }
    }

    /// Resend a proposal after it was modified
    pub async fn resend_proposal(&self, proposal_id: &str) -> ActionOutcome {
        if !self.confirm(messages::CONFIRM_RESEND).await {
            return ActionOutcome::Cancelled;
        }

        match self.proposals.send(proposal_id).await {
            Ok(sent) => {
                self.complete(
                    messages::RESENT,
                    ViewUpdate::ProposalResent {
                        proposal_id: proposal_id.to_string(),
                        link: sent.link,
                        expires_at: sent.expires_at,
                    },
                )
                .await
            }
            Err(e) => self.fail(e, messages::DIRECTOR_ERROR_PREFIX),
        }
    }

    /// Ask for a new margin and apply it
    pub async fn modify_proposal(&self, proposal_id: &str) -> ActionOutcome {
        let Some(input) = self
            .ports
            .dialogs
            .prompt(messages::PROMPT_MARGIN, Some(DEFAULT_MARGIN_SUGGESTION))
            .await
            .into_value()
        else {
            return ActionOutcome::Cancelled;
        };

        let margin = match parse_margin(&input) {
            Ok(margin) => margin,
            Err(e) => {
                tracing::debug!(input = %input, "Rejected margin input");
                self.notify(Notification::error(e.to_string()));
                return ActionOutcome::Invalid;
            }
        };

        match self
            .proposals
            .modify(proposal_id, margin, &self.settings.director_label)
            .await
        {
            Ok(modified) => {
                self.complete(
                    &messages::modified(modified.new_version),
                    ViewUpdate::ProposalModified {
                        proposal_id: proposal_id.to_string(),
                        new_version: modified.new_version,
                        final_price: modified.final_price,
                        changes: modified.changes,
                    },
                )
                .await
            }
            Err(e) => self.fail(e, messages::DIRECTOR_ERROR_PREFIX),
        }
    }

    /// Copy the client link to the clipboard.
    ///
    /// The success toast is shown whatever the copy outcome; only a missing
    /// element is reported as an error.
    pub fn copy_link(&self) -> ActionOutcome {
        match self.ports.platform.copy_element_text(CLIENT_LINK_ELEMENT) {
            ClipboardCopy::ElementMissing => {
                self.notify(Notification::error(messages::ELEMENT_MISSING));
                ActionOutcome::Failed
            }
            copy => {
                tracing::debug!(?copy, "Clipboard copy requested");
                self.notify(Notification::success(messages::LINK_COPIED));
                ActionOutcome::Completed
            }
        }
    }

    // -------------------------------------------------------------------------
    // Client actions
    // -------------------------------------------------------------------------

    /// Accept the proposal shown on the client page
    pub async fn accept_proposal(&self) -> ActionOutcome {
        if !self.confirm(messages::CONFIRM_ACCEPT).await {
            return ActionOutcome::Cancelled;
        }
        self.submit_response(DecisionType::Accepted, "").await
    }

    /// Reject the proposal, asking for the reason
    pub async fn reject_proposal(&self) -> ActionOutcome {
        if !self.confirm(messages::CONFIRM_REJECT).await {
            return ActionOutcome::Cancelled;
        }

        let Some(reason) = self
            .ports
            .dialogs
            .prompt(messages::PROMPT_REJECT_REASON, None)
            .await
            .into_value()
        else {
            return ActionOutcome::Cancelled;
        };

        self.submit_response(DecisionType::Rejected, &reason).await
    }

    /// Submit the negotiation form
    pub async fn submit_negotiation(&self, comments: &str) -> ActionOutcome {
        self.submit_response(DecisionType::Negotiation, comments).await
    }

    /// Record a decision for the proposal addressed by the current page.
    ///
    /// The token is the last segment of the current page path.
    pub async fn submit_response(&self, decision: DecisionType, comments: &str) -> ActionOutcome {
        if decision.requires_comments() {
            if let Err(e) = require_comments(comments) {
                self.notify(Notification::error(e.to_string()));
                return ActionOutcome::Invalid;
            }
        }

        let token = self.current_token();
        match self.responses.submit(&token, decision, comments).await {
            Ok(ack) => {
                self.complete(
                    &messages::client_success(&ack.message),
                    ViewUpdate::ResponseRecorded {
                        token,
                        decision,
                        message: ack.message,
                        contract_id: ack.contract_id,
                    },
                )
                .await
            }
            Err(e) => self.fail(e, messages::CLIENT_ERROR_PREFIX),
        }
    }

    /// Sign a contract generated for the proposal on the current page
    pub async fn sign_contract(&self, document_id: &str, signature: &str) -> ActionOutcome {
        if !self.confirm(messages::CONFIRM_SIGN).await {
            return ActionOutcome::Cancelled;
        }

        let token = self.current_token();
        match self
            .responses
            .sign_contract(&token, document_id, signature)
            .await
        {
            Ok(signed) => {
                self.complete(
                    &messages::client_success(&signed.message),
                    ViewUpdate::ContractSigned {
                        token,
                        contract_id: signed.contract_id,
                        signed_at: signed.signed_at,
                        view_url: signed.view_url,
                        download_url: signed.download_url,
                    },
                )
                .await
            }
            Err(e) => self.fail(e, messages::CLIENT_ERROR_PREFIX),
        }
    }

    // -------------------------------------------------------------------------
    // Helpers
    // -------------------------------------------------------------------------

    fn current_token(&self) -> String {
        let path = self.ports.platform.current_path();
        paths::token_from_path(&path).to_string()
    }

    async fn confirm(&self, message: &str) -> bool {
        self.ports.dialogs.confirm(message).await.is_confirmed()
    }

    fn notify(&self, notification: Notification) {
        self.ports
            .notifier
            .notify(notification.with_duration(self.settings.notification_ms));
    }

    async fn complete(&self, message: &str, update: ViewUpdate) -> ActionOutcome {
        self.notify(Notification::success(message));
        self.ports
            .platform
            .sleep_ms(self.settings.refresh_delay_ms)
            .await;
        self.ports.view.refresh(update);
        ActionOutcome::Completed
    }

    fn fail(&self, error: ServiceError, prefix: &str) -> ActionOutcome {
        let message = match &error {
            ServiceError::Rejected(text) => format!("{}{}", prefix, text),
            ServiceError::InvalidRequest(text) => format!("{}{}", prefix, text),
            ServiceError::Transport(e) => {
                tracing::error!(error = %e, "Request to portal server failed");
                messages::CONNECTION_ERROR.to_string()
            }
        };
        self.notify(Notification::error(message));
        ActionOutcome::Failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::Api;
    use crate::infrastructure::testing::{
        MockPlatform, RecordingApi, RecordingNotifier, RecordingView, ScriptedDialogs,
    };
    use crate::ports::outbound::{
        ApiError, DialogResult, MockNotifierPort, MockViewPort, NotificationKind, PromptResult,
    };
    use serde_json::json;

    struct Harness {
        api: RecordingApi,
        dialogs: ScriptedDialogs,
        notifier: RecordingNotifier,
        view: RecordingView,
        platform: MockPlatform,
        actions: PortalActions,
    }

    fn harness() -> Harness {
        let api = RecordingApi::new();
        let dialogs = ScriptedDialogs::new();
        let notifier = RecordingNotifier::new();
        let view = RecordingView::new();
        let platform = MockPlatform::new().with_path("/cliente/propuesta/tok-123");
        let raw = Api::new(Arc::new(api.clone()));
        let actions = PortalActions::new(
            ProposalService::new(raw.clone()),
            ClientResponseService::new(raw),
            ActionPorts {
                dialogs: Arc::new(dialogs.clone()),
                notifier: Arc::new(notifier.clone()),
                view: Arc::new(view.clone()),
                platform: Arc::new(platform.clone()),
            },
            ActionSettings::default(),
        );
        Harness {
            api,
            dialogs,
            notifier,
            view,
            platform,
            actions,
        }
    }

    fn sent_body() -> serde_json::Value {
        json!({
            "success": true,
            "enlace": "http://localhost:5000/cliente/propuesta/tok-123",
            "fecha_expiracion": "2024-01-06T10:00:00",
        })
    }

    // ---------------------------------------------------------------------
    // send / resend
    // ---------------------------------------------------------------------

    #[tokio::test]
    async fn send_declined_makes_no_request() {
        let h = harness();
        h.dialogs.push_confirm(DialogResult::Declined);

        let outcome = h.actions.send_proposal("p-1").await;

        assert_eq!(outcome, ActionOutcome::Cancelled);
        assert!(h.api.calls().is_empty());
        assert!(h.notifier.notifications().is_empty());
        assert_eq!(h.dialogs.confirmations(), vec![messages::CONFIRM_SEND.to_string()]);
    }

    #[tokio::test]
    async fn send_success_toasts_then_refreshes_after_delay() {
        let h = harness();
        h.dialogs.push_confirm(DialogResult::Confirmed);
        h.api.respond("/propuestas/p-1/enviar", sent_body());

        let outcome = h.actions.send_proposal("p-1").await;

        assert_eq!(outcome, ActionOutcome::Completed);
        let toasts = h.notifier.notifications();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].kind, NotificationKind::Success);
        assert_eq!(toasts[0].message, messages::SENT);
        assert_eq!(toasts[0].duration_ms, 3000);
        assert_eq!(h.platform.sleeps(), vec![1500]);
        assert_eq!(
            h.view.updates(),
            vec![ViewUpdate::ProposalSent {
                proposal_id: "p-1".into(),
                link: "http://localhost:5000/cliente/propuesta/tok-123".into(),
                expires_at: "2024-01-06T10:00:00".into(),
            }]
        );
    }

    #[tokio::test]
    async fn send_rejection_shows_server_text_without_refresh() {
        let h = harness();
        h.dialogs.push_confirm(DialogResult::Confirmed);
        h.api.respond(
            "/propuestas/p-1/enviar",
            json!({ "success": false, "error": "X" }),
        );

        let outcome = h.actions.send_proposal("p-1").await;

        assert_eq!(outcome, ActionOutcome::Failed);
        let toasts = h.notifier.notifications();
        assert_eq!(toasts[0].kind, NotificationKind::Error);
        assert!(toasts[0].message.contains('X'));
        assert_eq!(toasts[0].message, "Error: X");
        assert!(h.view.updates().is_empty());
        assert!(h.platform.sleeps().is_empty());
    }

    #[tokio::test]
    async fn send_transport_failure_shows_connection_error() {
        let h = harness();
        h.dialogs.push_confirm(DialogResult::Confirmed);
        h.api.fail(
            "/propuestas/p-1/enviar",
            ApiError::RequestFailed("connection refused".into()),
        );

        let outcome = h.actions.send_proposal("p-1").await;

        assert_eq!(outcome, ActionOutcome::Failed);
        assert_eq!(h.notifier.messages(), vec![messages::CONNECTION_ERROR.to_string()]);
        assert!(h.view.updates().is_empty());
    }

    #[tokio::test]
    async fn resend_uses_its_own_copy() {
        let h = harness();
        h.dialogs.push_confirm(DialogResult::Confirmed);
        h.api.respond("/propuestas/p-1/enviar", sent_body());

        let outcome = h.actions.resend_proposal("p-1").await;

        assert_eq!(outcome, ActionOutcome::Completed);
        assert_eq!(h.dialogs.confirmations(), vec![messages::CONFIRM_RESEND.to_string()]);
        assert_eq!(h.notifier.messages(), vec![messages::RESENT.to_string()]);
        assert!(matches!(
            h.view.updates()[0],
            ViewUpdate::ProposalResent { .. }
        ));
    }

    // ---------------------------------------------------------------------
    // modify
    // ---------------------------------------------------------------------

    #[tokio::test]
    async fn modify_out_of_range_makes_no_request() {
        let h = harness();
        h.dialogs.push_prompt(PromptResult::Submitted("40".into()));

        let outcome = h.actions.modify_proposal("p-1").await;

        assert_eq!(outcome, ActionOutcome::Invalid);
        assert!(h.api.calls().is_empty());
        let toasts = h.notifier.notifications();
        assert_eq!(toasts[0].kind, NotificationKind::Error);
        assert_eq!(toasts[0].message, "La utilidad debe estar entre 25% y 35%");
    }

    #[tokio::test]
    async fn modify_non_numeric_makes_no_request() {
        let h = harness();
        h.dialogs.push_prompt(PromptResult::Submitted("abc".into()));

        assert_eq!(h.actions.modify_proposal("p-1").await, ActionOutcome::Invalid);
        assert!(h.api.calls().is_empty());
    }

    #[tokio::test]
    async fn modify_cancelled_is_silent() {
        let h = harness();
        h.dialogs.push_prompt(PromptResult::Cancelled);

        assert_eq!(h.actions.modify_proposal("p-1").await, ActionOutcome::Cancelled);
        assert!(h.notifier.notifications().is_empty());
    }

    #[tokio::test]
    async fn modify_prompt_suggests_thirty() {
        let h = harness();
        h.dialogs.push_prompt(PromptResult::Cancelled);

        h.actions.modify_proposal("p-1").await;

        assert_eq!(
            h.dialogs.prompts(),
            vec![(messages::PROMPT_MARGIN.to_string(), Some("30".to_string()))]
        );
    }

    #[tokio::test]
    async fn modify_success_reports_new_version() {
        let h = harness();
        h.dialogs.push_prompt(PromptResult::Submitted("32".into()));
        h.api.respond(
            "/propuestas/p-1/modificar",
            json!({ "success": true, "nueva_version": 4, "precio_final": 990000.0, "cambios": ["Utilidad: 30.0% → 32.0%"] }),
        );

        let outcome = h.actions.modify_proposal("p-1").await;

        assert_eq!(outcome, ActionOutcome::Completed);
        assert_eq!(
            h.api.calls()[0].body,
            Some(json!({ "utilidad_porcentaje": 32.0, "usuario_director": "Director ACME" }))
        );
        assert_eq!(
            h.notifier.messages(),
            vec!["✓ Propuesta actualizada a versión 4".to_string()]
        );
        assert_eq!(
            h.view.updates(),
            vec![ViewUpdate::ProposalModified {
                proposal_id: "p-1".into(),
                new_version: 4,
                final_price: Some(990000.0),
                changes: vec!["Utilidad: 30.0% → 32.0%".into()],
            }]
        );
    }

    // ---------------------------------------------------------------------
    // copy link
    // ---------------------------------------------------------------------

    #[test]
    fn copy_link_without_element_is_an_error() {
        let h = harness();

        assert_eq!(h.actions.copy_link(), ActionOutcome::Failed);
        assert_eq!(h.notifier.messages(), vec![messages::ELEMENT_MISSING.to_string()]);
    }

    #[test]
    fn copy_link_reports_success_even_if_copy_fails() {
        let h = harness();
        h.platform.set_element_value(CLIENT_LINK_ELEMENT, "http://x/cliente/propuesta/t");
        h.platform.set_copy_result(ClipboardCopy::Failed);

        assert_eq!(h.actions.copy_link(), ActionOutcome::Completed);
        let toasts = h.notifier.notifications();
        assert_eq!(toasts[0].kind, NotificationKind::Success);
        assert_eq!(toasts[0].message, messages::LINK_COPIED);
        assert_eq!(h.platform.copied(), vec![CLIENT_LINK_ELEMENT.to_string()]);
    }

    // ---------------------------------------------------------------------
    // client responses
    // ---------------------------------------------------------------------

    #[tokio::test]
    async fn accept_posts_to_token_from_current_path() {
        let h = harness();
        h.dialogs.push_confirm(DialogResult::Confirmed);
        h.api.respond(
            "/cliente/respuesta/tok-123",
            json!({ "success": true, "mensaje": "Y" }),
        );

        let outcome = h.actions.accept_proposal().await;

        assert_eq!(outcome, ActionOutcome::Completed);
        let calls = h.api.calls();
        assert_eq!(calls[0].path, "/cliente/respuesta/tok-123");
        assert_eq!(
            calls[0].body,
            Some(json!({ "tipo": "ACEPTADA", "comentarios": "" }))
        );
        assert_eq!(h.notifier.messages(), vec!["✓ Y".to_string()]);
        assert_eq!(h.platform.sleeps(), vec![1500]);
        assert_eq!(h.view.updates().len(), 1);
    }

    #[tokio::test]
    async fn accept_declined_makes_no_request() {
        let h = harness();
        h.dialogs.push_confirm(DialogResult::Declined);

        assert_eq!(h.actions.accept_proposal().await, ActionOutcome::Cancelled);
        assert!(h.api.calls().is_empty());
    }

    #[tokio::test]
    async fn reject_requires_a_reason() {
        let h = harness();
        h.dialogs.push_confirm(DialogResult::Confirmed);
        h.dialogs.push_prompt(PromptResult::Submitted("   ".into()));

        let outcome = h.actions.reject_proposal().await;

        assert_eq!(outcome, ActionOutcome::Invalid);
        assert!(h.api.calls().is_empty());
        assert_eq!(
            h.notifier.messages(),
            vec!["Por favor, escriba sus comentarios".to_string()]
        );
    }

    #[tokio::test]
    async fn reject_prompt_cancelled_is_silent() {
        let h = harness();
        h.dialogs.push_confirm(DialogResult::Confirmed);
        h.dialogs.push_prompt(PromptResult::Cancelled);

        assert_eq!(h.actions.reject_proposal().await, ActionOutcome::Cancelled);
        assert!(h.api.calls().is_empty());
        assert!(h.notifier.notifications().is_empty());
    }

    #[tokio::test]
    async fn reject_sends_reason() {
        let h = harness();
        h.dialogs.push_confirm(DialogResult::Confirmed);
        h.dialogs.push_prompt(PromptResult::Submitted("Precio muy alto".into()));
        h.api.respond(
            "/cliente/respuesta/tok-123",
            json!({ "success": true, "mensaje": "Respuesta registrada como RECHAZADA" }),
        );

        assert_eq!(h.actions.reject_proposal().await, ActionOutcome::Completed);
        assert_eq!(
            h.api.calls()[0].body,
            Some(json!({ "tipo": "RECHAZADA", "comentarios": "Precio muy alto" }))
        );
    }

    #[tokio::test]
    async fn negotiation_requires_comments() {
        let h = harness();

        assert_eq!(h.actions.submit_negotiation("").await, ActionOutcome::Invalid);
        assert!(h.api.calls().is_empty());
    }

    #[tokio::test]
    async fn response_failure_uses_client_prefix() {
        let h = harness();
        h.api.respond(
            "/cliente/respuesta/tok-123",
            json!({ "error": "Tipo de respuesta inválida" }),
        );

        let outcome = h.actions.submit_negotiation("Necesito otra fecha").await;

        assert_eq!(outcome, ActionOutcome::Failed);
        assert_eq!(
            h.notifier.messages(),
            vec!["❌ Error: Tipo de respuesta inválida".to_string()]
        );
        assert!(h.view.updates().is_empty());
    }

    #[tokio::test]
    async fn sign_contract_refreshes_with_signature_details() {
        let h = harness();
        h.dialogs.push_confirm(DialogResult::Confirmed);
        h.api.respond(
            "/cliente/firmar/tok-123/doc-7",
            json!({
                "success": true,
                "mensaje": "Contrato firmado exitosamente",
                "fecha_firma": "2024-01-05T12:00:00",
                "contrato_id": "doc-7",
                "url_ver": "http://x/documentos/ver/doc-7",
            }),
        );

        let outcome = h.actions.sign_contract("doc-7", "Juan Pérez").await;

        assert_eq!(outcome, ActionOutcome::Completed);
        assert_eq!(
            h.notifier.messages(),
            vec!["✓ Contrato firmado exitosamente".to_string()]
        );
        assert!(matches!(
            &h.view.updates()[0],
            ViewUpdate::ContractSigned { contract_id, .. } if contract_id == "doc-7"
        ));
    }

    // ---------------------------------------------------------------------
    // expectation-style checks with mockall
    // ---------------------------------------------------------------------

    #[tokio::test]
    async fn response_success_notifies_once_and_refreshes_once() {
        let api = RecordingApi::new();
        api.respond(
            "/cliente/respuesta/tok-123",
            json!({ "success": true, "mensaje": "Y" }),
        );

        let mut notifier = MockNotifierPort::new();
        notifier
            .expect_notify()
            .withf(|n| n.kind == NotificationKind::Success && n.message == "✓ Y")
            .times(1)
            .return_const(());

        let mut view = MockViewPort::new();
        view.expect_refresh()
            .withf(|u| u.token() == Some("tok-123"))
            .times(1)
            .return_const(());

        let raw = Api::new(Arc::new(api));
        let actions = PortalActions::new(
            ProposalService::new(raw.clone()),
            ClientResponseService::new(raw),
            ActionPorts {
                dialogs: Arc::new(ScriptedDialogs::new()),
                notifier: Arc::new(notifier),
                view: Arc::new(view),
                platform: Arc::new(MockPlatform::new().with_path("/cliente/propuesta/tok-123")),
            },
            ActionSettings::default(),
        );

        let outcome = actions
            .submit_response(DecisionType::Negotiation, "Plazo de pago a 60 días")
            .await;

        assert_eq!(outcome, ActionOutcome::Completed);
    }

    #[test]
    fn negotiation_form_toggles() {
        let mut form = NegotiationForm::default();
        assert!(!form.is_visible());
        assert_eq!(form.display(), "none");

        form.show();
        assert!(form.is_visible());
        assert_eq!(form.display(), "block");

        form.hide();
        assert_eq!(form, NegotiationForm::Hidden);
    }
}
