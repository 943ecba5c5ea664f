//! Client Response Service - operations available from the client portal
//!
//! Every call is addressed by the opaque token embedded in the client link;
//! no login is involved.

use mgcp_shared::{
    paths, ClientDocuments, ClientResponseAck, ClientResponseRequest, DecisionType,
    SignContractRequest, SignContractResponse,
};

use crate::application::error::IntoServiceResult;
use crate::application::{Api, ServiceError};

/// Signature recorded when the client leaves the field blank
pub const DEFAULT_SIGNATURE: &str = "Cliente";

#[derive(Clone)]
pub struct ClientResponseService {
    api: Api,
}

impl ClientResponseService {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    /// Record the client's decision on the proposal behind `token`
    pub async fn submit(
        &self,
        token: &str,
        decision: DecisionType,
        comments: &str,
    ) -> Result<ClientResponseAck, ServiceError> {
        let request = ClientResponseRequest {
            decision,
            comments: comments.to_string(),
        };

        tracing::debug!(decision = %decision, "Submitting client response");
        let ack: ClientResponseAck = self
            .api
            .post(&paths::client_response(token), &request)
            .await?
            .into_service_result()?;

        if let Some(contract_error) = &ack.contract_error {
            tracing::warn!(error = %contract_error, "Decision stored but contract generation failed");
        }
        Ok(ack)
    }

    /// Sign a generated contract
    pub async fn sign_contract(
        &self,
        token: &str,
        document_id: &str,
        signature: &str,
    ) -> Result<SignContractResponse, ServiceError> {
        let signature = match signature.trim() {
            "" => DEFAULT_SIGNATURE,
            s => s,
        };
        let request = SignContractRequest {
            signature: signature.to_string(),
        };

        tracing::debug!(document_id = %document_id, "Signing contract");
        self.api
            .post(&paths::sign_contract(token, document_id), &request)
            .await?
            .into_service_result()
    }

    /// List the documents generated for the proposal behind `token`
    pub async fn list_documents(&self, token: &str) -> Result<ClientDocuments, ServiceError> {
        Ok(self.api.get(&paths::client_documents(token)).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::testing::RecordingApi;
    use crate::ports::outbound::ApiError;
    use serde_json::json;
    use std::sync::Arc;

    fn service(api: &RecordingApi) -> ClientResponseService {
        ClientResponseService::new(Api::new(Arc::new(api.clone())))
    }

    #[tokio::test]
    async fn submit_posts_decision_and_comments() {
        let api = RecordingApi::new();
        api.respond(
            "/cliente/respuesta/tok",
            json!({ "success": true, "mensaje": "Respuesta registrada como NEGOCIACION" }),
        );

        let ack = service(&api)
            .submit("tok", DecisionType::Negotiation, "bajar precio")
            .await
            .unwrap();

        assert_eq!(ack.message, "Respuesta registrada como NEGOCIACION");
        assert!(!ack.contract_generated);
        assert_eq!(
            api.calls()[0].body,
            Some(json!({ "tipo": "NEGOCIACION", "comentarios": "bajar precio" }))
        );
    }

    #[tokio::test]
    async fn acceptance_reports_generated_contract() {
        let api = RecordingApi::new();
        api.respond(
            "/cliente/respuesta/tok",
            json!({
                "success": true,
                "mensaje": "Respuesta registrada como ACEPTADA",
                "contrato_generado": true,
                "contrato_id": "c-9",
            }),
        );

        let ack = service(&api).submit("tok", DecisionType::Accepted, "").await.unwrap();

        assert!(ack.contract_generated);
        assert_eq!(ack.contract_id.as_deref(), Some("c-9"));
    }

    #[tokio::test]
    async fn blank_signature_defaults_to_client() {
        let api = RecordingApi::new();
        api.respond(
            "/cliente/firmar/tok/doc-1",
            json!({
                "success": true,
                "mensaje": "Contrato firmado exitosamente",
                "fecha_firma": "2024-01-05T12:00:00",
                "contrato_id": "doc-1",
            }),
        );

        let signed = service(&api).sign_contract("tok", "doc-1", "   ").await.unwrap();

        assert_eq!(signed.contract_id, "doc-1");
        assert_eq!(api.calls()[0].body, Some(json!({ "firma": "Cliente" })));
    }

    #[tokio::test]
    async fn list_documents_maps_status_errors_to_transport() {
        let api = RecordingApi::new();
        api.fail(
            "/cliente/documentos/tok",
            ApiError::Status {
                status: 404,
                message: "Propuesta no encontrada".into(),
            },
        );

        let err = service(&api).list_documents("tok").await.unwrap_err();

        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn list_documents_decodes_listing() {
        let api = RecordingApi::new();
        api.respond(
            "/cliente/documentos/tok",
            json!({
                "propuesta_numero": "PROP-2024-001",
                "documentos": [{
                    "id": "d1",
                    "tipo": "PROPUESTA",
                    "version": 2,
                    "fecha": "2024-01-05T10:00:00",
                    "firmado": null,
                    "fecha_firma": null,
                    "url_ver": "/documentos/ver/d1",
                    "url_descarga": "/documentos/descargar/d1",
                }],
            }),
        );

        let docs = service(&api).list_documents("tok").await.unwrap();

        assert_eq!(docs.proposal_number, "PROP-2024-001");
        assert_eq!(docs.documents.len(), 1);
        assert!(!docs.documents[0].awaits_signature());
    }
}
