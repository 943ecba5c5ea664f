//! Response types returned by the portal server
//!
//! Mutating endpoints answer with a flat JSON object carrying a `success`
//! flag. Failures arrive with a non-2xx status and a body such as
//! `{"error": "Propuesta no encontrada"}`; the `success` field is simply
//! absent. [`ResponseResult`] turns either shape into a typed outcome.

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::types::{DocumentKind, ProposalStatus};

/// Message used when a failure body carries no `error` text
pub const UNKNOWN_ERROR: &str = "Error desconocido";

// =============================================================================
// Response Result
// =============================================================================

/// Outcome of a mutating request
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseResult<T> {
    /// `success: true`, payload decoded from the same object
    Success(T),
    /// `success` false or missing
    Failure { error: String },
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    error: Option<String>,
}

impl<T: DeserializeOwned> ResponseResult<T> {
    /// Decode a response body.
    ///
    /// The payload is only decoded when `success` is true, so failure bodies
    /// never need to carry the success fields.
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        let envelope = Envelope::deserialize(&value)?;
        if envelope.success {
            serde_json::from_value(value).map(ResponseResult::Success)
        } else {
            Ok(ResponseResult::Failure {
                error: envelope.error.unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
            })
        }
    }
}

impl<T> ResponseResult<T> {
    /// Convert into a std `Result` with the server error text
    pub fn into_result(self) -> Result<T, String> {
        match self {
            ResponseResult::Success(data) => Ok(data),
            ResponseResult::Failure { error } => Err(error),
        }
    }
}

// =============================================================================
// Director endpoints
// =============================================================================

/// Payload of a successful `POST /propuestas/{id}/enviar`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendProposalResponse {
    /// Public link to the client portal
    #[serde(rename = "enlace")]
    pub link: String,
    /// ISO-8601 expiry of the link (24h after sending)
    #[serde(rename = "fecha_expiracion")]
    pub expires_at: String,
    #[serde(rename = "documento_id", default)]
    pub document_id: Option<String>,
}

/// Payload of a successful `POST /propuestas/{id}/modificar`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModifyProposalResponse {
    #[serde(rename = "nueva_version")]
    pub new_version: u32,
    #[serde(rename = "precio_final", default)]
    pub final_price: Option<f64>,
    /// Human-readable change log lines
    #[serde(rename = "cambios", default)]
    pub changes: Vec<String>,
}

// =============================================================================
// Client endpoints
// =============================================================================

/// Payload of a successful `POST /cliente/respuesta/{token}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientResponseAck {
    #[serde(rename = "mensaje")]
    pub message: String,
    #[serde(rename = "contrato_generado", default)]
    pub contract_generated: bool,
    #[serde(rename = "contrato_id", default)]
    pub contract_id: Option<String>,
    /// Set when the decision was stored but the contract could not be rendered
    #[serde(rename = "error_contrato", default)]
    pub contract_error: Option<String>,
}

/// Payload of a successful `POST /cliente/firmar/{token}/{documento_id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignContractResponse {
    #[serde(rename = "mensaje")]
    pub message: String,
    #[serde(rename = "fecha_firma")]
    pub signed_at: String,
    #[serde(rename = "contrato_id")]
    pub contract_id: String,
    #[serde(rename = "url_ver", default)]
    pub view_url: Option<String>,
    #[serde(rename = "url_descarga", default)]
    pub download_url: Option<String>,
}

/// One generated document, as listed by `GET /cliente/documentos/{token}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub id: String,
    #[serde(rename = "tipo")]
    pub kind: DocumentKind,
    pub version: u32,
    #[serde(rename = "fecha")]
    pub generated_at: String,
    /// Only meaningful for contracts
    #[serde(rename = "firmado", default)]
    pub signed: Option<bool>,
    #[serde(rename = "fecha_firma", default)]
    pub signed_at: Option<String>,
    #[serde(rename = "url_ver")]
    pub view_url: String,
    #[serde(rename = "url_descarga")]
    pub download_url: String,
}

impl DocumentSummary {
    /// Whether this document is a contract still waiting for a signature
    pub fn awaits_signature(&self) -> bool {
        self.kind == DocumentKind::Contract && self.signed != Some(true)
    }
}

/// Body of `GET /cliente/documentos/{token}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientDocuments {
    #[serde(rename = "propuesta_numero")]
    pub proposal_number: String,
    #[serde(rename = "documentos", default)]
    pub documents: Vec<DocumentSummary>,
}

// =============================================================================
// Reporting endpoints
// =============================================================================

/// Body of `GET /api/propuestas/estadisticas`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalStatistics {
    pub total: u64,
    pub pregeneradas: u64,
    pub enviadas: u64,
    pub aceptadas: u64,
    pub rechazadas: u64,
    pub revision: u64,
    #[serde(default)]
    pub contratos_firmados: u64,
}

impl ProposalStatistics {
    /// Count for a single status
    pub fn count(&self, status: ProposalStatus) -> u64 {
        match status {
            ProposalStatus::Pregenerada => self.pregeneradas,
            ProposalStatus::Enviada => self.enviadas,
            ProposalStatus::Aceptada => self.aceptadas,
            ProposalStatus::Rechazada => self.rechazadas,
            ProposalStatus::Revision => self.revision,
            ProposalStatus::Unknown => 0,
        }
    }

    /// Share of answered proposals that were accepted, in percent
    pub fn acceptance_rate(&self) -> Option<f64> {
        let answered = self.aceptadas + self.rechazadas;
        if answered == 0 {
            return None;
        }
        Some(self.aceptadas as f64 * 100.0 / answered as f64)
    }
}

/// One entry of `GET /api/clientes`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSummary {
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    pub email: String,
    #[serde(rename = "telefono", default)]
    pub phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_body_decodes_payload() {
        let body = json!({
            "success": true,
            "enlace": "http://portal/cliente/propuesta/tok",
            "fecha_expiracion": "2024-01-06T10:00:00",
        });
        let result = ResponseResult::<SendProposalResponse>::from_value(body).unwrap();
        match result {
            ResponseResult::Success(data) => {
                assert_eq!(data.link, "http://portal/cliente/propuesta/tok");
                assert_eq!(data.document_id, None);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn error_body_without_success_is_failure() {
        let body = json!({ "error": "Propuesta no encontrada" });
        let result = ResponseResult::<ModifyProposalResponse>::from_value(body).unwrap();
        assert_eq!(
            result,
            ResponseResult::Failure {
                error: "Propuesta no encontrada".into()
            }
        );
    }

    #[test]
    fn failure_without_text_uses_fallback() {
        let result = ResponseResult::<ClientResponseAck>::from_value(json!({ "success": false }))
            .unwrap();
        assert_eq!(result.into_result(), Err(UNKNOWN_ERROR.to_string()));
    }

    #[test]
    fn success_with_missing_fields_is_a_decode_error() {
        let body = json!({ "success": true });
        assert!(ResponseResult::<ModifyProposalResponse>::from_value(body).is_err());
    }

    #[test]
    fn statistics_acceptance_rate() {
        let stats = ProposalStatistics {
            aceptadas: 3,
            rechazadas: 1,
            ..Default::default()
        };
        assert_eq!(stats.acceptance_rate(), Some(75.0));
        assert_eq!(ProposalStatistics::default().acceptance_rate(), None);
        assert_eq!(stats.count(ProposalStatus::Aceptada), 3);
    }

    #[test]
    fn unsigned_contract_awaits_signature() {
        let doc: DocumentSummary = serde_json::from_value(json!({
            "id": "d1",
            "tipo": "CONTRATO",
            "version": 1,
            "fecha": "2024-01-05T10:00:00",
            "firmado": false,
            "fecha_firma": null,
            "url_ver": "/documentos/ver/d1",
            "url_descarga": "/documentos/descargar/d1",
        }))
        .unwrap();
        assert!(doc.awaits_signature());
    }
}
