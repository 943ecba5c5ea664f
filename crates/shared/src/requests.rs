//! Request bodies sent to the portal server

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::DecisionType;

/// Lowest margin the portal accepts, in percent
pub const MIN_MARGIN_PERCENT: f64 = 25.0;

/// Highest margin the portal accepts, in percent
pub const MAX_MARGIN_PERCENT: f64 = 35.0;

/// Body of `POST /propuestas/{id}/modificar`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ModifyProposalRequest {
    #[serde(rename = "utilidad_porcentaje")]
    #[validate(range(min = 25.0, max = 35.0))]
    pub margin_percent: f64,
    #[serde(rename = "usuario_director")]
    #[validate(length(min = 1))]
    pub director: String,
}

impl ModifyProposalRequest {
    pub fn new(margin_percent: f64, director: impl Into<String>) -> Self {
        Self {
            margin_percent,
            director: director.into(),
        }
    }
}

/// Body of `POST /cliente/respuesta/{token}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientResponseRequest {
    #[serde(rename = "tipo")]
    pub decision: DecisionType,
    #[serde(rename = "comentarios")]
    pub comments: String,
}

/// Body of `POST /cliente/firmar/{token}/{documento_id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignContractRequest {
    #[serde(rename = "firma")]
    pub signature: String,
}
