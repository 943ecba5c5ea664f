//! Shared vocabulary enums
//!
//! Wire values are the server's upper-case Spanish identifiers.

use serde::{Deserialize, Serialize};

/// Decision a client records against a proposal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecisionType {
    #[serde(rename = "ACEPTADA")]
    Accepted,
    #[serde(rename = "RECHAZADA")]
    Rejected,
    #[serde(rename = "NEGOCIACION")]
    Negotiation,
}

impl DecisionType {
    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionType::Accepted => "ACEPTADA",
            DecisionType::Rejected => "RECHAZADA",
            DecisionType::Negotiation => "NEGOCIACION",
        }
    }

    /// Whether the decision needs non-empty comments
    pub fn requires_comments(&self) -> bool {
        !matches!(self, DecisionType::Accepted)
    }
}

impl std::fmt::Display for DecisionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of a proposal as reported by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProposalStatus {
    Pregenerada,
    Enviada,
    Revision,
    Aceptada,
    Rechazada,
    /// Unknown status for forward compatibility
    #[serde(other)]
    Unknown,
}

impl ProposalStatus {
    /// Badge style used by the portal views
    pub fn badge(&self) -> &'static str {
        match self {
            ProposalStatus::Pregenerada => "secondary",
            ProposalStatus::Enviada => "warning",
            ProposalStatus::Aceptada => "success",
            ProposalStatus::Rechazada => "danger",
            ProposalStatus::Revision => "info",
            ProposalStatus::Unknown => "secondary",
        }
    }

    /// Whether the director may still send this proposal
    pub fn is_sendable(&self) -> bool {
        matches!(self, ProposalStatus::Pregenerada | ProposalStatus::Revision)
    }
}

/// Kind of generated document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentKind {
    #[serde(rename = "PROPUESTA")]
    Proposal,
    #[serde(rename = "CONTRATO")]
    Contract,
    #[serde(other)]
    Other,
}

impl DocumentKind {
    /// Label shown next to a document
    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Proposal => "Propuesta",
            DocumentKind::Contract => "Contrato",
            DocumentKind::Other => "Documento",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decision_serializes_to_server_identifiers() {
        let json = serde_json::to_string(&DecisionType::Negotiation).unwrap();
        assert_eq!(json, "\"NEGOCIACION\"");
        assert_eq!(DecisionType::Accepted.to_string(), "ACEPTADA");
    }

    #[test]
    fn only_acceptance_allows_empty_comments() {
        assert!(!DecisionType::Accepted.requires_comments());
        assert!(DecisionType::Rejected.requires_comments());
        assert!(DecisionType::Negotiation.requires_comments());
    }

    #[test]
    fn unknown_status_falls_back() {
        let status: ProposalStatus = serde_json::from_str("\"ARCHIVADA\"").unwrap();
        assert_eq!(status, ProposalStatus::Unknown);
        let status: ProposalStatus = serde_json::from_str("\"REVISION\"").unwrap();
        assert_eq!(status, ProposalStatus::Revision);
        assert!(status.is_sendable());
        assert_eq!(ProposalStatus::Aceptada.badge(), "success");
    }
}
