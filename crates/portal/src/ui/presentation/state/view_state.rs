//! View state fed by `ViewUpdate`s
//!
//! Successful actions do not reload the page. The server response is folded
//! into a per-proposal (director) or per-token (client) snapshot that the
//! views render from.

use dioxus::prelude::*;
use std::collections::HashMap;

use mgcp_shared::{DecisionType, ProposalStatus};

use crate::ports::outbound::ViewUpdate;

/// What the director page knows about one proposal
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProposalSnapshot {
    pub status: Option<ProposalStatus>,
    pub link: Option<String>,
    pub expires_at: Option<String>,
    pub version: Option<u32>,
    pub final_price: Option<f64>,
    pub changes: Vec<String>,
    /// Modified since it was last sent
    pub needs_resend: bool,
}

/// Signed contract details
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedContract {
    pub contract_id: String,
    pub signed_at: String,
    pub view_url: Option<String>,
    pub download_url: Option<String>,
}

/// What the client page knows about one response token
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientSnapshot {
    pub decision: Option<DecisionType>,
    pub message: Option<String>,
    pub contract_id: Option<String>,
    pub signed: Vec<SignedContract>,
    /// Bumped on every update so the document list reloads
    pub revision: u32,
}

impl ClientSnapshot {
    /// The client already answered and cannot answer again
    pub fn is_closed(&self) -> bool {
        matches!(
            self.decision,
            Some(DecisionType::Accepted) | Some(DecisionType::Rejected)
        )
    }
}

/// All snapshots, keyed by proposal id and by token
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortalSnapshot {
    pub proposals: HashMap<String, ProposalSnapshot>,
    pub clients: HashMap<String, ClientSnapshot>,
}

impl PortalSnapshot {
    pub fn apply(&mut self, update: ViewUpdate) {
        match update {
            ViewUpdate::ProposalSent {
                proposal_id,
                link,
                expires_at,
            }
            | ViewUpdate::ProposalResent {
                proposal_id,
                link,
                expires_at,
            } => {
                let proposal = self.proposals.entry(proposal_id).or_default();
                proposal.status = Some(ProposalStatus::Enviada);
                proposal.link = Some(link);
                proposal.expires_at = Some(expires_at);
                proposal.needs_resend = false;
            }
            ViewUpdate::ProposalModified {
                proposal_id,
                new_version,
                final_price,
                changes,
            } => {
                let proposal = self.proposals.entry(proposal_id).or_default();
                proposal.version = Some(new_version);
                proposal.final_price = final_price;
                proposal.changes = changes;
                proposal.needs_resend = true;
            }
            ViewUpdate::ResponseRecorded {
                token,
                decision,
                message,
                contract_id,
            } => {
                let client = self.clients.entry(token).or_default();
                client.decision = Some(decision);
                client.message = Some(message);
                client.contract_id = contract_id;
                client.revision += 1;
            }
            ViewUpdate::ContractSigned {
                token,
                contract_id,
                signed_at,
                view_url,
                download_url,
            } => {
                let client = self.clients.entry(token).or_default();
                client.signed.push(SignedContract {
                    contract_id,
                    signed_at,
                    view_url,
                    download_url,
                });
                client.revision += 1;
            }
        }
    }

    pub fn proposal(&self, proposal_id: &str) -> ProposalSnapshot {
        self.proposals.get(proposal_id).cloned().unwrap_or_default()
    }

    pub fn client(&self, token: &str) -> ClientSnapshot {
        self.clients.get(token).cloned().unwrap_or_default()
    }
}

/// Reactive wrapper shared through context
#[derive(Clone, Copy)]
pub struct ViewState {
    pub snapshot: Signal<PortalSnapshot>,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            snapshot: Signal::new(PortalSnapshot::default()),
        }
    }

    pub fn apply(&mut self, update: ViewUpdate) {
        tracing::debug!(?update, "Applying view update");
        self.snapshot.write().apply(update);
    }

    pub fn proposal(&self, proposal_id: &str) -> ProposalSnapshot {
        self.snapshot.read().proposal(proposal_id)
    }

    pub fn client(&self, token: &str) -> ClientSnapshot {
        self.snapshot.read().client(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modification_then_resend_clears_flag() {
        let mut snapshot = PortalSnapshot::default();

        snapshot.apply(ViewUpdate::ProposalModified {
            proposal_id: "p-1".into(),
            new_version: 2,
            final_price: Some(1_500_000.0),
            changes: vec!["Utilidad: 30.0% → 28.0%".into()],
        });
        assert!(snapshot.proposal("p-1").needs_resend);
        assert_eq!(snapshot.proposal("p-1").version, Some(2));

        snapshot.apply(ViewUpdate::ProposalResent {
            proposal_id: "p-1".into(),
            link: "http://x/cliente/propuesta/t".into(),
            expires_at: "2024-01-06T10:00:00".into(),
        });
        let proposal = snapshot.proposal("p-1");
        assert!(!proposal.needs_resend);
        assert_eq!(proposal.status, Some(ProposalStatus::Enviada));
        assert_eq!(proposal.version, Some(2));
    }

    #[test]
    fn client_updates_bump_revision() {
        let mut snapshot = PortalSnapshot::default();

        snapshot.apply(ViewUpdate::ResponseRecorded {
            token: "t".into(),
            decision: DecisionType::Accepted,
            message: "Respuesta registrada como ACEPTADA".into(),
            contract_id: Some("c-1".into()),
        });
        snapshot.apply(ViewUpdate::ContractSigned {
            token: "t".into(),
            contract_id: "c-1".into(),
            signed_at: "2024-01-05T12:00:00".into(),
            view_url: None,
            download_url: None,
        });

        let client = snapshot.client("t");
        assert_eq!(client.revision, 2);
        assert!(client.is_closed());
        assert_eq!(client.signed.len(), 1);
    }

    #[test]
    fn negotiation_keeps_response_open() {
        let mut snapshot = PortalSnapshot::default();
        snapshot.apply(ViewUpdate::ResponseRecorded {
            token: "t".into(),
            decision: DecisionType::Negotiation,
            message: "ok".into(),
            contract_id: None,
        });

        assert!(!snapshot.client("t").is_closed());
        assert_eq!(snapshot.client("otro"), ClientSnapshot::default());
    }
}
