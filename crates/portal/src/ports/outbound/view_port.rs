//! View Port - response-driven view refresh
//!
//! After a successful mutation the affected view is updated from the
//! server's answer instead of reloading the whole page.

use mgcp_shared::DecisionType;

/// What changed, as reported by the server
#[derive(Debug, Clone, PartialEq)]
pub enum ViewUpdate {
    ProposalSent {
        proposal_id: String,
        link: String,
        expires_at: String,
    },
    ProposalResent {
        proposal_id: String,
        link: String,
        expires_at: String,
    },
    ProposalModified {
        proposal_id: String,
        new_version: u32,
        final_price: Option<f64>,
        changes: Vec<String>,
    },
    ResponseRecorded {
        token: String,
        decision: DecisionType,
        message: String,
        contract_id: Option<String>,
    },
    ContractSigned {
        token: String,
        contract_id: String,
        signed_at: String,
        view_url: Option<String>,
        download_url: Option<String>,
    },
}

impl ViewUpdate {
    /// Proposal id for director-side updates
    pub fn proposal_id(&self) -> Option<&str> {
        match self {
            ViewUpdate::ProposalSent { proposal_id, .. }
            | ViewUpdate::ProposalResent { proposal_id, .. }
            | ViewUpdate::ProposalModified { proposal_id, .. } => Some(proposal_id),
            _ => None,
        }
    }

    /// Response token for client-side updates
    pub fn token(&self) -> Option<&str> {
        match self {
            ViewUpdate::ResponseRecorded { token, .. } | ViewUpdate::ContractSigned { token, .. } => {
                Some(token)
            }
            _ => None,
        }
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait ViewPort: Send + Sync {
    fn refresh(&self, update: ViewUpdate);
}
