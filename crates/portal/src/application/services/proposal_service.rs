//! Proposal Service - director-side operations on a proposal

use validator::Validate;

use mgcp_shared::{paths, ModifyProposalRequest, ModifyProposalResponse, SendProposalResponse};

use crate::application::error::IntoServiceResult;
use crate::application::{Api, ServiceError};

/// Sends and modifies proposals on behalf of the director
#[derive(Clone)]
pub struct ProposalService {
    api: Api,
}

impl ProposalService {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    /// Send (or resend) a proposal to its client.
    ///
    /// The server generates the document, opens a 24h link and answers with
    /// the link and its expiry.
    pub async fn send(&self, proposal_id: &str) -> Result<SendProposalResponse, ServiceError> {
        tracing::debug!(proposal_id = %proposal_id, "Sending proposal");
        self.api
            .post_empty(&paths::send_proposal(proposal_id))
            .await?
            .into_service_result()
    }

    /// Change the margin of a proposal, creating a new version server-side
    pub async fn modify(
        &self,
        proposal_id: &str,
        margin_percent: f64,
        director: &str,
    ) -> Result<ModifyProposalResponse, ServiceError> {
        let request = ModifyProposalRequest::new(margin_percent, director);
        request.validate()?;

        tracing::debug!(
            proposal_id = %proposal_id,
            margin_percent,
            "Modifying proposal margin"
        );
        self.api
            .post(&paths::modify_proposal(proposal_id), &request)
            .await?
            .into_service_result()
    }
}
