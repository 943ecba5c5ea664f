//! Service layer error types
//!
//! This module defines errors that can occur in the application service layer,
//! abstracting over the HTTP transport.

use mgcp_shared::ResponseResult;

use crate::ports::outbound::ApiError;

/// Errors that can occur in service operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ServiceError {
    /// The server answered but refused the operation (`success: false`)
    #[error("{0}")]
    Rejected(String),
    /// Network or decoding failure
    #[error(transparent)]
    Transport(#[from] ApiError),
    /// The request failed local validation and was never sent
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ServiceError {
    /// Whether the failure happened below the application protocol
    pub fn is_transport(&self) -> bool {
        matches!(self, ServiceError::Transport(_))
    }
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(e: validator::ValidationErrors) -> Self {
        ServiceError::InvalidRequest(e.to_string())
    }
}

/// Helper trait for turning a decoded envelope into a service result
pub trait IntoServiceResult<T> {
    fn into_service_result(self) -> Result<T, ServiceError>;
}

impl<T> IntoServiceResult<T> for ResponseResult<T> {
    fn into_service_result(self) -> Result<T, ServiceError> {
        self.into_result().map_err(ServiceError::Rejected)
    }
}
