//! Application services
//!
//! Thin use-case wrappers over the REST endpoints. They translate wire
//! envelopes into `Result<_, ServiceError>` and leave user interaction
//! (dialogs, toasts, view refresh) to `PortalActions`.

pub mod client_response_service;
pub mod proposal_service;
pub mod report_service;

pub use client_response_service::ClientResponseService;
pub use proposal_service::ProposalService;
pub use report_service::ReportService;
