//! Routed pages

pub mod client_portal;
pub mod dashboard;
pub mod not_found;
pub mod proposal;

pub use client_portal::ClientPortalView;
pub use dashboard::DashboardView;
pub use not_found::NotFound;
pub use proposal::ProposalView;
