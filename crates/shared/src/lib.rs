//! MGCP Shared - Wire contract for the proposal portal
//!
//! This crate contains the types exchanged between the portal server and
//! its clients:
//! - Endpoint paths (`paths`)
//! - Request bodies (`requests`)
//! - Response envelopes and payloads (`responses`)
//! - Shared vocabulary enums (`types`)
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, serde_json and validator
//! 2. **No business logic** - Pure data types and serialization
//! 3. **WASM compatible** - Must compile for both native and wasm32 targets
//! 4. **Server field names** - Wire names follow the server (`utilidad_porcentaje`,
//!    `comentarios`, ...) while Rust names stay English where we own them

pub mod paths;
pub mod requests;
pub mod responses;
pub mod types;

pub use requests::{ClientResponseRequest, ModifyProposalRequest, SignContractRequest};
pub use responses::{
    ClientDocuments, ClientResponseAck, ClientSummary, DocumentSummary, ModifyProposalResponse,
    ProposalStatistics, ResponseResult, SendProposalResponse, SignContractResponse,
};
pub use types::{DecisionType, DocumentKind, ProposalStatus};
