//! Domain model for public agents.
//!
//! Agent handles themselves are backend-owned and opaque; the domain only
//! models the identifiers and values that cross the service boundary.

mod did;
mod error;
mod ids;
mod invite;
mod label;

pub use did::InstitutionDid;
pub use error::AgentDomainError;
pub use ids::AgentId;
pub use invite::Invite;
pub use label::InviteLabel;
