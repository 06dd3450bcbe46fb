//! Port contracts for public agent creation and invite generation.
//!
//! Ports define infrastructure-agnostic interfaces injected into
//! [`PublicAgentService`](crate::agent::services::PublicAgentService).

pub mod backend;
pub mod logger;
pub mod store;

pub use backend::{AgentBackendError, AgentBackendResult, IdentityAgentBackend, PublicAgent};
pub use logger::ServiceLogger;
pub use store::{AgentStore, AgentStoreError, AgentStoreResult};
