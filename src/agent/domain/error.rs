//! Error types for public agent domain validation.

use thiserror::Error;

/// Errors returned while constructing public agent domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AgentDomainError {
    /// The agent identifier is empty or whitespace only.
    #[error("agent id must not be empty")]
    EmptyAgentId,

    /// The institution DID is empty or whitespace only.
    #[error("institution DID must not be empty")]
    EmptyInstitutionDid,
}
