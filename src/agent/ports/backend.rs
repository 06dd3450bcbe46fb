//! Identity backend port for agent creation and invite rendering.

use crate::agent::domain::{InstitutionDid, Invite, InviteLabel};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for identity backend operations.
pub type AgentBackendResult<T> = Result<T, AgentBackendError>;

/// Backend contract for creating agents bound to an institutional DID.
#[async_trait]
pub trait IdentityAgentBackend: Send + Sync {
    /// Agent handle produced by this backend.
    type Agent: PublicAgent;

    /// Creates a new agent acting for `institution_did`.
    ///
    /// # Errors
    ///
    /// Returns [`AgentBackendError::InvalidDid`] or
    /// [`AgentBackendError::UnresolvableDid`] when the DID is rejected, and
    /// transport or backend errors otherwise.
    async fn create_agent(
        &self,
        institution_did: &InstitutionDid,
    ) -> AgentBackendResult<Self::Agent>;
}

/// The one capability the service uses on a created agent.
#[async_trait]
pub trait PublicAgent: Send + Sync {
    /// Renders a public invite carrying `label`.
    ///
    /// Each call derives a fresh invite; determinism is backend-defined.
    ///
    /// # Errors
    ///
    /// Returns [`AgentBackendError::InviteRejected`] when the backend refuses
    /// the label, and transport or backend errors otherwise.
    async fn create_public_invite(&self, label: &InviteLabel) -> AgentBackendResult<Invite>;
}

/// Errors returned by identity backend adapters.
#[derive(Debug, Clone, Error)]
pub enum AgentBackendError {
    /// The DID is not syntactically valid for this backend.
    #[error("invalid DID '{did}': {reason}")]
    InvalidDid {
        /// DID as supplied.
        did: InstitutionDid,
        /// Reason string.
        reason: String,
    },

    /// The DID could not be resolved in the identity system.
    #[error("DID could not be resolved: {0}")]
    UnresolvableDid(InstitutionDid),

    /// The backend refused to render an invite.
    #[error("invite rejected: {0}")]
    InviteRejected(String),

    /// Network or transport failure reaching the backend.
    #[error("identity backend transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// Backend-internal failure.
    #[error("identity backend error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl AgentBackendError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Wraps a backend-internal error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
