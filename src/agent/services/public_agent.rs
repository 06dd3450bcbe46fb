//! Service layer for public agent creation and invite generation.
//!
//! Provides [`PublicAgentService`], a pass-through adapter over an identity
//! backend and an agent store. Every collaborator failure reaches the caller
//! unchanged; the service performs no retries and no rollback.

use crate::agent::{
    domain::{AgentDomainError, AgentId, InstitutionDid, Invite, InviteLabel},
    ports::{
        AgentBackendError, AgentStore, AgentStoreError, IdentityAgentBackend, PublicAgent,
        ServiceLogger,
    },
};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for public agent operations.
///
/// Each variant records which step failed and carries the collaborator error
/// as-is.
#[derive(Debug, Error)]
pub enum PublicAgentServiceError {
    /// Input validation failed before any collaborator was called.
    #[error(transparent)]
    Domain(#[from] AgentDomainError),
    /// The backend failed to create the agent; nothing was saved.
    #[error(transparent)]
    Creation(AgentBackendError),
    /// The store failed to save or load the agent.
    #[error(transparent)]
    Persistence(#[from] AgentStoreError),
    /// The loaded agent failed to render an invite.
    #[error(transparent)]
    InviteGeneration(AgentBackendError),
}

impl PublicAgentServiceError {
    /// Returns `true` when the store reported that no agent exists.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Persistence(AgentStoreError::NotFound(_)))
    }
}

/// Result type for public agent service operations.
pub type PublicAgentServiceResult<T> = Result<T, PublicAgentServiceError>;

/// Public agent orchestration service.
#[derive(Clone)]
pub struct PublicAgentService<B, S, L>
where
    B: IdentityAgentBackend,
    S: AgentStore<Agent = B::Agent>,
    L: ServiceLogger,
{
    backend: Arc<B>,
    store: Arc<S>,
    logger: Arc<L>,
}

impl<B, S, L> PublicAgentService<B, S, L>
where
    B: IdentityAgentBackend,
    S: AgentStore<Agent = B::Agent>,
    L: ServiceLogger,
{
    /// Creates a new public agent service.
    #[must_use]
    pub const fn new(backend: Arc<B>, store: Arc<S>, logger: Arc<L>) -> Self {
        Self {
            backend,
            store,
            logger,
        }
    }

    /// Creates a public agent for `institution_did` and saves it under
    /// `agent_id`.
    ///
    /// The returned agent is the value that was handed to the store, so it
    /// can be used without reloading. If saving fails the backend-side agent
    /// is left in place and a warning names it.
    ///
    /// # Errors
    ///
    /// Returns [`PublicAgentServiceError::Domain`] for empty inputs,
    /// [`PublicAgentServiceError::Creation`] when the backend rejects the
    /// DID (no save is attempted), or
    /// [`PublicAgentServiceError::Persistence`] when saving fails.
    pub async fn public_agent_create(
        &self,
        agent_id: &str,
        institution_did: &str,
    ) -> PublicAgentServiceResult<B::Agent> {
        let id = AgentId::new(agent_id)?;
        let did = InstitutionDid::new(institution_did)?;

        self.logger.info(&format!(
            "Creating public agent with id {id} for institution did {did}"
        ));

        let agent = self
            .backend
            .create_agent(&did)
            .await
            .map_err(PublicAgentServiceError::Creation)?;

        if let Err(err) = self.store.save(&id, &agent).await {
            self.logger.warn(&format!(
                "Public agent with id {id} for institution did {did} was created but not saved: {err}"
            ));
            return Err(err.into());
        }

        Ok(agent)
    }

    /// Renders a public invite labelled `label` from the agent saved under
    /// `agent_id`.
    ///
    /// The agent is loaded on every call and the invite is never cached.
    ///
    /// # Errors
    ///
    /// Returns [`PublicAgentServiceError::Domain`] for an empty id,
    /// [`PublicAgentServiceError::Persistence`] when loading fails (including
    /// [`AgentStoreError::NotFound`]), or
    /// [`PublicAgentServiceError::InviteGeneration`] when the agent rejects
    /// the request.
    pub async fn get_public_invite(
        &self,
        agent_id: &str,
        label: &str,
    ) -> PublicAgentServiceResult<Invite> {
        let id = AgentId::new(agent_id)?;
        let invite_label = InviteLabel::new(label);

        self.logger.info(&format!(
            "Public agent with id {id} is creating public invite with label {invite_label}"
        ));

        let agent = self.store.load(&id).await?;
        agent
            .create_public_invite(&invite_label)
            .await
            .map_err(PublicAgentServiceError::InviteGeneration)
    }
}
