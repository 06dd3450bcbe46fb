//! Persistence port for public agent handles.

use crate::agent::domain::AgentId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for agent store operations.
pub type AgentStoreResult<T> = Result<T, AgentStoreError>;

/// Save/load contract for agent handles keyed by [`AgentId`].
///
/// # Implementation Notes
///
/// The service does not serialize concurrent calls for the same id.
/// Implementations decide between last-writer-wins and conflict detection.
#[async_trait]
pub trait AgentStore: Send + Sync {
    /// Agent handle type persisted by this store.
    type Agent: Send + Sync;

    /// Persists `agent` under `agent_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AgentStoreError`] when the agent cannot be written.
    async fn save(&self, agent_id: &AgentId, agent: &Self::Agent) -> AgentStoreResult<()>;

    /// Loads the agent stored under `agent_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AgentStoreError::NotFound`] when nothing is stored under the
    /// id, or other [`AgentStoreError`] variants when reading fails.
    async fn load(&self, agent_id: &AgentId) -> AgentStoreResult<Self::Agent>;
}

/// Errors returned by agent store implementations.
#[derive(Debug, Clone, Error)]
pub enum AgentStoreError {
    /// No agent is stored under the identifier.
    #[error("agent not found: {0}")]
    NotFound(AgentId),

    /// Persisted data could not be reconstructed into an agent handle.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl AgentStoreError {
    /// Wraps a data-quality or deserialization error from persisted records.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
