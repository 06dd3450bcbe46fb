//! In-memory agent store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::agent::{
    domain::AgentId,
    ports::{AgentStore, AgentStoreError, AgentStoreResult},
};

/// Thread-safe in-memory agent store.
///
/// Repeated saves under one id overwrite the previous agent.
#[derive(Debug)]
pub struct InMemoryAgentStore<A> {
    agents: Arc<RwLock<HashMap<AgentId, A>>>,
}

impl<A> InMemoryAgentStore<A> {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether an agent is stored under `agent_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AgentStoreError::Persistence`] when lock acquisition fails.
    pub fn contains(&self, agent_id: &AgentId) -> AgentStoreResult<bool> {
        let agents = self.agents.read().map_err(|err| {
            AgentStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(agents.contains_key(agent_id))
    }
}

impl<A> Default for InMemoryAgentStore<A> {
    fn default() -> Self {
        Self {
            agents: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl<A> Clone for InMemoryAgentStore<A> {
    fn clone(&self) -> Self {
        Self {
            agents: Arc::clone(&self.agents),
        }
    }
}

#[async_trait]
impl<A> AgentStore for InMemoryAgentStore<A>
where
    A: Clone + Send + Sync + 'static,
{
    type Agent = A;

    async fn save(&self, agent_id: &AgentId, agent: &A) -> AgentStoreResult<()> {
        let mut agents = self.agents.write().map_err(|err| {
            AgentStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        agents.insert(agent_id.clone(), agent.clone());
        Ok(())
    }

    async fn load(&self, agent_id: &AgentId) -> AgentStoreResult<A> {
        let agents = self.agents.read().map_err(|err| {
            AgentStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        agents
            .get(agent_id)
            .cloned()
            .ok_or_else(|| AgentStoreError::NotFound(agent_id.clone()))
    }
}
