//! Agent store selected from [`StoreConfig`].

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};

use super::{JsonFileAgentStore, memory::InMemoryAgentStore};
use crate::{
    agent::{
        domain::AgentId,
        ports::{AgentStore, AgentStoreResult},
    },
    config::StoreConfig,
};

/// Agent store whose backing is chosen at runtime.
#[derive(Debug, Clone)]
pub enum ConfiguredAgentStore<A> {
    /// Process-local store.
    Memory(InMemoryAgentStore<A>),
    /// Directory of JSON files.
    JsonFile(JsonFileAgentStore<A>),
}

impl<A> ConfiguredAgentStore<A> {
    /// Builds the store described by `config`.
    ///
    /// # Errors
    ///
    /// Returns persistence errors when a JSON-file directory cannot be
    /// opened.
    pub fn from_config(config: &StoreConfig) -> AgentStoreResult<Self> {
        match config {
            StoreConfig::Memory => Ok(Self::Memory(InMemoryAgentStore::new())),
            StoreConfig::JsonFile { directory } => {
                Ok(Self::JsonFile(JsonFileAgentStore::open(directory)?))
            }
        }
    }
}

#[async_trait]
impl<A> AgentStore for ConfiguredAgentStore<A>
where
    A: Clone + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    type Agent = A;

    async fn save(&self, agent_id: &AgentId, agent: &A) -> AgentStoreResult<()> {
        match self {
            Self::Memory(store) => store.save(agent_id, agent).await,
            Self::JsonFile(store) => store.save(agent_id, agent).await,
        }
    }

    async fn load(&self, agent_id: &AgentId) -> AgentStoreResult<A> {
        match self {
            Self::Memory(store) => store.load(agent_id).await,
            Self::JsonFile(store) => store.load(agent_id).await,
        }
    }
}
