//! JSON file agent store backed by a capability-scoped directory.
//!
//! Each agent is written to `<agent-id>.json`. Ids containing anything other
//! than ASCII letters, digits, `-` and `_` are hex encoded as
//! `<hex>.hex.json` instead. Plain names never contain a dot, so the two
//! forms cannot collide. Writes land in a temporary file first and are
//! renamed into place, so readers never observe a partially written agent.

use async_trait::async_trait;
use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8::Dir};
use serde::{Serialize, de::DeserializeOwned};
use std::io;
use std::marker::PhantomData;
use std::sync::Arc;
use uuid::Uuid;

use crate::agent::{
    domain::AgentId,
    ports::{AgentStore, AgentStoreError, AgentStoreResult},
};

/// Agent store persisting serialized agents as JSON files.
#[derive(Debug)]
pub struct JsonFileAgentStore<A> {
    dir: Arc<Dir>,
    agent: PhantomData<fn() -> A>,
}

impl<A> JsonFileAgentStore<A> {
    /// Opens the store rooted at `path`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`AgentStoreError::Persistence`] when the directory cannot be
    /// created or opened.
    pub fn open(path: &Utf8Path) -> AgentStoreResult<Self> {
        Dir::create_ambient_dir_all(path, ambient_authority())
            .map_err(AgentStoreError::persistence)?;
        let dir =
            Dir::open_ambient_dir(path, ambient_authority()).map_err(AgentStoreError::persistence)?;
        Ok(Self::from_dir(dir))
    }

    /// Wraps an already opened directory.
    #[must_use]
    pub fn from_dir(dir: Dir) -> Self {
        Self {
            dir: Arc::new(dir),
            agent: PhantomData,
        }
    }
}

impl<A> Clone for JsonFileAgentStore<A> {
    fn clone(&self) -> Self {
        Self {
            dir: Arc::clone(&self.dir),
            agent: PhantomData,
        }
    }
}

/// Maps an agent id onto a single safe file name.
fn file_name_for(agent_id: &AgentId) -> String {
    let raw = agent_id.as_str();
    let is_plain = raw
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'));
    if is_plain {
        format!("{raw}.json")
    } else {
        format!("{}.hex.json", hex::encode(raw))
    }
}

async fn run_blocking<F, T>(f: F) -> AgentStoreResult<T>
where
    F: FnOnce() -> AgentStoreResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(AgentStoreError::persistence)?
}

#[async_trait]
impl<A> AgentStore for JsonFileAgentStore<A>
where
    A: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    type Agent = A;

    async fn save(&self, agent_id: &AgentId, agent: &A) -> AgentStoreResult<()> {
        let file_name = file_name_for(agent_id);
        let bytes = serde_json::to_vec_pretty(agent).map_err(AgentStoreError::persistence)?;
        let dir = Arc::clone(&self.dir);

        run_blocking(move || {
            let temp_name = format!(".{file_name}.{}.tmp", Uuid::new_v4());
            dir.write(&temp_name, bytes)
                .map_err(AgentStoreError::persistence)?;
            dir.rename(&temp_name, &dir, &file_name).map_err(|err| {
                let _cleanup = dir.remove_file(&temp_name);
                AgentStoreError::persistence(err)
            })
        })
        .await
    }

    async fn load(&self, agent_id: &AgentId) -> AgentStoreResult<A> {
        let file_name = file_name_for(agent_id);
        let dir = Arc::clone(&self.dir);
        let missing_id = agent_id.clone();

        let contents = run_blocking(move || match dir.read_to_string(&file_name) {
            Ok(contents) => Ok(contents),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(AgentStoreError::NotFound(missing_id))
            }
            Err(err) => Err(AgentStoreError::persistence(err)),
        })
        .await?;

        serde_json::from_str(&contents).map_err(AgentStoreError::invalid_persisted_data)
    }
}
