//! In-memory identity backend.
//!
//! Models agent creation and public invite rendering without a ledger or
//! cloud agency. DIDs are checked for `did:<method>:<id>` syntax only.

use crate::agent::{
    domain::{InstitutionDid, Invite, InviteLabel},
    ports::{AgentBackendError, AgentBackendResult, IdentityAgentBackend, PublicAgent},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashSet;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// Message type of a rendered public connection invitation.
pub const PUBLIC_INVITATION_TYPE: &str = "https://didcomm.org/connections/1.0/invitation";

/// Agent handle produced by [`InMemoryIdentityBackend`].
///
/// Serializable so that file-backed stores can persist it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InMemoryPublicAgent {
    agent_ref: Uuid,
    institution_did: InstitutionDid,
    created_at: DateTime<Utc>,
}

impl InMemoryPublicAgent {
    /// Returns the backend-assigned agent reference.
    #[must_use]
    pub const fn agent_ref(&self) -> Uuid {
        self.agent_ref
    }

    /// Returns the DID the agent acts for.
    #[must_use]
    pub const fn institution_did(&self) -> &InstitutionDid {
        &self.institution_did
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[async_trait]
impl PublicAgent for InMemoryPublicAgent {
    async fn create_public_invite(&self, label: &InviteLabel) -> AgentBackendResult<Invite> {
        Ok(Invite::from_json(json!({
            "@type": PUBLIC_INVITATION_TYPE,
            "@id": Uuid::new_v4().to_string(),
            "label": label.as_str(),
            "did": self.institution_did.as_str(),
        })))
    }
}

/// Deterministic identity backend for tests and local flows.
#[derive(Debug)]
pub struct InMemoryIdentityBackend<C>
where
    C: Clock + Send + Sync,
{
    clock: Arc<C>,
    unresolvable: Arc<RwLock<HashSet<InstitutionDid>>>,
}

impl<C> InMemoryIdentityBackend<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a backend that stamps agents with `clock`.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self {
            clock,
            unresolvable: Arc::new(RwLock::new(HashSet::new())),
        }
    }

    /// Makes later creations for `did` fail as unresolvable.
    ///
    /// # Errors
    ///
    /// Returns [`AgentBackendError::Backend`] when lock acquisition fails.
    pub fn mark_unresolvable(&self, did: InstitutionDid) -> AgentBackendResult<()> {
        let mut unresolvable = self
            .unresolvable
            .write()
            .map_err(|err| AgentBackendError::backend(std::io::Error::other(err.to_string())))?;
        unresolvable.insert(did);
        Ok(())
    }

    fn ensure_resolvable(&self, did: &InstitutionDid) -> AgentBackendResult<()> {
        let unresolvable = self
            .unresolvable
            .read()
            .map_err(|err| AgentBackendError::backend(std::io::Error::other(err.to_string())))?;
        if unresolvable.contains(did) {
            return Err(AgentBackendError::UnresolvableDid(did.clone()));
        }
        Ok(())
    }
}

fn check_did_syntax(did: &InstitutionDid) -> AgentBackendResult<()> {
    let invalid = |reason: &str| AgentBackendError::InvalidDid {
        did: did.clone(),
        reason: reason.to_owned(),
    };

    let rest = did
        .as_str()
        .strip_prefix("did:")
        .ok_or_else(|| invalid("missing 'did:' scheme"))?;
    let (method, specific_id) = rest
        .split_once(':')
        .ok_or_else(|| invalid("missing method-specific identifier"))?;

    let method_is_valid = !method.is_empty()
        && method
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit());
    if !method_is_valid {
        return Err(invalid("method must be lowercase alphanumeric"));
    }
    if specific_id.is_empty() {
        return Err(invalid("method-specific identifier must not be empty"));
    }
    Ok(())
}

#[async_trait]
impl<C> IdentityAgentBackend for InMemoryIdentityBackend<C>
where
    C: Clock + Send + Sync,
{
    type Agent = InMemoryPublicAgent;

    async fn create_agent(
        &self,
        institution_did: &InstitutionDid,
    ) -> AgentBackendResult<InMemoryPublicAgent> {
        check_did_syntax(institution_did)?;
        self.ensure_resolvable(institution_did)?;
        Ok(InMemoryPublicAgent {
            agent_ref: Uuid::new_v4(),
            institution_did: institution_did.clone(),
            created_at: self.clock.utc(),
        })
    }
}
