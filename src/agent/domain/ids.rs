//! Identifier types for the public agent domain.

use super::AgentDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller-chosen key under which a public agent is persisted.
///
/// The value is opaque to the service. Uniqueness is a concern of the
/// [`AgentStore`](crate::agent::ports::AgentStore) implementation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(String);

impl AgentId {
    /// Creates an agent identifier.
    ///
    /// The value is kept exactly as given, surrounding whitespace included.
    ///
    /// # Errors
    ///
    /// Returns [`AgentDomainError::EmptyAgentId`] when the value is empty
    /// or whitespace only.
    pub fn new(value: impl Into<String>) -> Result<Self, AgentDomainError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(AgentDomainError::EmptyAgentId);
        }
        Ok(Self(value))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AgentId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
