//! Institution DID value type.

use super::AgentDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Decentralized identifier of the institution a public agent acts for.
///
/// Only emptiness is checked here. Whether the DID is well formed or
/// resolvable is decided by the identity backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstitutionDid(String);

impl InstitutionDid {
    /// Creates an institution DID.
    ///
    /// # Errors
    ///
    /// Returns [`AgentDomainError::EmptyInstitutionDid`] when the value is
    /// empty or whitespace only.
    pub fn new(value: impl Into<String>) -> Result<Self, AgentDomainError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(AgentDomainError::EmptyInstitutionDid);
        }
        Ok(Self(value))
    }

    /// Returns the DID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for InstitutionDid {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for InstitutionDid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
