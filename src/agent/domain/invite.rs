//! Shareable public invite produced by an identity backend.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Opaque invitation a third party can use to connect to a public agent.
///
/// The encoding belongs to the backend; the service hands the value back to
/// the caller without inspecting or persisting it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Invite(Value);

impl Invite {
    /// Wraps a backend-rendered invitation document.
    #[must_use]
    pub const fn from_json(value: Value) -> Self {
        Self(value)
    }

    /// Returns the invitation document.
    #[must_use]
    pub const fn as_json(&self) -> &Value {
        &self.0
    }

    /// Consumes the invite and returns the invitation document.
    #[must_use]
    pub fn into_json(self) -> Value {
        self.0
    }

    /// Returns the `label` field when the backend embeds one.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.0.get("label").and_then(Value::as_str)
    }
}

impl fmt::Display for Invite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
