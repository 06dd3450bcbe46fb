//! Invite label value type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display label embedded in a public invite.
///
/// Labels are passed to the backend verbatim, including empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InviteLabel(String);

impl InviteLabel {
    /// Wraps a label without validation.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the label as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for InviteLabel {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl AsRef<str> for InviteLabel {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for InviteLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
