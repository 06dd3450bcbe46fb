//! In-memory adapter implementations.
//!
//! These adapters are thread-safe and deterministic. They back unit tests and
//! local development flows without a real identity network.

mod backend;
mod logger;
mod store;

pub use backend::{InMemoryIdentityBackend, InMemoryPublicAgent, PUBLIC_INVITATION_TYPE};
pub use logger::{LogLevel, RecordedLine, RecordingLogger};
pub use store::InMemoryAgentStore;
