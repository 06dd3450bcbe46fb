//! Application services for public agents.

mod public_agent;

pub use public_agent::{PublicAgentService, PublicAgentServiceError, PublicAgentServiceResult};
