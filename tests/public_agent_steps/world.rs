//! Shared world state for public agent BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use public_agents::agent::{
    adapters::memory::{
        InMemoryAgentStore, InMemoryIdentityBackend, InMemoryPublicAgent, RecordingLogger,
    },
    domain::Invite,
    services::{PublicAgentService, PublicAgentServiceError},
};
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestPublicAgentService = PublicAgentService<
    InMemoryIdentityBackend<DefaultClock>,
    InMemoryAgentStore<InMemoryPublicAgent>,
    RecordingLogger,
>;

/// Scenario world for public agent behaviour tests.
pub struct PublicAgentWorld {
    /// The service under test.
    pub service: TestPublicAgentService,
    /// Store shared with the service.
    pub store: Arc<InMemoryAgentStore<InMemoryPublicAgent>>,
    /// Logger shared with the service.
    pub logger: Arc<RecordingLogger>,
    /// DID chosen by the last `Given` step.
    pub institution_did: Option<String>,
    /// Result of the last creation attempt.
    pub last_created: Option<Result<InMemoryPublicAgent, PublicAgentServiceError>>,
    /// Result of the last invite request.
    pub last_invite: Option<Result<Invite, PublicAgentServiceError>>,
}

impl PublicAgentWorld {
    /// Creates a world with an empty store.
    #[must_use]
    pub fn new() -> Self {
        let store = Arc::new(InMemoryAgentStore::new());
        let logger = Arc::new(RecordingLogger::new());
        let service = PublicAgentService::new(
            Arc::new(InMemoryIdentityBackend::new(Arc::new(DefaultClock))),
            Arc::clone(&store),
            Arc::clone(&logger),
        );
        Self {
            service,
            store,
            logger,
            institution_did: None,
            last_created: None,
            last_invite: None,
        }
    }

    /// Returns the DID set by a `Given` step.
    pub fn institution_did(&self) -> Result<&str, eyre::Report> {
        self.institution_did
            .as_deref()
            .ok_or_else(|| eyre::eyre!("no institution DID in scenario world"))
    }
}

impl Default for PublicAgentWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> PublicAgentWorld {
    PublicAgentWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
