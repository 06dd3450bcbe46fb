//! Behaviour tests for public agent creation and invite generation.

mod public_agent_steps;

use public_agent_steps::world::{PublicAgentWorld, world};
use rstest_bdd_macros::scenario;

#[scenario(
    path = "tests/features/public_agent.feature",
    name = "Create a public agent for an institution"
)]
#[tokio::test(flavor = "multi_thread")]
async fn create_public_agent(world: PublicAgentWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/public_agent.feature",
    name = "Invite for an unknown agent is not found"
)]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_agent_invite_not_found(world: PublicAgentWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/public_agent.feature",
    name = "Invite carries the requested label"
)]
#[tokio::test(flavor = "multi_thread")]
async fn invite_carries_label(world: PublicAgentWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/public_agent.feature",
    name = "Invalid institution DID creates nothing"
)]
#[tokio::test(flavor = "multi_thread")]
async fn invalid_did_creates_nothing(world: PublicAgentWorld) {
    let _ = world;
}
