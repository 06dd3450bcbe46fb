//! When steps for public agent BDD scenarios.

use super::world::{PublicAgentWorld, run_async};
use rstest_bdd_macros::when;

#[when(r#"public agent "{agent_id}" is created for that institution"#)]
fn create_public_agent(world: &mut PublicAgentWorld, agent_id: String) -> Result<(), eyre::Report> {
    let did = world.institution_did()?.to_owned();
    world.last_created = Some(run_async(
        world.service.public_agent_create(&agent_id, &did),
    ));
    Ok(())
}

#[when(r#"a public invite labelled "{label}" is requested from agent "{agent_id}""#)]
fn request_public_invite(world: &mut PublicAgentWorld, label: String, agent_id: String) {
    world.last_invite = Some(run_async(
        world.service.get_public_invite(&agent_id, &label),
    ));
}
