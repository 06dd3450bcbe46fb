//! Given steps for public agent BDD scenarios.

use super::world::{PublicAgentWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"an institution with DID "{did}""#)]
fn an_institution_with_did(world: &mut PublicAgentWorld, did: String) {
    world.institution_did = Some(did);
}

#[given(r#"public agent "{agent_id}" has been created for that institution"#)]
fn public_agent_created(
    world: &mut PublicAgentWorld,
    agent_id: String,
) -> Result<(), eyre::Report> {
    let did = world.institution_did()?.to_owned();
    run_async(world.service.public_agent_create(&agent_id, &did))
        .wrap_err("create public agent for scenario")?;
    Ok(())
}
