//! Then steps for public agent BDD scenarios.

use super::world::{PublicAgentWorld, run_async};
use public_agents::agent::{
    adapters::memory::{InMemoryPublicAgent, LogLevel},
    domain::{AgentId, Invite},
    ports::{AgentBackendError, AgentStore},
    services::PublicAgentServiceError,
};
use rstest_bdd_macros::then;

fn created_agent(world: &PublicAgentWorld) -> Result<&InMemoryPublicAgent, eyre::Report> {
    match world.last_created.as_ref() {
        Some(Ok(agent)) => Ok(agent),
        Some(Err(err)) => Err(eyre::eyre!("creation failed: {err}")),
        None => Err(eyre::eyre!("missing creation result in scenario world")),
    }
}

fn rendered_invite(world: &PublicAgentWorld) -> Result<&Invite, eyre::Report> {
    match world.last_invite.as_ref() {
        Some(Ok(invite)) => Ok(invite),
        Some(Err(err)) => Err(eyre::eyre!("invite request failed: {err}")),
        None => Err(eyre::eyre!("missing invite result in scenario world")),
    }
}

fn parse_id(raw: &str) -> Result<AgentId, eyre::Report> {
    AgentId::new(raw).map_err(|err| eyre::eyre!("invalid agent id '{raw}': {err}"))
}

#[then(r#"the returned agent is the one stored under "{agent_id}""#)]
fn returned_agent_is_stored(
    world: &PublicAgentWorld,
    agent_id: String,
) -> Result<(), eyre::Report> {
    let created = created_agent(world)?;
    let stored = run_async(world.store.load(&parse_id(&agent_id)?))
        .map_err(|err| eyre::eyre!("load failed: {err}"))?;
    if &stored != created {
        return Err(eyre::eyre!("stored agent differs from returned agent"));
    }
    Ok(())
}

#[then(r#"the agent acts for DID "{did}""#)]
fn agent_acts_for_did(world: &PublicAgentWorld, did: String) -> Result<(), eyre::Report> {
    let created = created_agent(world)?;
    if created.institution_did().as_str() != did {
        return Err(eyre::eyre!(
            "expected DID '{did}', found '{}'",
            created.institution_did()
        ));
    }
    Ok(())
}

#[then("the invite request fails with a not-found error")]
fn invite_fails_not_found(world: &PublicAgentWorld) -> Result<(), eyre::Report> {
    match world.last_invite.as_ref() {
        Some(Err(err)) if err.is_not_found() => Ok(()),
        other => Err(eyre::eyre!("expected not-found error, got {other:?}")),
    }
}

#[then(r#"an intent log line names "{agent_id}""#)]
fn intent_line_logged(world: &PublicAgentWorld, agent_id: String) -> Result<(), eyre::Report> {
    let lines = world.logger.messages_at(LogLevel::Info);
    if !lines.iter().any(|line| line.contains(&agent_id)) {
        return Err(eyre::eyre!("no intent line names '{agent_id}': {lines:?}"));
    }
    Ok(())
}

#[then(r#"the invite carries label "{label}""#)]
fn invite_carries_label(world: &PublicAgentWorld, label: String) -> Result<(), eyre::Report> {
    let invite = rendered_invite(world)?;
    if invite.label() != Some(label.as_str()) {
        return Err(eyre::eyre!("expected label '{label}', got {invite}"));
    }
    Ok(())
}

#[then(r#"the invite names DID "{did}""#)]
fn invite_names_did(world: &PublicAgentWorld, did: String) -> Result<(), eyre::Report> {
    let invite = rendered_invite(world)?;
    let named = invite.as_json().get("did").and_then(|value| value.as_str());
    if named != Some(did.as_str()) {
        return Err(eyre::eyre!("expected DID '{did}', got {invite}"));
    }
    Ok(())
}

#[then("creation fails with an invalid DID error")]
fn creation_fails_invalid_did(world: &PublicAgentWorld) -> Result<(), eyre::Report> {
    match world.last_created.as_ref() {
        Some(Err(PublicAgentServiceError::Creation(AgentBackendError::InvalidDid { .. }))) => {
            Ok(())
        }
        other => Err(eyre::eyre!("expected invalid DID error, got {other:?}")),
    }
}

#[then(r#"nothing is stored under "{agent_id}""#)]
fn nothing_stored(world: &PublicAgentWorld, agent_id: String) -> Result<(), eyre::Report> {
    let present = world
        .store
        .contains(&parse_id(&agent_id)?)
        .map_err(|err| eyre::eyre!("lookup failed: {err}"))?;
    if present {
        return Err(eyre::eyre!("expected no agent under '{agent_id}'"));
    }
    Ok(())
}
