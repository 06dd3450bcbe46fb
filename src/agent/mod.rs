//! Public agent creation and invite generation.
//!
//! A public agent acts on behalf of an institution and hands out connection
//! invitations. This module wraps an identity-agent backend with logging and
//! pluggable persistence. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
