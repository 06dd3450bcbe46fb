//! Public agents: institution-bound identity agents and their invites.
//!
//! This crate wraps an identity-agent backend with logging and pluggable
//! persistence. It creates public agents for an institutional DID and renders
//! shareable connection invites from previously saved agents.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Identifier and value types with no infrastructure
//!   dependencies
//! - **Ports**: Abstract trait interfaces for the backend, store and logger
//! - **Adapters**: Concrete implementations of ports (memory, files, tracing)
//!
//! # Modules
//!
//! - [`agent`]: Public agent creation and invite generation
//! - [`config`]: Runtime configuration loading
//! - [`logging`]: `tracing` subscriber installation

pub mod agent;
pub mod config;
pub mod logging;
