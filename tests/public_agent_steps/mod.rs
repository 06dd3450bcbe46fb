//! Step definitions for public agent BDD scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
