//! Adapter implementations for public agent ports.

pub mod memory;

mod configured;
mod json_file;
mod tracing_logger;

pub use configured::ConfiguredAgentStore;
pub use json_file::JsonFileAgentStore;
pub use tracing_logger::TracingLogger;
