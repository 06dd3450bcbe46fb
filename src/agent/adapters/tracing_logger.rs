//! `tracing` adapter for the service logging port.

use crate::agent::ports::ServiceLogger;

const LOG_TARGET: &str = "public_agents::agent";

/// Forwards service log lines to the installed `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl ServiceLogger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!(target: LOG_TARGET, "{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!(target: LOG_TARGET, "{message}");
    }
}
