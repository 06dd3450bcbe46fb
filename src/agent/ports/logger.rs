//! Logging port injected into the public agent service.

/// Textual logging sink.
///
/// Logging is fire-and-forget: implementations must not fail the caller.
pub trait ServiceLogger: Send + Sync {
    /// Records an informational message.
    fn info(&self, message: &str);

    /// Records a warning.
    fn warn(&self, message: &str);
}
