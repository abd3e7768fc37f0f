use std::fmt;

use tracing::Level;

/// Sink for the client's own log lines.
pub trait ClientLogger: Send + Sync + fmt::Debug {
    fn log(&self, level: Level, message: &str);
}

/// Discards everything. The default for loaded sessions.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopLogger;

impl ClientLogger for NoopLogger {
    fn log(&self, _level: Level, _message: &str) {}
}

/// Forwards to `tracing` under the `spotsession::client` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl ClientLogger for TracingLogger {
    fn log(&self, level: Level, message: &str) {
        match level {
            Level::ERROR => tracing::error!(target: "spotsession::client", "{}", message),
            Level::WARN => tracing::warn!(target: "spotsession::client", "{}", message),
            Level::INFO => tracing::info!(target: "spotsession::client", "{}", message),
            Level::DEBUG => tracing::debug!(target: "spotsession::client", "{}", message),
            _ => tracing::trace!(target: "spotsession::client", "{}", message),
        }
    }
}
