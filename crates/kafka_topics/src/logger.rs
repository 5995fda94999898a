use std::fmt;
use std::sync::Arc;

use tracing::{debug, error, info, warn};

/// Shared logging handle handed out with every resolved config.
pub type Logger = Arc<dyn LogSink>;

/// A sink for log messages.
///
/// Only [`LogSink::error`] is required; the other levels are dropped unless
/// overridden.
pub trait LogSink: fmt::Debug + Send + Sync {
    fn error(&self, message: &str);

    fn warn(&self, _message: &str) {}

    fn info(&self, _message: &str) {}

    fn debug(&self, _message: &str) {}
}

/// Forwards messages to [`tracing`].
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLogger;

impl TracingLogger {
    /// Returns a shared [`Logger`] handle.
    pub fn shared() -> Logger {
        Arc::new(TracingLogger)
    }
}

impl LogSink for TracingLogger {
    fn error(&self, message: &str) {
        error!(target: "kafka_topics", "{message}");
    }

    fn warn(&self, message: &str) {
        warn!(target: "kafka_topics", "{message}");
    }

    fn info(&self, message: &str) {
        info!(target: "kafka_topics", "{message}");
    }

    fn debug(&self, message: &str) {
        debug!(target: "kafka_topics", "{message}");
    }
}
