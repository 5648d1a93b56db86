//! Telemetry utilities for command timing and log correlation.

use std::time::Instant;

use tracing::trace;

/// Guard for timing command interpretation.
///
/// Logs the elapsed time at `trace` level when dropped.
pub struct CommandTimer {
    command: String,
    start: Instant,
}

impl CommandTimer {
    /// Start timing a command.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            start: Instant::now(),
        }
    }
}

impl Drop for CommandTimer {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        trace!(command = %self.command, elapsed = ?elapsed, "Command interpreted");
    }
}

/// Standardized span constructors.
pub mod spans {
    use tracing::{Span, debug_span, info_span};

    /// Span for one slash-command dispatch.
    pub fn command(name: &str, kind: &str) -> Span {
        debug_span!("irc.command", command = %name, kind = %kind)
    }

    /// Span for an interactive shell session on one channel.
    pub fn session(channel: &str, server: Option<&str>) -> Span {
        if let Some(server) = server {
            info_span!("session", channel = %channel, server = %server)
        } else {
            info_span!("session", channel = %channel)
        }
    }
}
