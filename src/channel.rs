//! Channel and server capabilities.
//!
//! The interpreter only needs two things from its host application: a way to
//! show a local notice in a channel, and a way to reach that channel's server.
//! [`IrcChannel`] and [`IrcServer`] are the stock implementations; both hand
//! their output to unbounded tokio channels and never block.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{trace, warn};

use crate::commands::RawLine;

/// Outgoing side of a server connection.
pub trait Server: Send + Sync {
    /// Transmit `line` unmodified. The transport appends the line terminator.
    fn send_raw_message(&self, line: &str);

    /// Send a private message to `target` by whatever mechanism this server
    /// uses for whispers.
    fn send_whisper(&self, target: &str, body: &str);
}

/// A chat channel as seen by the interpreter.
pub trait Channel {
    /// The server backing this channel, if it is currently protocol-backed.
    fn server(&self) -> Option<&dyn Server>;

    /// Append a locally-visible notice. Has no network effect.
    fn add_system_message(&self, text: &str);
}

/// Server capability backed by an unbounded line queue.
///
/// Sends are fire-and-forget: if the receiving transport is gone the line is
/// dropped and a warning is logged.
#[derive(Debug, Clone)]
pub struct IrcServer {
    name: String,
    outgoing: mpsc::UnboundedSender<String>,
}

impl IrcServer {
    pub fn new(name: impl Into<String>, outgoing: mpsc::UnboundedSender<String>) -> Self {
        Self {
            name: name.into(),
            outgoing,
        }
    }

    fn push(&self, line: String) {
        trace!(server = %self.name, line = %line, "Queueing raw line");
        if self.outgoing.send(line).is_err() {
            warn!(server = %self.name, "Transport closed, dropping outgoing line");
        }
    }
}

impl Server for IrcServer {
    fn send_raw_message(&self, line: &str) {
        self.push(line.to_string());
    }

    fn send_whisper(&self, target: &str, body: &str) {
        self.push(RawLine::Privmsg { target, text: body }.to_string());
    }
}

/// Channel capability with an optional server and a notice queue.
#[derive(Debug, Clone)]
pub struct IrcChannel {
    name: String,
    server: Option<Arc<IrcServer>>,
    notices: mpsc::UnboundedSender<String>,
}

impl IrcChannel {
    pub fn new(
        name: impl Into<String>,
        server: Option<Arc<IrcServer>>,
        notices: mpsc::UnboundedSender<String>,
    ) -> Self {
        Self {
            name: name.into(),
            server,
            notices,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the backing server, e.g. after the host reconnects.
    pub fn set_server(&mut self, server: Option<Arc<IrcServer>>) {
        self.server = server;
    }
}

impl Channel for IrcChannel {
    fn server(&self) -> Option<&dyn Server> {
        self.server.as_deref().map(|s| s as &dyn Server)
    }

    fn add_system_message(&self, text: &str) {
        if self.notices.send(text.to_string()).is_err() {
            warn!(channel = %self.name, "Notice sink closed, dropping system message");
        }
    }
}
