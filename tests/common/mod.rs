//! Integration test common infrastructure.
//!
//! Provides a channel/server pair that records every call made through the
//! capability traits, so tests can assert on exact effects.

#![allow(dead_code)]

use parking_lot::Mutex;
use slirc_commands::{Channel, Server};

/// One call observed on the server capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Raw(String),
    Whisper { target: String, body: String },
}

#[derive(Debug, Default)]
pub struct RecordingServer {
    sent: Mutex<Vec<Sent>>,
}

impl RecordingServer {
    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().clone()
    }

    pub fn raw_lines(&self) -> Vec<String> {
        self.sent
            .lock()
            .iter()
            .filter_map(|s| match s {
                Sent::Raw(line) => Some(line.clone()),
                Sent::Whisper { .. } => None,
            })
            .collect()
    }
}

impl Server for RecordingServer {
    fn send_raw_message(&self, line: &str) {
        self.sent.lock().push(Sent::Raw(line.to_string()));
    }

    fn send_whisper(&self, target: &str, body: &str) {
        self.sent.lock().push(Sent::Whisper {
            target: target.to_string(),
            body: body.to_string(),
        });
    }
}

/// Channel that records system notices and optionally has a server.
#[derive(Debug)]
pub struct RecordingChannel {
    server: Option<RecordingServer>,
    notices: Mutex<Vec<String>>,
}

impl RecordingChannel {
    pub fn connected() -> Self {
        Self {
            server: Some(RecordingServer::default()),
            notices: Mutex::new(Vec::new()),
        }
    }

    pub fn disconnected() -> Self {
        Self {
            server: None,
            notices: Mutex::new(Vec::new()),
        }
    }

    pub fn notices(&self) -> Vec<String> {
        self.notices.lock().clone()
    }

    /// Everything the server saw; empty when disconnected.
    pub fn sent(&self) -> Vec<Sent> {
        self.server.as_ref().map(|s| s.sent()).unwrap_or_default()
    }

    pub fn raw_lines(&self) -> Vec<String> {
        self.server
            .as_ref()
            .map(|s| s.raw_lines())
            .unwrap_or_default()
    }
}

impl Channel for RecordingChannel {
    fn server(&self) -> Option<&dyn Server> {
        self.server.as_ref().map(|s| s as &dyn Server)
    }

    fn add_system_message(&self, text: &str) {
        self.notices.lock().push(text.to_string());
    }
}
