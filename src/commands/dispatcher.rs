//! Slash-command dispatch.
//!
//! `Dispatcher` turns one typed command into at most one effect: a local
//! system notice, a raw line handed to the server, or a whisper. It never
//! waits on the network and never retries.

use std::sync::Arc;

use tracing::debug;

use super::kind::CommandKind;
use super::line::RawLine;
use super::params::ParamList;
use super::table::StaticCommandTable;
use crate::channel::Channel;
use crate::error::{DispatchError, DispatchResult};
use crate::telemetry::{CommandTimer, spans};

/// Usage notice for a `/kick` with fewer than two arguments.
pub const KICK_USAGE: &str = "Usage: /kick <channel> <client> [message]";

/// The single effect of a successful dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatched {
    /// A system notice was shown; nothing was sent.
    Notice(String),
    /// A raw line was handed to the server.
    Raw(String),
    /// A whisper was handed to the server.
    Whisper { target: String, body: String },
}

/// Interprets slash-commands against a channel.
///
/// Cheap to clone; the static table is shared.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    table: Arc<StaticCommandTable>,
}

impl Dispatcher {
    pub fn new(table: Arc<StaticCommandTable>) -> Self {
        Self { table }
    }

    /// Interpret `command_name` with its raw argument string on `channel`.
    ///
    /// Fails only when the channel has no server (nothing happens at all) or
    /// when `/kick` gets fewer than two arguments (the usage notice is shown).
    /// Any other input, however malformed, is passed through to the server.
    pub fn dispatch<C>(&self, command_name: &str, all_params: &str, channel: &C) -> DispatchResult
    where
        C: Channel + ?Sized,
    {
        let Some(server) = channel.server() else {
            debug!(command = %command_name, "Channel is not connected");
            return Err(DispatchError::NotConnected);
        };

        let kind = CommandKind::resolve(command_name, &self.table);
        let _span = spans::command(command_name, kind.name()).entered();
        let _timer = CommandTimer::new(command_name);

        let params = ParamList::split(all_params);

        let line = match kind {
            CommandKind::Static(text) => {
                channel.add_system_message(text);
                return Ok(Dispatched::Notice(text.to_string()));
            }
            CommandKind::Msg => {
                let target = params.get(0);
                let body = params.params_after(0);
                server.send_whisper(target, &body);
                debug!(recipient = %target, "Whisper sent");
                return Ok(Dispatched::Whisper {
                    target: target.to_string(),
                    body,
                });
            }
            CommandKind::Away => RawLine::Away {
                lead: params.get(0),
                rest: params.params_after(0),
            },
            CommandKind::Knock => RawLine::Knock {
                channel: params.get(0),
                rest: params.params_after(0),
            },
            CommandKind::Kick => {
                if params.token_count() < 2 {
                    channel.add_system_message(KICK_USAGE);
                    let err = DispatchError::Usage(KICK_USAGE);
                    debug!(error_code = err.error_code(), "Rejected kick");
                    return Err(err);
                }
                RawLine::kick(params.get(0), params.get(1), params.params_after(1))
            }
            CommandKind::Wallops => RawLine::Wallops(all_params),
            CommandKind::Raw => RawLine::Verbatim(all_params),
            CommandKind::Generic(name) => RawLine::generic(&name, all_params),
        };

        let line = line.to_string();
        server.send_raw_message(&line);
        debug!(line = %line, "Raw line sent");
        Ok(Dispatched::Raw(line))
    }
}
