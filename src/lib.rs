//! # slirc-commands
//!
//! Client-side slash-command interpreter for IRC channels.
//!
//! A host application hands the interpreter a command name, the raw argument
//! string exactly as typed, and a [`Channel`]. The interpreter either shows a
//! local system notice or hands exactly one raw protocol line (or whisper) to
//! the channel's [`Server`].
//!
//! ```rust
//! use std::sync::Arc;
//! use slirc_commands::{Dispatcher, IrcChannel, IrcServer};
//! use tokio::sync::mpsc;
//!
//! let (lines_tx, mut lines) = mpsc::unbounded_channel();
//! let (notices_tx, _notices) = mpsc::unbounded_channel();
//! let server = Arc::new(IrcServer::new("irc.example.net", lines_tx));
//! let channel = IrcChannel::new("#rust", Some(server), notices_tx);
//!
//! let dispatcher = Dispatcher::default();
//! dispatcher.dispatch("kick", "#rust troll go away", &channel).unwrap();
//! assert_eq!(lines.try_recv().unwrap(), "KICK #rust troll :go away");
//! ```
//!
//! Unrecognized commands are forwarded as `<NAME> <args>` with the name
//! uppercased. There is no allow-list: this is the escape hatch for verbs the
//! interpreter does not model, and typos are sent as well.

pub mod channel;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod telemetry;

pub use channel::{Channel, IrcChannel, IrcServer, Server};
pub use commands::{CommandKind, Dispatched, Dispatcher, RawLine, StaticCommandTable};
pub use config::{Config, ConfigError};
pub use error::{DispatchError, DispatchResult};
pub use input::{Input, parse_input};
