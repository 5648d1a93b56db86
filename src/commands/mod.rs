//! Slash-command interpretation.
//!
//! This module is split into logical submodules:
//! - [`table`]: Commands that only show a notice (`/join`, `/part`, configured extras)
//! - [`params`]: Positional argument splitting
//! - [`kind`]: The command vocabulary and name resolution
//! - [`line`]: Byte-exact construction of outgoing raw lines
//! - [`dispatcher`]: The dispatch entry point

pub mod dispatcher;
pub mod kind;
pub mod line;
pub mod params;
pub mod table;

pub use dispatcher::{Dispatched, Dispatcher, KICK_USAGE};
pub use kind::{CommandKind, MODELLED_COMMANDS, is_modelled};
pub use line::RawLine;
pub use params::ParamList;
pub use table::{BUILTIN_COMMANDS, JOIN_NOTICE, PART_NOTICE, StaticCommandTable};
