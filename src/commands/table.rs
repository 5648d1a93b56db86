//! Static command table.
//!
//! Commands in this table are never sent to the server. Typing one shows a
//! fixed system notice instead, usually pointing at the application's own
//! affordance for the same action.

use std::collections::HashMap;

use tracing::{debug, warn};

use super::kind::is_modelled;

/// Guidance shown for `/join`.
pub const JOIN_NOTICE: &str =
    "/join is not supported. Press ctrl+r to change the channel. If required use /raw JOIN #channel.";

/// Guidance shown for `/part`.
pub const PART_NOTICE: &str =
    "/part is not supported. Press ctrl+r to change the channel. If required use /raw PART #channel.";

/// Names with a built-in notice.
pub const BUILTIN_COMMANDS: &[&str] = &["join", "part"];

/// Immutable lowercase-name to notice-text lookup.
///
/// Built once at startup and shared read-only; there is no way to mutate a
/// table after construction.
#[derive(Debug, Clone)]
pub struct StaticCommandTable {
    messages: HashMap<String, String>,
}

impl StaticCommandTable {
    /// Table with only the built-in entries (`join`, `part`).
    pub fn builtin() -> Self {
        let mut messages = HashMap::new();
        messages.insert("join".to_string(), JOIN_NOTICE.to_string());
        messages.insert("part".to_string(), PART_NOTICE.to_string());
        Self { messages }
    }

    /// Built-in entries plus `extra`. Names are lowercased. An extra entry
    /// never replaces a built-in one, never takes over a modelled command, and
    /// the first of two names equal after lowercasing wins.
    pub fn with_extra<I, K, V>(extra: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut table = Self::builtin();
        for (name, text) in extra {
            let name = name.as_ref().to_lowercase();
            if is_modelled(&name) {
                warn!(command = %name, "Ignoring configured notice for modelled command");
                continue;
            }
            if table.messages.contains_key(&name) {
                if BUILTIN_COMMANDS.contains(&name.as_str()) {
                    warn!(command = %name, "Ignoring configured notice for built-in command");
                } else {
                    warn!(command = %name, "Ignoring duplicate configured notice");
                }
                continue;
            }
            debug!(command = %name, "Registered disabled command");
            table.messages.insert(name, text.into());
        }
        table
    }

    /// Look up the notice for an already-lowercased command name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.messages.get(name).map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the table has no entries. Never true for a table built by
    /// [`builtin`](Self::builtin) or [`with_extra`](Self::with_extra).
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for StaticCommandTable {
    fn default() -> Self {
        Self::builtin()
    }
}
