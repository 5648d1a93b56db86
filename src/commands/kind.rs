//! The command vocabulary.

use super::table::StaticCommandTable;

/// Names with their own construction rules. These can never be moved into the
/// static table; `raw` in particular must stay usable as the escape hatch the
/// built-in notices point to.
pub const MODELLED_COMMANDS: &[&str] = &["msg", "away", "knock", "kick", "wallops", "raw"];

/// Whether `name` (any case) has its own construction rules.
pub fn is_modelled(name: &str) -> bool {
    let name = name.to_lowercase();
    MODELLED_COMMANDS.contains(&name.as_str())
}

/// What a command name resolves to.
///
/// Resolution checks the static table first, then the modelled commands, and
/// finally falls back to [`CommandKind::Generic`], which forwards any other
/// name to the server as a protocol verb. The fallback has no allow-list on
/// purpose: it is the escape hatch for server-specific and administrative
/// verbs, which also means a typo becomes a live command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandKind<'t> {
    /// Disallowed command; show the notice text and send nothing.
    Static(&'t str),
    Msg,
    Away,
    Knock,
    Kick,
    Wallops,
    Raw,
    /// Unmodelled verb (lowercased name).
    Generic(String),
}

impl<'t> CommandKind<'t> {
    /// Resolve a command name. Matching is case-insensitive.
    pub fn resolve(name: &str, table: &'t StaticCommandTable) -> Self {
        let name = name.to_lowercase();
        if let Some(text) = table.get(&name) {
            return Self::Static(text);
        }
        match name.as_str() {
            "msg" => Self::Msg,
            "away" => Self::Away,
            "knock" => Self::Knock,
            "kick" => Self::Kick,
            "wallops" => Self::Wallops,
            "raw" => Self::Raw,
            _ => Self::Generic(name),
        }
    }

    /// Stable label for logs.
    pub fn name(&self) -> &str {
        match self {
            Self::Static(_) => "static",
            Self::Msg => "msg",
            Self::Away => "away",
            Self::Knock => "knock",
            Self::Kick => "kick",
            Self::Wallops => "wallops",
            Self::Raw => "raw",
            Self::Generic(_) => "generic",
        }
    }
}
