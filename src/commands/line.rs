//! Outgoing raw protocol lines.
//!
//! Each variant corresponds to one fixed wire template. `Display` writes the
//! template exactly: parameters are never validated, trimmed or re-quoted, and
//! the `:` before a trailing parameter is written even when the trailing text
//! is empty. The line terminator is the transport's job.

use std::fmt::{self, Write};

/// A raw line produced by the interpreter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawLine<'a> {
    /// `AWAY <lead> :<rest>`
    Away { lead: &'a str, rest: String },
    /// `KNOCK #<channel> <rest>`
    Knock { channel: &'a str, rest: String },
    /// `KICK <channel> <target>` or `KICK <channel> <target> :<reason>`
    Kick {
        channel: &'a str,
        target: &'a str,
        reason: Option<String>,
    },
    /// `WALLOPS :<text>`
    Wallops(&'a str),
    /// Sent verbatim.
    Verbatim(&'a str),
    /// `<VERB> <params>`, verb already uppercased.
    Generic { verb: String, params: &'a str },
    /// `PRIVMSG <target> :<text>`
    Privmsg { target: &'a str, text: &'a str },
}

impl<'a> RawLine<'a> {
    /// Kick line; an empty reason selects the two-parameter form.
    pub fn kick(channel: &'a str, target: &'a str, reason: String) -> Self {
        let reason = (!reason.is_empty()).then_some(reason);
        Self::Kick {
            channel,
            target,
            reason,
        }
    }

    /// Generic passthrough for a verb nobody modelled.
    pub fn generic(name: &str, params: &'a str) -> Self {
        Self::Generic {
            verb: name.to_uppercase(),
            params,
        }
    }
}

fn write_trailing(f: &mut fmt::Formatter<'_>, trailing: &str) -> fmt::Result {
    f.write_str(" :")?;
    f.write_str(trailing)
}

impl fmt::Display for RawLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawLine::Away { lead, rest } => {
                f.write_str("AWAY ")?;
                f.write_str(lead)?;
                write_trailing(f, rest)
            }
            RawLine::Knock { channel, rest } => {
                f.write_str("KNOCK #")?;
                f.write_str(channel)?;
                f.write_char(' ')?;
                f.write_str(rest)
            }
            RawLine::Kick {
                channel,
                target,
                reason,
            } => {
                f.write_str("KICK ")?;
                f.write_str(channel)?;
                f.write_char(' ')?;
                f.write_str(target)?;
                match reason {
                    Some(reason) => write_trailing(f, reason),
                    None => Ok(()),
                }
            }
            RawLine::Wallops(text) => {
                f.write_str("WALLOPS")?;
                write_trailing(f, text)
            }
            RawLine::Verbatim(line) => f.write_str(line),
            RawLine::Generic { verb, params } => {
                f.write_str(verb)?;
                f.write_char(' ')?;
                f.write_str(params)
            }
            RawLine::Privmsg { target, text } => {
                f.write_str("PRIVMSG ")?;
                f.write_str(target)?;
                write_trailing(f, text)
            }
        }
    }
}
