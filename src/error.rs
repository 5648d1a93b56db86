//! Unified error handling for slirc-commands.
//!
//! Dispatch has exactly two failure modes. Everything else a user types is
//! passed through to the server, which is authoritative for protocol-level
//! validation.

use thiserror::Error;

use crate::commands::Dispatched;

// ============================================================================
// Dispatch Errors (command interpretation)
// ============================================================================

/// Errors that can occur while interpreting a slash-command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The channel is not backed by a live server. Nothing was shown or sent.
    #[error("channel has no connected server")]
    NotConnected,

    /// The command was malformed. The contained usage text has already been
    /// shown to the user as a system notice.
    #[error("{0}")]
    Usage(&'static str),
}

impl DispatchError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotConnected => "not_connected",
            Self::Usage(_) => "usage",
        }
    }
}

/// Result type for command dispatch. `Ok` is success, `Err` is failure.
pub type DispatchResult = Result<Dispatched, DispatchError>;
