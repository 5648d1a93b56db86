//! Positional argument splitting.

/// Arguments of one invocation, split on single spaces.
///
/// Splitting is purely positional: consecutive spaces produce empty tokens
/// and an empty input produces one empty token, so index 0 always exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamList<'a> {
    tokens: Vec<&'a str>,
}

impl<'a> ParamList<'a> {
    pub fn split(all_params: &'a str) -> Self {
        Self {
            tokens: all_params.split(' ').collect(),
        }
    }

    /// Token at `index`, or `""` past the end.
    pub fn get(&self, index: usize) -> &'a str {
        self.tokens.get(index).copied().unwrap_or("")
    }

    /// Everything after the first `index + 1` tokens, rejoined with single
    /// spaces. Used to recover free-text tails such as a kick reason.
    pub fn params_after(&self, index: usize) -> String {
        self.tokens
            .get(index + 1..)
            .map(|rest| rest.join(" "))
            .unwrap_or_default()
    }

    /// Number of tokens, counting empty ones. Never zero.
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }
}
