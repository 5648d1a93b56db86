//! Splitting a typed line into a command invocation.

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input<'a> {
    /// `/name rest`; `all_params` is everything after the first space, untouched.
    Command { name: &'a str, all_params: &'a str },
    /// Plain chat text. A leading `//` has been unescaped to `/`.
    Text(&'a str),
    /// Blank line or a bare `/`.
    Empty,
}

/// Classify a typed line. Only the line terminator is stripped; all other
/// whitespace is significant.
pub fn parse_input(line: &str) -> Input<'_> {
    let line = line.trim_end_matches(['\r', '\n']);

    if line.trim().is_empty() {
        return Input::Empty;
    }

    if line.starts_with("//") {
        return Input::Text(&line[1..]);
    }

    let Some(rest) = line.strip_prefix('/') else {
        return Input::Text(line);
    };

    let (name, all_params) = rest.split_once(' ').unwrap_or((rest, ""));
    if name.is_empty() {
        return Input::Empty;
    }
    Input::Command { name, all_params }
}
