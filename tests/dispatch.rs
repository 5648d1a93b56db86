//! Integration tests for slash-command dispatch.

mod common;

use common::{RecordingChannel, Sent};
use slirc_commands::commands::{JOIN_NOTICE, KICK_USAGE, PART_NOTICE};
use slirc_commands::{DispatchError, Dispatched, Dispatcher, StaticCommandTable};
use std::sync::Arc;

fn dispatch(name: &str, params: &str, channel: &RecordingChannel) -> slirc_commands::DispatchResult {
    Dispatcher::default().dispatch(name, params, channel)
}

#[test]
fn test_disconnected_channel_fails_silently() {
    for (name, params) in [
        ("join", "#foo"),
        ("msg", "alice hi"),
        ("kick", ""),
        ("raw", "PING x"),
        ("frobnicate", "a b c"),
    ] {
        let channel = RecordingChannel::disconnected();
        assert_eq!(
            dispatch(name, params, &channel),
            Err(DispatchError::NotConnected),
            "/{name} {params}"
        );
        assert!(channel.notices().is_empty());
        assert!(channel.sent().is_empty());
    }
}

#[test]
fn test_join_and_part_show_guidance() {
    let channel = RecordingChannel::connected();
    assert_eq!(
        dispatch("join", "#foo", &channel),
        Ok(Dispatched::Notice(JOIN_NOTICE.to_string()))
    );
    assert_eq!(channel.notices(), vec![JOIN_NOTICE.to_string()]);
    assert!(channel.sent().is_empty());

    let channel = RecordingChannel::connected();
    assert!(dispatch("PART", "", &channel).is_ok());
    assert_eq!(channel.notices(), vec![PART_NOTICE.to_string()]);
    assert!(channel.sent().is_empty());
}

#[test]
fn test_kick_arity() {
    for params in ["", "onlyone"] {
        let channel = RecordingChannel::connected();
        assert_eq!(
            dispatch("kick", params, &channel),
            Err(DispatchError::Usage(KICK_USAGE))
        );
        assert_eq!(channel.notices(), vec![KICK_USAGE.to_string()]);
        assert!(channel.sent().is_empty());
    }
}

#[test]
fn test_kick_without_reason() {
    let channel = RecordingChannel::connected();
    assert!(dispatch("kick", "#chan user", &channel).is_ok());
    assert_eq!(channel.raw_lines(), vec!["KICK #chan user".to_string()]);
    assert!(channel.notices().is_empty());
}

#[test]
fn test_kick_with_reason() {
    let channel = RecordingChannel::connected();
    assert!(dispatch("kick", "#chan user go away", &channel).is_ok());
    assert_eq!(channel.raw_lines(), vec!["KICK #chan user :go away".to_string()]);
}

#[test]
fn test_kick_trailing_space_counts_as_second_token() {
    // "#chan " splits into ["#chan", ""], which satisfies the arity check.
    let channel = RecordingChannel::connected();
    assert!(dispatch("kick", "#chan ", &channel).is_ok());
    assert_eq!(channel.raw_lines(), vec!["KICK #chan ".to_string()]);
}

#[test]
fn test_raw_is_verbatim() {
    let channel = RecordingChannel::connected();
    assert!(dispatch("raw", "PRIVMSG #x :hi", &channel).is_ok());
    assert_eq!(channel.raw_lines(), vec!["PRIVMSG #x :hi".to_string()]);
}

#[test]
fn test_raw_bypasses_static_table_target() {
    let channel = RecordingChannel::connected();
    assert!(dispatch("raw", "JOIN #channel", &channel).is_ok());
    assert_eq!(channel.raw_lines(), vec!["JOIN #channel".to_string()]);
    assert!(channel.notices().is_empty());
}

#[test]
fn test_wallops_uses_unsplit_params() {
    let channel = RecordingChannel::connected();
    assert!(dispatch("wallops", "server notice  text", &channel).is_ok());
    assert_eq!(
        channel.raw_lines(),
        vec!["WALLOPS :server notice  text".to_string()]
    );
}

#[test]
fn test_unknown_command_is_uppercased_passthrough() {
    let channel = RecordingChannel::connected();
    assert_eq!(
        dispatch("frobnicate", "a b c", &channel),
        Ok(Dispatched::Raw("FROBNICATE a b c".to_string()))
    );
    assert_eq!(channel.raw_lines(), vec!["FROBNICATE a b c".to_string()]);
}

#[test]
fn test_msg_whispers() {
    let channel = RecordingChannel::connected();
    assert!(dispatch("msg", "alice hello there", &channel).is_ok());
    assert_eq!(
        channel.sent(),
        vec![Sent::Whisper {
            target: "alice".to_string(),
            body: "hello there".to_string(),
        }]
    );
}

#[test]
fn test_away_and_knock_templates() {
    let channel = RecordingChannel::connected();
    assert!(dispatch("away", "", &channel).is_ok());
    assert!(dispatch("knock", "secret", &channel).is_ok());
    assert!(dispatch("knock", "secret please let me in", &channel).is_ok());
    assert_eq!(
        channel.raw_lines(),
        vec![
            "AWAY  :".to_string(),
            "KNOCK #secret ".to_string(),
            "KNOCK #secret please let me in".to_string(),
        ]
    );
}

#[test]
fn test_configured_disabled_command() {
    let table = Arc::new(StaticCommandTable::with_extra([("list", "no listing")]));
    let dispatcher = Dispatcher::new(table);
    let channel = RecordingChannel::connected();
    assert!(dispatcher.dispatch("LIST", "", &channel).is_ok());
    assert_eq!(channel.notices(), vec!["no listing".to_string()]);
    assert!(channel.sent().is_empty());
}

#[test]
fn test_one_effect_per_invocation() {
    let channel = RecordingChannel::connected();
    let inputs = [
        ("msg", "bob hi"),
        ("away", "gone"),
        ("knock", "x"),
        ("kick", "#a b"),
        ("wallops", "w"),
        ("raw", "PING :x"),
        ("who", "#a"),
    ];
    for (name, params) in inputs {
        assert!(dispatch(name, params, &channel).is_ok());
    }
    assert_eq!(channel.sent().len(), inputs.len());
    assert!(channel.notices().is_empty());
}

#[test]
fn test_raw_escape_hatch_survives_configured_table() {
    let table = Arc::new(StaticCommandTable::with_extra([("raw", "nope")]));
    let dispatcher = Dispatcher::new(table);
    let channel = RecordingChannel::connected();

    assert!(dispatcher.dispatch("join", "#x", &channel).is_ok());
    assert!(dispatcher.dispatch("raw", "JOIN #x", &channel).is_ok());
    assert_eq!(channel.notices(), vec![JOIN_NOTICE.to_string()]);
    assert_eq!(channel.raw_lines(), vec!["JOIN #x".to_string()]);
}
