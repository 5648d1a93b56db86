//! slirc-cmd - interactive shell for the slash-command interpreter.
//!
//! Reads typed lines on stdin, interprets them against one configured
//! channel, and prints the raw lines that would go to the server (`>>`) and
//! the local system notices (`--`) on stdout. Logs go to stderr.

use std::sync::Arc;

use slirc_commands::config::{Config, ConfigError, LogFormat, LoggingConfig};
use slirc_commands::telemetry::spans;
use slirc_commands::{
    Channel, Dispatcher, Input, IrcChannel, IrcServer, RawLine, StaticCommandTable, parse_input,
};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tracing::{Instrument, debug, error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::args().nth(1);

    let loaded = match config_path.as_deref() {
        Some(path) => Config::load(path),
        None => Ok(Config::default()),
    };

    // Initialize tracing (RUST_LOG wins over the configured filter)
    let logging = loaded
        .as_ref()
        .map(|c| c.logging.clone())
        .unwrap_or_default();
    init_tracing(&logging);

    let config = loaded.map_err(|e| {
        error!(path = ?config_path, error = %e, "Failed to load config");
        if let ConfigError::Invalid(problems) = &e {
            for problem in problems {
                error!("  {problem}");
            }
        }
        e
    })?;

    let table = Arc::new(StaticCommandTable::with_extra(&config.commands.disabled));
    info!(
        channel = %config.channel.name,
        server = %config.server.name,
        connected = config.server.connected,
        static_commands = table.len(),
        "Starting slirc-cmd"
    );

    let (line_tx, line_rx) = mpsc::unbounded_channel();
    let (notice_tx, notice_rx) = mpsc::unbounded_channel();
    let writer = tokio::spawn(write_output(line_rx, notice_rx));

    let channel = build_channel(&config, line_tx, notice_tx);
    let span = spans::session(
        channel.name(),
        config.server.connected.then_some(config.server.name.as_str()),
    );
    run_shell(Dispatcher::new(table), &channel)
        .instrument(span)
        .await?;

    // Closing the channel closes both queues and lets the writer drain.
    drop(channel);
    writer.await??;

    info!("Input closed, exiting");
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);
    match logging.format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn build_channel(
    config: &Config,
    line_tx: mpsc::UnboundedSender<String>,
    notice_tx: mpsc::UnboundedSender<String>,
) -> IrcChannel {
    let server = config
        .server
        .connected
        .then(|| Arc::new(IrcServer::new(config.server.name.clone(), line_tx)));
    IrcChannel::new(config.channel.name.clone(), server, notice_tx)
}

async fn run_shell(dispatcher: Dispatcher, channel: &IrcChannel) -> std::io::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        match parse_input(&line) {
            Input::Command { name, all_params } => {
                if let Err(e) = dispatcher.dispatch(name, all_params, channel) {
                    debug!(command = %name, code = e.error_code(), error = %e, "Command failed");
                }
            }
            Input::Text(text) => match channel.server() {
                Some(server) => {
                    let line = RawLine::Privmsg {
                        target: channel.name(),
                        text,
                    };
                    server.send_raw_message(&line.to_string());
                }
                None => channel.add_system_message("Not connected."),
            },
            Input::Empty => {}
        }
    }

    Ok(())
}

async fn write_output(
    mut lines: mpsc::UnboundedReceiver<String>,
    mut notices: mpsc::UnboundedReceiver<String>,
) -> std::io::Result<()> {
    let mut out = tokio::io::stdout();
    loop {
        let text = tokio::select! {
            Some(line) = lines.recv() => format!(">> {line}\n"),
            Some(notice) = notices.recv() => format!("-- {notice}\n"),
            else => break,
        };
        out.write_all(text.as_bytes()).await?;
        out.flush().await?;
    }
    Ok(())
}
