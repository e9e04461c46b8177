// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `lircc`: command-line client for the LIRC daemon.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod commands;
mod exit_error;
mod output;
mod verbose;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use lircc_client::{ClientConfig, Endpoint, LircClient};
use tracing_subscriber::EnvFilter;

use crate::commands::{query::QueryCommand, send::SendCommand, settings::SettingsCommand};
use crate::exit_error::{ExitError, EXIT_USAGE};
use crate::output::OutputFormat;
use crate::verbose::StderrEcho;

#[derive(Parser)]
#[command(name = "lircc")]
#[command(about = "Send commands to and query the LIRC daemon")]
#[command(version)]
struct Cli {
    /// Connect over TCP to this host instead of the local socket
    #[arg(short, long, global = true)]
    address: Option<String>,

    /// TCP port (default 8765)
    #[arg(short, long, global = true)]
    port: Option<u16>,

    /// Daemon socket path (default $LIRC_SOCKET_PATH or /var/run/lirc/lircd)
    #[arg(short, long, global = true)]
    device: Option<PathBuf>,

    /// Seconds to wait for the daemon, fractions allowed
    #[arg(short, long, global = true, value_parser = parse_timeout)]
    timeout: Option<Duration>,

    /// Print every line sent to and received from the daemon
    #[arg(short, long, global = true)]
    verbose: bool,

    #[arg(short = 'o', long = "output", value_enum, default_value_t, global = true)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[command(flatten)]
    Send(SendCommand),

    #[command(flatten)]
    Query(QueryCommand),

    #[command(flatten)]
    Settings(SettingsCommand),
}

fn parse_timeout(s: &str) -> Result<Duration, String> {
    let secs: f64 = s.parse().map_err(|_| format!("'{}' is not a number of seconds", s))?;
    if secs.is_nan() || secs <= 0.0 {
        return Err("timeout must be greater than zero".to_string());
    }
    Duration::try_from_secs_f64(secs).map_err(|e| e.to_string())
}

impl Cli {
    fn client_config(&self) -> ClientConfig {
        let endpoint =
            Endpoint::resolve(self.address.as_deref(), self.port, self.device.as_deref());
        let mut config = ClientConfig::new(endpoint);
        if let Some(timeout) = self.timeout {
            config = config.with_timeout(timeout);
        }
        if self.verbose {
            config = config.with_echo(Arc::new(StderrEcho));
        }
        config
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("LIRCC_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

async fn run(cli: Cli) -> Result<()> {
    let mut client = LircClient::new(cli.client_config());
    let format = cli.output;

    match cli.command {
        Command::Send(command) => commands::send::handle(command, &mut client, format).await,
        Command::Query(command) => commands::query::handle(command, &client, format).await,
        Command::Settings(command) => commands::settings::handle(command, &client, format).await,
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // --help and --version are reported as errors by clap
            return if err.use_stderr() { ExitCode::from(EXIT_USAGE) } else { ExitCode::SUCCESS };
        }
    };
    init_logging();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let exit = ExitError::from(err);
            eprintln!("error: {}", exit);
            ExitCode::from(exit.code)
        }
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
