// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Transmit command handlers

use anyhow::Result;
use clap::Subcommand;
use lircc_client::{ClientError, LircClient, UsageError};

use crate::output::{print_ack, OutputFormat};

#[derive(Subcommand)]
pub enum SendCommand {
    /// Transmit a command
    #[command(display_order = 1)]
    Send {
        /// Remote name
        remote: String,
        /// Command (button) name
        command: String,
        /// Number of times to transmit
        #[arg(short, long, default_value_t = 1)]
        count: u32,
    },
    /// Start transmitting a command repeatedly
    #[command(display_order = 2)]
    Start {
        /// Remote name
        remote: String,
        /// Command (button) name
        command: String,
    },
    /// Stop a repeating transmission
    #[command(display_order = 3)]
    Stop {
        /// Remote name (omit both to stop the last started command)
        #[arg(requires = "command")]
        remote: Option<String>,
        /// Command (button) name
        command: Option<String>,
    },
}

/// Protocol repeat token for "transmit `count` times": the first
/// transmission is implicit.
pub fn repeat_for_count(count: u32) -> Result<Option<u32>, UsageError> {
    match count {
        0 => Err(UsageError::InvalidRepeatCount),
        1 => Ok(None),
        n => Ok(Some(n - 1)),
    }
}

pub async fn handle(
    command: SendCommand,
    client: &mut LircClient,
    format: OutputFormat,
) -> Result<()> {
    let reply = match command {
        SendCommand::Send { remote, command, count } => {
            let repeat = repeat_for_count(count).map_err(ClientError::from)?;
            client.send_once(&remote, &command, repeat).await?
        }
        SendCommand::Start { remote, command } => client.send_start(&remote, &command).await?,
        SendCommand::Stop { remote: Some(remote), command: Some(command) } => {
            client.send_stop(&remote, &command).await?
        }
        SendCommand::Stop { .. } => client.send_stop_last().await?,
    };
    print_ack(&reply, format)
}

#[cfg(test)]
#[path = "send_tests.rs"]
mod tests;
