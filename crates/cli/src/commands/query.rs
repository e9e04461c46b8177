// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Daemon query handlers

use anyhow::Result;
use clap::Subcommand;
use lircc_client::LircClient;

use crate::output::{print_list, print_version, OutputFormat};

#[derive(Subcommand)]
pub enum QueryCommand {
    /// List the remotes known to the daemon
    #[command(display_order = 10)]
    Remotes,
    /// List the commands of a remote
    #[command(display_order = 11)]
    Commands {
        /// Remote name
        remote: String,
        /// Keep the code in front of each command name
        #[arg(short, long)]
        codes: bool,
    },
    /// Show the daemon version
    #[command(display_order = 12)]
    Version,
}

pub async fn handle(
    command: QueryCommand,
    client: &LircClient,
    format: OutputFormat,
) -> Result<()> {
    match command {
        QueryCommand::Remotes => {
            let remotes = client.list_remotes().await?;
            print_list(&remotes, format)?;
        }
        QueryCommand::Commands { remote, codes } => {
            let commands = client.list_commands(&remote, codes).await?;
            print_list(&commands, format)?;
        }
        QueryCommand::Version => {
            let version = client.version().await?;
            print_version(&version, format)?;
        }
    }
    Ok(())
}
