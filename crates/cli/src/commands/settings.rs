// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Daemon configuration handlers

use anyhow::Result;
use clap::Subcommand;
use lircc_client::LircClient;

use crate::output::{print_ack, OutputFormat};

#[derive(Subcommand)]
pub enum SettingsCommand {
    /// Select the transmitters used for sending
    #[command(display_order = 20)]
    Transmitters {
        /// Transmitter numbers, starting at 1
        #[arg(required = true)]
        numbers: Vec<u32>,
    },
    /// Log received input to a file (omit the path to stop logging)
    #[command(display_order = 21)]
    InputLog {
        path: Option<String>,
    },
    /// Set a driver option
    #[command(display_order = 22)]
    DriverOption {
        key: String,
        value: String,
    },
    /// Make the daemon act as if an event had been received
    #[command(display_order = 23)]
    Simulate {
        /// Event line, e.g. "0000000000000001 00 KEY_UP tv"
        #[arg(required = true, num_args = 1..)]
        event: Vec<String>,
    },
}

pub async fn handle(
    command: SettingsCommand,
    client: &LircClient,
    format: OutputFormat,
) -> Result<()> {
    let reply = match command {
        SettingsCommand::Transmitters { numbers } => client.set_transmitters_list(&numbers).await?,
        SettingsCommand::InputLog { path } => client.set_input_log(path.as_deref()).await?,
        SettingsCommand::DriverOption { key, value } => {
            client.set_driver_option(&key, &value).await?
        }
        SettingsCommand::Simulate { event } => client.simulate(&event.join(" ")).await?,
    };
    print_ack(&reply, format)
}
