// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;
use lircc_client::Reply;
use serde::Serialize;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct VersionJson<'a> {
    version: &'a str,
}

#[derive(Serialize)]
struct AckJson {
    ok: bool,
}

/// One entry per line, or a JSON array.
pub fn format_list(entries: &[String], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(entries.iter().map(|e| format!("{}\n", e)).collect()),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(entries)?)),
    }
}

pub fn format_version(version: &str, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(format!("{}\n", version)),
        OutputFormat::Json => {
            Ok(format!("{}\n", serde_json::to_string_pretty(&VersionJson { version })?))
        }
    }
}

/// Acknowledgement of a command that returns no data: silent in text mode.
pub fn format_ack(format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(String::new()),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string(&AckJson { ok: true })?)),
    }
}

pub fn print_list(entries: &[String], format: OutputFormat) -> anyhow::Result<()> {
    print!("{}", format_list(entries, format)?);
    Ok(())
}

pub fn print_version(version: &str, format: OutputFormat) -> anyhow::Result<()> {
    print!("{}", format_version(version, format)?);
    Ok(())
}

/// Print the acknowledgement, warning on stderr about any data the daemon
/// sent although none was expected.
pub fn print_ack(reply: &Reply, format: OutputFormat) -> anyhow::Result<()> {
    if reply.unexpected_data {
        for line in &reply.data {
            eprintln!("warning: unexpected reply data: {}", line);
        }
    }
    print!("{}", format_ack(format)?);
    Ok(())
}
