// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Requests understood by lircd.
//!
//! Each variant knows its keyword, how its arguments are validated, how it
//! renders to a request line, and whether its reply should carry data.
//! Adding a request kind means adding a variant here; framing and decoding
//! stay untouched.

use crate::UsageError;

/// Highest transmitter number addressable through the 32-bit mask.
const MAX_TRANSMITTER: u32 = 32;

/// What the reply to a request is expected to contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expect {
    /// No DATA section. One is tolerated but flagged.
    Nothing,
    /// A DATA section with any number of lines, including zero.
    Lines,
    /// A DATA section with exactly one line.
    SingleLine,
}

/// A request to the daemon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Transmit a command once, optionally repeated.
    SendOnce { remote: String, command: String, repeat: Option<u32> },

    /// Start transmitting a command until stopped.
    SendStart { remote: String, command: String },

    /// Stop a transmission started with `SendStart`.
    SendStop { remote: String, command: String },

    /// List the remotes the daemon knows about.
    ListRemotes,

    /// List the commands of a remote.
    ListCommands { remote: String },

    /// Daemon version.
    Version,

    /// Select transmitters by bitmask (bit n enables transmitter n+1).
    SetTransmitters { mask: u32 },

    /// Start logging received input to `path`, or stop logging when `None`.
    SetInputLog { path: Option<String> },

    /// Set a driver option.
    DriverOption { key: String, value: String },

    /// Inject a fake received event. The event string may contain spaces.
    Simulate { event: String },
}

impl Request {
    /// Protocol keyword.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::SendOnce { .. } => "SEND_ONCE",
            Self::SendStart { .. } => "SEND_START",
            Self::SendStop { .. } => "SEND_STOP",
            Self::ListRemotes | Self::ListCommands { .. } => "LIST",
            Self::Version => "VERSION",
            Self::SetTransmitters { .. } => "SET_TRANSMITTERS",
            Self::SetInputLog { .. } => "SET_INPUTLOG",
            Self::DriverOption { .. } => "DRV_OPTION",
            Self::Simulate { .. } => "SIMULATE",
        }
    }

    /// Reply shape this request expects.
    pub fn expects(&self) -> Expect {
        match self {
            Self::ListRemotes | Self::ListCommands { .. } => Expect::Lines,
            Self::Version => Expect::SingleLine,
            _ => Expect::Nothing,
        }
    }

    /// Check arguments against the rules for this request kind.
    pub fn validate(&self) -> Result<(), UsageError> {
        match self {
            Self::SendOnce { remote, command, repeat } => {
                word("remote", remote)?;
                word("command", command)?;
                if *repeat == Some(0) {
                    return Err(UsageError::InvalidRepeatCount);
                }
                Ok(())
            }
            Self::SendStart { remote, command } | Self::SendStop { remote, command } => {
                word("remote", remote)?;
                word("command", command)
            }
            Self::ListCommands { remote } => word("remote", remote),
            Self::ListRemotes | Self::Version | Self::SetTransmitters { .. } => Ok(()),
            Self::SetInputLog { path } => match path {
                Some(path) => word("path", path),
                None => Ok(()),
            },
            Self::DriverOption { key, value } => {
                word("key", key)?;
                word("value", value)
            }
            Self::Simulate { event } => {
                single_line("event", event)?;
                if event.trim().is_empty() {
                    return Err(UsageError::EmptyArgument { name: "event" });
                }
                Ok(())
            }
        }
    }

    /// Argument tokens, in order.
    pub fn args(&self) -> Vec<String> {
        match self {
            Self::SendOnce { remote, command, repeat } => {
                let mut args = vec![remote.clone(), command.clone()];
                args.extend(repeat.map(|n| n.to_string()));
                args
            }
            Self::SendStart { remote, command } | Self::SendStop { remote, command } => {
                vec![remote.clone(), command.clone()]
            }
            Self::ListRemotes | Self::Version => vec![],
            Self::ListCommands { remote } => vec![remote.clone()],
            Self::SetTransmitters { mask } => vec![mask.to_string()],
            Self::SetInputLog { path } => path.iter().cloned().collect(),
            Self::DriverOption { key, value } => vec![key.clone(), value.clone()],
            Self::Simulate { event } => vec![event.clone()],
        }
    }

    /// The request line, without its terminator.
    pub fn render(&self) -> String {
        let mut line = self.keyword().to_string();
        for arg in self.args() {
            line.push(' ');
            line.push_str(&arg);
        }
        line
    }
}

/// Convert 1-based transmitter numbers to the daemon's bitmask.
pub fn transmitter_mask(transmitters: &[u32]) -> Result<u32, UsageError> {
    if transmitters.is_empty() {
        return Err(UsageError::NoTransmitters);
    }
    transmitters.iter().try_fold(0u32, |mask, &number| {
        if number == 0 || number > MAX_TRANSMITTER {
            return Err(UsageError::InvalidTransmitter { number });
        }
        Ok(mask | (1 << (number - 1)))
    })
}

fn single_line(name: &'static str, value: &str) -> Result<(), UsageError> {
    if value.contains(['\n', '\r']) {
        return Err(UsageError::LineBreak { name });
    }
    Ok(())
}

fn word(name: &'static str, value: &str) -> Result<(), UsageError> {
    if value.is_empty() {
        return Err(UsageError::EmptyArgument { name });
    }
    single_line(name, value)?;
    if value.chars().any(char::is_whitespace) {
        return Err(UsageError::Whitespace {
            name,
            value: value.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
