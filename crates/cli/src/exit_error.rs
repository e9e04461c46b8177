// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Custom error type that carries a process exit code.
//!
//! Commands return `anyhow` errors; `main()` converts them into an
//! `ExitError` and owns process termination.

use std::fmt;

use lircc_client::{ClientError, ErrorKind};

/// Bad arguments, unknown subcommand, or missing session state.
pub const EXIT_USAGE: u8 = 1;
/// The daemon could not be reached.
pub const EXIT_CONNECT: u8 = 2;
/// The daemon reported an error.
pub const EXIT_COMMAND: u8 = 3;
/// The reply was malformed or did not match the request.
pub const EXIT_BAD_REPLY: u8 = 4;
pub const EXIT_TIMEOUT: u8 = 5;

#[derive(Debug)]
pub struct ExitError {
    pub code: u8,
    pub message: String,
}

impl ExitError {
    pub fn new(code: u8, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<&ClientError> for ExitError {
    fn from(err: &ClientError) -> Self {
        let code = match err.kind() {
            ErrorKind::Usage => EXIT_USAGE,
            ErrorKind::Connect => EXIT_CONNECT,
            ErrorKind::Command => EXIT_COMMAND,
            ErrorKind::Framing | ErrorKind::Protocol | ErrorKind::Io => EXIT_BAD_REPLY,
            ErrorKind::Timeout => EXIT_TIMEOUT,
        };
        Self::new(code, err.to_string())
    }
}

impl From<anyhow::Error> for ExitError {
    fn from(err: anyhow::Error) -> Self {
        let err = match err.downcast::<ExitError>() {
            Ok(exit) => return exit,
            Err(err) => err,
        };
        match err.downcast_ref::<ClientError>() {
            Some(client) => Self::from(client),
            None => Self::new(EXIT_USAGE, format!("{:#}", err)),
        }
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExitError {}

#[cfg(test)]
#[path = "exit_error_tests.rs"]
mod tests;
