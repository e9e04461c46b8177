// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for request construction and reply decoding.

use std::fmt;

use thiserror::Error;

/// Caller-side misuse, detected before any I/O takes place.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UsageError {
    /// A required argument was empty.
    #[error("{name} must not be empty")]
    EmptyArgument {
        /// Which argument.
        name: &'static str,
    },

    /// A single-token argument contained whitespace.
    #[error("{name} must be a single word, got '{value}'")]
    Whitespace {
        /// Which argument.
        name: &'static str,
        /// The offending value.
        value: String,
    },

    /// An argument contained a line terminator, which would split the request.
    #[error("{name} must not contain line breaks")]
    LineBreak {
        /// Which argument.
        name: &'static str,
    },

    /// Repeat count of zero.
    #[error("repeat count must be a positive integer")]
    InvalidRepeatCount,

    /// Transmitter numbers are 1-based and at most 32.
    #[error("transmitter {number} is out of range (1..=32)")]
    InvalidTransmitter {
        /// The offending transmitter number.
        number: u32,
    },

    /// Transmitter list was empty.
    #[error("at least one transmitter is required")]
    NoTransmitters,

    /// Argument-less send-stop without a preceding send-start.
    #[error("send-stop without arguments requires a prior send-start")]
    NoPriorSendStart,
}

/// The reply stream does not follow the frame grammar.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FramingError {
    #[error("expected BEGIN, got '{got}'")]
    ExpectedBegin { got: String },

    #[error("expected SUCCESS or ERROR, got '{got}'")]
    InvalidStatus { got: String },

    #[error("expected {expected}, got '{got}'")]
    UnexpectedLine { expected: &'static str, got: String },

    #[error("invalid DATA line count '{got}'")]
    InvalidCount { got: String },

    #[error("truncated frame: stream ended while expecting {expecting}")]
    Truncated { expecting: String },

    #[error("unexpected line after END: '{got}'")]
    TrailingLine { got: String },

    #[error("reply line is not valid UTF-8")]
    InvalidEncoding,
}

/// A well-framed reply that is inconsistent with the request that produced it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("command echo mismatch: sent '{sent}', daemon echoed '{echoed}'")]
    EchoMismatch { sent: String, echoed: String },

    #[error("expected data in reply to '{command}', got none")]
    MissingData { command: String },

    #[error("expected {expected} data line(s) in reply to '{command}', got {got}")]
    LineCount { command: String, expected: usize, got: usize },
}

/// The daemon answered with `ERROR`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandError {
    /// The echoed command line.
    pub command: String,
    /// Diagnostic lines from the DATA section, possibly empty.
    pub diagnostics: Vec<String>,
}

impl CommandError {
    pub fn new(command: impl Into<String>, diagnostics: Vec<String>) -> Self {
        Self {
            command: command.into(),
            diagnostics,
        }
    }

    /// Diagnostic text joined with newlines. Empty when the daemon sent no detail.
    pub fn message(&self) -> String {
        self.diagnostics.join("\n")
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "daemon rejected '{}'", self.command)?;
        if !self.diagnostics.is_empty() {
            write!(f, ": {}", self.diagnostics.join("; "))?;
        }
        Ok(())
    }
}

impl std::error::Error for CommandError {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
