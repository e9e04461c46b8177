// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Client error taxonomy.

use std::time::Duration;

use lircc_wire::{CommandError, FramingError, ProtocolError, ReplyError, UsageError};
use thiserror::Error;

use crate::TransportError;

/// Coarse error category, for callers that only need to branch on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Connect,
    Timeout,
    Framing,
    Protocol,
    Command,
    Usage,
    Io,
}

/// Errors returned by [`LircClient`](crate::LircClient) operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The daemon could not be reached.
    #[error("cannot reach lircd: {0}")]
    Connect(#[source] TransportError),

    /// A reply line did not arrive in time.
    #[error("timed out waiting for lircd (timeout {0:?})")]
    Timeout(Duration),

    /// The reply did not follow the frame grammar.
    #[error("malformed reply from lircd: {0}")]
    Framing(#[from] FramingError),

    /// The reply was well-framed but inconsistent with the request.
    #[error("unexpected reply from lircd: {0}")]
    Protocol(#[from] ProtocolError),

    /// The daemon reported failure.
    #[error(transparent)]
    Command(#[from] CommandError),

    /// Invalid arguments or session state; nothing was sent.
    #[error(transparent)]
    Usage(#[from] UsageError),

    /// Mid-session I/O failure.
    #[error("I/O error talking to lircd: {0}")]
    Io(#[source] TransportError),
}

impl ClientError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Connect(_) => ErrorKind::Connect,
            Self::Timeout(_) => ErrorKind::Timeout,
            Self::Framing(_) => ErrorKind::Framing,
            Self::Protocol(_) => ErrorKind::Protocol,
            Self::Command(_) => ErrorKind::Command,
            Self::Usage(_) => ErrorKind::Usage,
            Self::Io(_) => ErrorKind::Io,
        }
    }

    /// Whether repeating the same call might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self.kind(), ErrorKind::Connect | ErrorKind::Timeout | ErrorKind::Io)
    }
}

impl From<TransportError> for ClientError {
    fn from(e: TransportError) -> Self {
        match e {
            TransportError::Connect { .. } | TransportError::ConnectTimeout { .. } => {
                Self::Connect(e)
            }
            TransportError::Timeout(timeout) => Self::Timeout(timeout),
            TransportError::InvalidEncoding => Self::Framing(FramingError::InvalidEncoding),
            other => Self::Io(other),
        }
    }
}

impl From<ReplyError> for ClientError {
    fn from(e: ReplyError) -> Self {
        match e {
            ReplyError::Protocol(e) => Self::Protocol(e),
            ReplyError::Command(e) => Self::Command(e),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
