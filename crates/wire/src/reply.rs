// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Decoding a frame against the request that produced it.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::{CommandError, Expect, ProtocolError, Request, ResponseFrame, Status};

/// Leading hexadecimal code in `LIST <remote>` output, e.g. `000000000000ff00 KEY_POWER`.
#[allow(clippy::expect_used)]
static CODE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-fA-F]* +").expect("constant regex pattern is valid"));

/// Why a frame could not be turned into a successful reply.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReplyError {
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error(transparent)]
    Command(#[from] CommandError),
}

/// A successful reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// The echoed command line.
    pub command: String,
    /// DATA lines; empty when the frame had no DATA section.
    pub data: Vec<String>,
    /// The reply carried data the request did not ask for.
    pub unexpected_data: bool,
}

impl Reply {
    /// Check `frame` against `request` and extract the payload.
    ///
    /// An echo that does not match the sent line means the stream is out of
    /// step with the requests and is always fatal.
    pub fn decode(request: &Request, frame: ResponseFrame) -> Result<Self, ReplyError> {
        let sent = request.render();
        if !echo_matches(&sent, &frame.command) {
            return Err(ProtocolError::EchoMismatch {
                sent,
                echoed: frame.command,
            }
            .into());
        }

        let ResponseFrame { command, status, data } = frame;
        if status == Status::Error {
            return Err(CommandError::new(command, data.unwrap_or_default()).into());
        }

        match (request.expects(), data) {
            (Expect::Nothing, data) => {
                let data = data.unwrap_or_default();
                let unexpected_data = !data.is_empty();
                Ok(Self {
                    command,
                    data,
                    unexpected_data,
                })
            }
            (Expect::Lines | Expect::SingleLine, None) => {
                Err(ProtocolError::MissingData { command }.into())
            }
            (Expect::SingleLine, Some(data)) if data.len() != 1 => {
                Err(ProtocolError::LineCount {
                    command,
                    expected: 1,
                    got: data.len(),
                }
                .into())
            }
            (Expect::Lines | Expect::SingleLine, Some(data)) => {
                Ok(Self {
                    command,
                    data,
                    unexpected_data: false,
                })
            }
        }
    }
}

/// lircd echoes the request line; compare token by token so that spacing
/// differences alone are not treated as desynchronisation.
fn echo_matches(sent: &str, echoed: &str) -> bool {
    sent.split_whitespace().eq(echoed.split_whitespace())
}

/// Remove the leading hexadecimal code from a `LIST <remote>` line.
pub fn strip_code(line: &str) -> Cow<'_, str> {
    CODE_PREFIX.replace(line, "")
}

#[cfg(test)]
#[path = "reply_tests.rs"]
mod tests;
