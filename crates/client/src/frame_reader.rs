// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reading one reply frame from a connection.

use std::time::Duration;

use lircc_wire::{FrameAssembler, ResponseFrame};
use tracing::warn;

use crate::{ClientError, Connection, TransportError};

/// Read lines until a complete frame has been assembled.
///
/// `timeout` is re-armed for every line, so a long but steady reply is not
/// penalised while a stalled daemon is still bounded. End of stream before
/// `END` is a framing error.
pub async fn read_frame(
    conn: &mut Connection,
    timeout: Duration,
) -> Result<ResponseFrame, ClientError> {
    let mut assembler = FrameAssembler::new();
    loop {
        let line = match conn.read_line(timeout).await {
            Ok(line) => line,
            Err(TransportError::Eof) => {
                // A completed frame returns below, so this reports the truncation
                assembler.finish()?;
                return Err(TransportError::Eof.into());
            }
            Err(e) => return Err(e.into()),
        };
        if let Some(frame) = assembler.feed(&line)? {
            if assembler.sighups() > 0 {
                warn!(peer = conn.peer(), count = assembler.sighups(), "skipped SIGHUP broadcast");
            }
            return Ok(frame);
        }
    }
}

#[cfg(test)]
#[path = "frame_reader_tests.rs"]
mod tests;
