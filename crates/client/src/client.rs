// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! High-level lircd client.

use std::time::Instant;

use lircc_wire::{strip_code, transmitter_mask, Reply, Request, UsageError};
use tracing::{debug, warn};

use crate::{read_frame, ClientConfig, ClientError, Connection};

/// Remote and command of the most recent successful send-start.
///
/// Owned by one [`LircClient`]; only `send_start` (which takes `&mut self`)
/// writes it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub last_remote: Option<String>,
    pub last_command: Option<String>,
}

impl SessionState {
    fn last_started(&self) -> Option<(&str, &str)> {
        match (&self.last_remote, &self.last_command) {
            (Some(remote), Some(command)) => Some((remote.as_str(), command.as_str())),
            _ => None,
        }
    }
}

/// Client for the lircd control protocol.
///
/// Each call opens its own connection, so a client holds no socket between
/// calls. Independent clients never share session state.
#[derive(Debug, Clone, Default)]
pub struct LircClient {
    config: ClientConfig,
    session: SessionState,
}

impl LircClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            session: SessionState::default(),
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Transmit `command` of `remote` once, plus `repeat` repetitions if given.
    pub async fn send_once(
        &self,
        remote: &str,
        command: &str,
        repeat: Option<u32>,
    ) -> Result<Reply, ClientError> {
        let request = Request::SendOnce {
            remote: remote.to_string(),
            command: command.to_string(),
            repeat,
        };
        self.send(&request).await
    }

    /// Start transmitting until stopped, and remember the pair for
    /// [`send_stop_last`](Self::send_stop_last).
    pub async fn send_start(&mut self, remote: &str, command: &str) -> Result<Reply, ClientError> {
        let request = Request::SendStart {
            remote: remote.to_string(),
            command: command.to_string(),
        };
        self.execute(&request).await
    }

    /// Stop transmitting `command` of `remote`.
    pub async fn send_stop(&self, remote: &str, command: &str) -> Result<Reply, ClientError> {
        let request = Request::SendStop {
            remote: remote.to_string(),
            command: command.to_string(),
        };
        self.send(&request).await
    }

    /// Stop the transmission started by the last successful `send_start`.
    ///
    /// Fails with [`UsageError::NoPriorSendStart`] without touching the
    /// network when there was none. The remembered pair is kept, so calling
    /// this twice sends the same stop twice.
    pub async fn send_stop_last(&self) -> Result<Reply, ClientError> {
        let (remote, command) =
            self.session.last_started().ok_or(UsageError::NoPriorSendStart)?;
        self.send_stop(remote, command).await
    }

    /// Names of the remotes known to the daemon.
    pub async fn list_remotes(&self) -> Result<Vec<String>, ClientError> {
        Ok(self.send(&Request::ListRemotes).await?.data)
    }

    /// Commands of `remote`.
    ///
    /// lircd prefixes each command with its code. Unless `show_codes` is set
    /// the code is removed; with it, lines are returned verbatim.
    pub async fn list_commands(
        &self,
        remote: &str,
        show_codes: bool,
    ) -> Result<Vec<String>, ClientError> {
        let request = Request::ListCommands {
            remote: remote.to_string(),
        };
        let data = self.send(&request).await?.data;
        if show_codes {
            return Ok(data);
        }
        Ok(data.iter().map(|line| strip_code(line).into_owned()).collect())
    }

    /// Version string of the daemon.
    pub async fn version(&self) -> Result<String, ClientError> {
        let mut data = self.send(&Request::Version).await?.data;
        // decode guarantees exactly one line
        Ok(data.pop().unwrap_or_default())
    }

    /// Select transmitters by bitmask; bit n enables transmitter n+1.
    pub async fn set_transmitters(&self, mask: u32) -> Result<Reply, ClientError> {
        self.send(&Request::SetTransmitters { mask }).await
    }

    /// Select transmitters by their 1-based numbers.
    pub async fn set_transmitters_list(&self, transmitters: &[u32]) -> Result<Reply, ClientError> {
        let mask = transmitter_mask(transmitters)?;
        self.set_transmitters(mask).await
    }

    /// Log received input to `path`; `None` stops logging.
    pub async fn set_input_log(&self, path: Option<&str>) -> Result<Reply, ClientError> {
        self.send(&Request::SetInputLog {
            path: path.map(str::to_string),
        })
        .await
    }

    pub async fn set_driver_option(&self, key: &str, value: &str) -> Result<Reply, ClientError> {
        let request = Request::DriverOption {
            key: key.to_string(),
            value: value.to_string(),
        };
        self.send(&request).await
    }

    /// Make the daemon behave as if `event` had been received.
    pub async fn simulate(&self, event: &str) -> Result<Reply, ClientError> {
        self.send(&Request::Simulate {
            event: event.to_string(),
        })
        .await
    }

    /// Run any request, keeping session state as the dedicated operations do.
    ///
    /// A successful `SendStart` is remembered for
    /// [`send_stop_last`](Self::send_stop_last).
    pub async fn execute(&mut self, request: &Request) -> Result<Reply, ClientError> {
        let reply = self.send(request).await?;
        if let Request::SendStart { remote, command } = request {
            self.session.last_remote = Some(remote.clone());
            self.session.last_command = Some(command.clone());
        }
        Ok(reply)
    }

    /// Validate, send, and decode one request on a fresh connection.
    ///
    /// The connection is closed before returning, whatever the outcome.
    async fn send(&self, request: &Request) -> Result<Reply, ClientError> {
        request.validate()?;
        let line = request.render();
        let start = Instant::now();

        let mut conn = Connection::connect(&self.config.endpoint, self.config.timeout)
            .await?
            .with_echo(self.config.echo.clone());
        let result = self.exchange(&mut conn, request, &line).await;
        conn.close().await;

        debug!(
            request = %line,
            endpoint = %self.config.endpoint,
            ok = result.is_ok(),
            elapsed_ms = start.elapsed().as_micros() as f64 / 1000.0,
            "lircd request"
        );

        let reply = result?;
        if reply.unexpected_data {
            warn!(request = %line, data = ?reply.data, "reply carried unexpected data");
        }
        Ok(reply)
    }

    async fn exchange(
        &self,
        conn: &mut Connection,
        request: &Request,
        line: &str,
    ) -> Result<Reply, ClientError> {
        conn.write_line(line).await?;
        let frame = read_frame(conn, self.config.timeout).await?;
        Ok(Reply::decode(request, frame)?)
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
