// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::{env, Endpoint, LineEcho};

/// Client configuration.
#[derive(Clone)]
pub struct ClientConfig {
    /// Daemon address
    pub endpoint: Endpoint,
    /// Applied to connection setup and to each reply line
    pub timeout: Duration,
    /// Verbose mode: receives every line sent and received
    pub echo: Option<Arc<dyn LineEcho>>,
}

impl ClientConfig {
    /// Configuration for `endpoint` with the default (or `LIRCC_TIMEOUT_MS`) timeout.
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            timeout: env::timeout(),
            echo: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_echo(mut self, echo: Arc<dyn LineEcho>) -> Self {
        self.echo = Some(echo);
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(Endpoint::default())
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .field("echo", &self.echo.is_some())
            .finish()
    }
}
