// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Daemon address.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::env;

/// Where the daemon listens. Exactly one transport is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Tcp { host: String, port: u16 },
    Unix { path: PathBuf },
}

impl Endpoint {
    pub fn tcp(host: impl Into<String>, port: u16) -> Self {
        Self::Tcp {
            host: host.into(),
            port,
        }
    }

    pub fn unix(path: impl AsRef<Path>) -> Self {
        Self::Unix {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Pick an endpoint from optional address, port, and socket path.
    ///
    /// An address takes priority over a socket path. Without an address the
    /// socket path is used, falling back to `LIRC_SOCKET_PATH` and then the
    /// default path. The port defaults to 8765.
    pub fn resolve(address: Option<&str>, port: Option<u16>, socket_path: Option<&Path>) -> Self {
        match address {
            Some(host) => {
                if let Some(path) = socket_path {
                    warn!(
                        address = host,
                        socket = %path.display(),
                        "both address and socket path given, using address"
                    );
                }
                Self::tcp(host, port.unwrap_or(env::DEFAULT_PORT))
            }
            None => match socket_path {
                Some(path) => Self::unix(path),
                None => Self::unix(env::socket_path()),
            },
        }
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self::unix(env::socket_path())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tcp { host, port } => write!(f, "{}:{}", host, port),
            Self::Unix { path } => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
#[path = "endpoint_tests.rs"]
mod tests;
