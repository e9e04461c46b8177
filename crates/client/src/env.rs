// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Defaults and environment variable access.

use std::path::PathBuf;
use std::time::Duration;

/// Default lircd TCP port.
pub const DEFAULT_PORT: u16 = 8765;

/// Default lircd socket path.
pub const DEFAULT_SOCKET_PATH: &str = "/var/run/lirc/lircd";

/// Default per-line read timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Socket path: LIRC_SOCKET_PATH > /var/run/lirc/lircd
pub fn socket_path() -> PathBuf {
    std::env::var("LIRC_SOCKET_PATH")
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SOCKET_PATH))
}

/// Read timeout (default 5s, configurable via `LIRCC_TIMEOUT_MS`).
pub fn timeout() -> Duration {
    parse_timeout_ms(std::env::var("LIRCC_TIMEOUT_MS").ok().as_deref())
}

/// Positive millisecond count, else the default.
fn parse_timeout_ms(value: Option<&str>) -> Duration {
    value
        .and_then(|s| s.trim().parse::<u64>().ok())
        .filter(|ms| *ms > 0)
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_TIMEOUT)
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
