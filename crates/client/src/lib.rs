// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Client for the lircd control socket.
//!
//! Every operation opens a fresh connection (TCP or Unix socket), writes one
//! request line, reads one reply frame with a per-line timeout, and closes
//! the connection again on every exit path.
//!
//! ```rust,ignore
//! use lircc_client::{ClientConfig, Endpoint, LircClient};
//!
//! let mut client = LircClient::new(ClientConfig::new(Endpoint::tcp("localhost", 8765)));
//! for remote in client.list_remotes().await? {
//!     println!("{remote}");
//! }
//! client.send_start("livingroom", "vol_up").await?;
//! client.send_stop_last().await?;
//! ```

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod client;
mod config;
mod connection;
mod echo;
mod endpoint;
pub mod env;
mod error;
mod frame_reader;

#[cfg(test)]
mod test_support;

pub use client::{LircClient, SessionState};
pub use config::ClientConfig;
pub use connection::{Connection, TransportError};
pub use echo::LineEcho;
pub use endpoint::Endpoint;
pub use error::{ClientError, ErrorKind};
pub use frame_reader::read_frame;

pub use lircc_wire::{CommandError, FramingError, ProtocolError, Reply, Request, UsageError};
