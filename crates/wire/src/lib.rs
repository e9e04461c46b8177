// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wire protocol for the lircd text control socket.
//!
//! Requests are single newline-terminated lines. Replies are line-oriented
//! frames:
//!
//! ```text
//! BEGIN
//! <echoed command>
//! SUCCESS | ERROR
//! [DATA
//! <n>
//! <line 1> .. <line n>]
//! END
//! ```
//!
//! Nothing in this crate performs I/O. The client crate feeds received lines
//! into a [`FrameAssembler`] and hands the finished [`ResponseFrame`] to
//! [`Reply::decode`].

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod error;
mod frame;
mod reply;
mod request;

pub use error::{CommandError, FramingError, ProtocolError, UsageError};
pub use frame::{parse_frame, FrameAssembler, ResponseFrame, Status};
pub use reply::{strip_code, Reply, ReplyError};
pub use request::{transmitter_mask, Expect, Request};
