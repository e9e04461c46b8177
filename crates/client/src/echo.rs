// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

/// Receives every line exchanged with the daemon, verbatim and without
/// terminators. Used for verbose/diagnostic output.
pub trait LineEcho: Send + Sync {
    /// A request line is about to be written.
    fn sent(&self, line: &str);

    /// A reply line was received.
    fn received(&self, line: &str);
}
