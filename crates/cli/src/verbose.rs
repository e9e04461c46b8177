// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use lircc_client::LineEcho;

/// `--verbose`: every line exchanged with the daemon, on stderr.
pub struct StderrEcho;

impl LineEcho for StderrEcho {
    fn sent(&self, line: &str) {
        eprintln!("Sending: \"{}\"", line);
    }

    fn received(&self, line: &str) {
        eprintln!("Received: \"{}\"", line);
    }
}
