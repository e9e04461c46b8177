// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers: a scripted daemon and a fluent wrapper around the binary.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::os::unix::net::UnixListener;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use assert_cmd::assert::Assert;
use assert_cmd::Command;
use parking_lot::Mutex;
use predicates::prelude::*;

/// Build a reply frame; each entry becomes one line.
pub fn frame(lines: &[&str]) -> String {
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// One scripted connection.
pub enum Step {
    Reply(String),
    /// Write the text, then hold the connection open without finishing.
    Stall(String),
}

/// Daemon stand-in serving one step per accepted connection.
pub struct Daemon {
    port: Option<u16>,
    socket: Option<PathBuf>,
    requests: Arc<Mutex<Vec<String>>>,
    _dir: Option<tempfile::TempDir>,
}

impl Daemon {
    pub fn tcp(steps: Vec<Step>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = requests.clone();
        thread::spawn(move || {
            for step in steps {
                let Ok((stream, _)) = listener.accept() else { return };
                serve(stream, step, &recorded);
            }
        });
        Self { port: Some(port), socket: None, requests, _dir: None }
    }

    pub fn unix(steps: Vec<Step>) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lircd");
        let listener = UnixListener::bind(&path).unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = requests.clone();
        thread::spawn(move || {
            for step in steps {
                let Ok((stream, _)) = listener.accept() else { return };
                serve(stream, step, &recorded);
            }
        });
        Self { port: None, socket: Some(path), requests, _dir: Some(dir) }
    }

    pub fn socket(&self) -> &Path {
        self.socket.as_deref().expect("unix daemon")
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }
}

/// Answer with a successful frame for `command` carrying no data.
pub fn ok(command: &str) -> Step {
    Step::Reply(frame(&["BEGIN", command, "SUCCESS", "END"]))
}

/// Answer with a successful frame for `command` carrying `data`.
pub fn data(command: &str, data: &[&str]) -> Step {
    let count = data.len().to_string();
    let mut lines = vec!["BEGIN", command, "SUCCESS", "DATA", count.as_str()];
    lines.extend_from_slice(data);
    lines.push("END");
    Step::Reply(frame(&lines))
}

fn serve<S: Read + Write>(stream: S, step: Step, requests: &Mutex<Vec<String>>) {
    let mut reader = BufReader::new(stream);
    let mut line = String::new();
    if reader.read_line(&mut line).unwrap_or(0) == 0 {
        return;
    }
    requests.lock().push(line.trim_end().to_string());

    let stream = reader.get_mut();
    match step {
        Step::Reply(text) => {
            let _ = stream.write_all(text.as_bytes());
        }
        Step::Stall(text) => {
            let _ = stream.write_all(text.as_bytes());
            let _ = stream.flush();
            thread::sleep(Duration::from_secs(10));
        }
    }
}

/// `lircc` with a clean environment.
pub fn lircc() -> CliBuilder {
    let mut cmd = Command::cargo_bin("lircc").unwrap();
    cmd.env_remove("LIRC_SOCKET_PATH").env_remove("LIRCC_TIMEOUT_MS").env_remove("LIRCC_LOG");
    cmd.timeout(Duration::from_secs(20));
    CliBuilder { cmd }
}

pub struct CliBuilder {
    cmd: Command,
}

impl CliBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        self.cmd.env(key, value);
        self
    }

    /// Point the client at a TCP daemon.
    pub fn on(mut self, daemon: &Daemon) -> Self {
        let port = daemon.port.expect("tcp daemon").to_string();
        self.cmd.args(["-a", "127.0.0.1", "-p", &port]);
        self
    }

    pub fn passes(mut self) -> Outcome {
        Outcome(self.cmd.assert().success())
    }

    pub fn fails_with(mut self, code: i32) -> Outcome {
        Outcome(self.cmd.assert().code(code))
    }
}

pub struct Outcome(Assert);

impl Outcome {
    pub fn stdout_has(self, expected: &str) -> Self {
        Self(self.0.stdout(predicate::str::contains(expected)))
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        Self(self.0.stdout(expected.to_string()))
    }

    pub fn stderr_has(self, expected: &str) -> Self {
        Self(self.0.stderr(predicate::str::contains(expected)))
    }

    pub fn stdout_json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.0.get_output().stdout).unwrap()
    }
}
