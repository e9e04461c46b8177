// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scripted in-process daemon for client tests.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, UnixListener};

use crate::{Endpoint, LineEcho};

/// What the daemon does with one connection after reading the request line.
#[derive(Debug, Clone)]
pub(crate) enum Script {
    /// Write the text and close.
    Reply(String),
    /// Write the lines one by one, pausing before each.
    Slow { lines: Vec<String>, gap: Duration },
    /// Write the text, then keep the connection open without sending more.
    Stall(String),
}

/// Build a reply frame; each entry becomes one line.
pub(crate) fn frame(lines: &[&str]) -> String {
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

pub(crate) struct FakeDaemon {
    pub endpoint: Endpoint,
    requests: Arc<Mutex<Vec<String>>>,
    connections: Arc<Mutex<usize>>,
    _dir: Option<tempfile::TempDir>,
}

impl FakeDaemon {
    /// Listen on an ephemeral TCP port; each script entry serves one connection.
    pub async fn tcp(script: Vec<Script>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let daemon = Self::empty(Endpoint::tcp("127.0.0.1", port), None);
        let (requests, connections) = (daemon.requests.clone(), daemon.connections.clone());
        tokio::spawn(async move {
            for step in script {
                let Ok((stream, _)) = listener.accept().await else { return };
                *connections.lock() += 1;
                tokio::spawn(serve(stream, step, requests.clone()));
            }
        });
        daemon
    }

    /// Listen on a Unix socket in a temporary directory.
    pub async fn unix(script: Vec<Script>) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lircd");
        let listener = UnixListener::bind(&path).unwrap();
        let daemon = Self::empty(Endpoint::unix(&path), Some(dir));
        let (requests, connections) = (daemon.requests.clone(), daemon.connections.clone());
        tokio::spawn(async move {
            for step in script {
                let Ok((stream, _)) = listener.accept().await else { return };
                *connections.lock() += 1;
                tokio::spawn(serve(stream, step, requests.clone()));
            }
        });
        daemon
    }

    fn empty(endpoint: Endpoint, dir: Option<tempfile::TempDir>) -> Self {
        Self {
            endpoint,
            requests: Arc::new(Mutex::new(Vec::new())),
            connections: Arc::new(Mutex::new(0)),
            _dir: dir,
        }
    }

    /// Request lines received so far, terminators removed.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }

    pub fn connections(&self) -> usize {
        *self.connections.lock()
    }
}

async fn serve<S>(stream: S, step: Script, requests: Arc<Mutex<Vec<String>>>)
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let (reader, mut writer) = tokio::io::split(stream);
    let mut reader = BufReader::new(reader);
    let mut line = String::new();
    if reader.read_line(&mut line).await.unwrap_or(0) == 0 {
        return;
    }
    requests.lock().push(line.trim_end_matches('\n').to_string());

    match step {
        Script::Reply(text) => {
            let _ = writer.write_all(text.as_bytes()).await;
            let _ = writer.shutdown().await;
        }
        Script::Slow { lines, gap } => {
            for line in lines {
                tokio::time::sleep(gap).await;
                let _ = writer.write_all(format!("{}\n", line).as_bytes()).await;
            }
            let _ = writer.shutdown().await;
        }
        Script::Stall(text) => {
            let _ = writer.write_all(text.as_bytes()).await;
            tokio::time::sleep(Duration::from_secs(30)).await;
        }
    }
}

/// Records echoed lines in order, prefixed with `>` (sent) or `<` (received).
#[derive(Default)]
pub(crate) struct RecordingEcho {
    lines: Mutex<Vec<String>>,
}

impl RecordingEcho {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }
}

impl LineEcho for RecordingEcho {
    fn sent(&self, line: &str) {
        self.lines.lock().push(format!("> {}", line));
    }

    fn received(&self, line: &str) {
        self.lines.lock().push(format!("< {}", line));
    }
}
