// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Line-oriented transport over TCP or a Unix socket.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use thiserror::Error;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::{TcpStream, UnixStream};
use tokio_util::codec::{FramedRead, FramedWrite, LinesCodec, LinesCodecError};
use tracing::{debug, trace};

use crate::{Endpoint, LineEcho};

/// Longest reply line accepted before the connection is abandoned.
const MAX_LINE_LENGTH: usize = 64 * 1024;

type BoxedReader = Box<dyn AsyncRead + Send + Unpin>;
type BoxedWriter = Box<dyn AsyncWrite + Send + Unpin>;

/// Transport failures.
///
/// `Connect` and `ConnectTimeout` happen before anything was sent; all other
/// variants happen mid-session and leave the connection unusable.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("could not connect to {endpoint}: {source}")]
    Connect {
        endpoint: String,
        #[source]
        source: io::Error,
    },

    #[error("connecting to {endpoint} timed out after {timeout:?}")]
    ConnectTimeout { endpoint: String, timeout: Duration },

    #[error("no reply line within {0:?}")]
    Timeout(Duration),

    #[error("connection closed by daemon")]
    Eof,

    #[error("reply line exceeds the maximum line length")]
    LineTooLong,

    #[error("reply line is not valid UTF-8")]
    InvalidEncoding,

    #[error("request line must not contain line terminators")]
    EmbeddedTerminator,

    #[error("connection is no longer usable")]
    Unusable,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<LinesCodecError> for TransportError {
    fn from(e: LinesCodecError) -> Self {
        match e {
            LinesCodecError::MaxLineLengthExceeded => Self::LineTooLong,
            LinesCodecError::Io(e) if e.kind() == io::ErrorKind::InvalidData => {
                Self::InvalidEncoding
            }
            LinesCodecError::Io(e) => Self::Io(e),
        }
    }
}

/// One open connection to the daemon.
///
/// After a timeout or any mid-session error the connection refuses further
/// reads and writes; partially received lines are never handed out.
pub struct Connection {
    peer: String,
    lines: FramedRead<BoxedReader, LinesCodec>,
    sink: FramedWrite<BoxedWriter, LinesCodec>,
    echo: Option<Arc<dyn LineEcho>>,
    broken: bool,
    closed: bool,
}

impl Connection {
    /// Open a connection, bounding the attempt by `timeout`.
    pub async fn connect(endpoint: &Endpoint, timeout: Duration) -> Result<Self, TransportError> {
        let target = endpoint.to_string();
        let connect_failed = |source: io::Error| TransportError::Connect {
            endpoint: target.clone(),
            source,
        };
        let timed_out = || TransportError::ConnectTimeout {
            endpoint: target.clone(),
            timeout,
        };

        let (reader, writer): (BoxedReader, BoxedWriter) = match endpoint {
            Endpoint::Tcp { host, port } => {
                let connecting = TcpStream::connect((host.as_str(), *port));
                let stream = tokio::time::timeout(timeout, connecting)
                    .await
                    .map_err(|_| timed_out())?
                    .map_err(connect_failed)?;
                stream.set_nodelay(true).map_err(connect_failed)?;
                let (reader, writer) = stream.into_split();
                (Box::new(reader), Box::new(writer))
            }
            Endpoint::Unix { path } => {
                let stream = tokio::time::timeout(timeout, UnixStream::connect(path))
                    .await
                    .map_err(|_| timed_out())?
                    .map_err(connect_failed)?;
                let (reader, writer) = stream.into_split();
                (Box::new(reader), Box::new(writer))
            }
        };

        debug!(endpoint = %target, "connected to lircd");
        Ok(Self::from_parts(target, reader, writer))
    }

    /// Wrap an already established byte stream.
    pub fn from_parts(peer: impl Into<String>, reader: BoxedReader, writer: BoxedWriter) -> Self {
        Self {
            peer: peer.into(),
            lines: FramedRead::new(reader, LinesCodec::new_with_max_length(MAX_LINE_LENGTH)),
            sink: FramedWrite::new(writer, LinesCodec::new()),
            echo: None,
            broken: false,
            closed: false,
        }
    }

    /// Report every line sent and received to `echo`.
    pub fn with_echo(mut self, echo: Option<Arc<dyn LineEcho>>) -> Self {
        self.echo = echo;
        self
    }

    /// Peer description, for diagnostics.
    pub fn peer(&self) -> &str {
        &self.peer
    }

    /// False once the connection failed mid-session or was closed.
    pub fn is_usable(&self) -> bool {
        !self.broken && !self.closed
    }

    /// Write `text` followed by exactly one newline.
    pub async fn write_line(&mut self, text: &str) -> Result<(), TransportError> {
        if !self.is_usable() {
            return Err(TransportError::Unusable);
        }
        if text.contains(['\n', '\r']) {
            return Err(TransportError::EmbeddedTerminator);
        }
        if let Some(echo) = &self.echo {
            echo.sent(text);
        }
        trace!(peer = %self.peer, line = text, "send");
        if let Err(e) = self.sink.send(text).await {
            self.broken = true;
            return Err(e.into());
        }
        Ok(())
    }

    /// Read one line, waiting at most `timeout` for it.
    ///
    /// The terminator (`\n` or `\r\n`) is removed; everything else is kept.
    pub async fn read_line(&mut self, timeout: Duration) -> Result<String, TransportError> {
        if !self.is_usable() {
            return Err(TransportError::Unusable);
        }
        let result = match tokio::time::timeout(timeout, self.lines.next()).await {
            Err(_) => Err(TransportError::Timeout(timeout)),
            Ok(None) => Err(TransportError::Eof),
            Ok(Some(line)) => line.map_err(TransportError::from),
        };
        match result {
            Ok(line) => {
                trace!(peer = %self.peer, line = %line, "recv");
                if let Some(echo) = &self.echo {
                    echo.received(&line);
                }
                Ok(line)
            }
            Err(e) => {
                self.broken = true;
                Err(e)
            }
        }
    }

    /// Flush and shut down the write side. Safe to call more than once.
    pub async fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        if let Err(e) = SinkExt::<&str>::close(&mut self.sink).await {
            debug!(peer = %self.peer, error = %e, "error closing connection");
        }
    }
}

#[cfg(test)]
#[path = "connection_tests.rs"]
mod tests;
