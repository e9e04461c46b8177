// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reply framing: assembling `BEGIN` .. `END` frames from individual lines.

use crate::FramingError;

const BEGIN: &str = "BEGIN";
const END: &str = "END";
const DATA: &str = "DATA";
const SIGHUP: &str = "SIGHUP";

/// Reply status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Error,
}

impl Status {
    fn parse(line: &str) -> Option<Self> {
        match line {
            "SUCCESS" => Some(Self::Success),
            "ERROR" => Some(Self::Error),
            _ => None,
        }
    }
}

/// One complete reply frame.
///
/// `data` is `None` when the frame had no DATA section and `Some` (possibly
/// empty) when it had one. The two are deliberately distinct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseFrame {
    /// The echoed command line, verbatim.
    pub command: String,
    pub status: Status,
    pub data: Option<Vec<String>>,
}

impl ResponseFrame {
    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }

    /// Whether the header declared a DATA section.
    pub fn has_data_section(&self) -> bool {
        self.data.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Begin,
    Command,
    Status,
    DataOrEnd,
    Count,
    Lines { remaining: usize },
    End,
    SighupEnd,
    Done,
}

impl State {
    fn expecting(&self) -> &'static str {
        match self {
            Self::Begin => "BEGIN",
            Self::Command => "the echoed command",
            Self::Status => "SUCCESS or ERROR",
            Self::DataOrEnd => "DATA or END",
            Self::Count => "the DATA line count",
            Self::Lines { .. } => "data lines",
            Self::End | Self::SighupEnd => "END",
            Self::Done => "nothing",
        }
    }
}

/// Line-fed state machine for one reply frame.
///
/// Feed each received line (terminator removed) with [`feed`](Self::feed)
/// until it yields the frame. Unsolicited `BEGIN`/`SIGHUP`/`END` broadcasts
/// that lircd sends after a configuration reload are skipped.
#[derive(Debug)]
pub struct FrameAssembler {
    state: State,
    command: String,
    status: Status,
    declared: usize,
    data: Option<Vec<String>>,
    sighups: usize,
}

impl Default for FrameAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameAssembler {
    pub fn new() -> Self {
        Self {
            state: State::Begin,
            command: String::new(),
            status: Status::Error,
            declared: 0,
            data: None,
            sighups: 0,
        }
    }

    /// Number of SIGHUP broadcasts skipped so far.
    pub fn sighups(&self) -> usize {
        self.sighups
    }

    /// True once a frame has been produced.
    pub fn is_done(&self) -> bool {
        self.state == State::Done
    }

    /// Consume one line. Returns the frame when this line completes it.
    pub fn feed(&mut self, line: &str) -> Result<Option<ResponseFrame>, FramingError> {
        match self.state {
            State::Begin => {
                if line != BEGIN {
                    return Err(FramingError::ExpectedBegin {
                        got: line.to_string(),
                    });
                }
                self.state = State::Command;
            }
            State::Command => {
                if line == SIGHUP {
                    self.state = State::SighupEnd;
                } else {
                    self.command = line.to_string();
                    self.state = State::Status;
                }
            }
            State::SighupEnd => {
                if line != END {
                    return Err(self.unexpected(line));
                }
                self.sighups += 1;
                self.state = State::Begin;
            }
            State::Status => {
                self.status = Status::parse(line)
                    .ok_or_else(|| FramingError::InvalidStatus {
                        got: line.to_string(),
                    })?;
                self.state = State::DataOrEnd;
            }
            State::DataOrEnd => match line {
                END => return Ok(Some(self.complete())),
                DATA => self.state = State::Count,
                _ => return Err(self.unexpected(line)),
            },
            State::Count => {
                let count = parse_count(line)?;
                self.declared = count;
                self.data = Some(Vec::with_capacity(count.min(1024)));
                self.state = match count {
                    0 => State::End,
                    n => State::Lines { remaining: n },
                };
            }
            State::Lines { remaining } => {
                if let Some(data) = self.data.as_mut() {
                    data.push(line.to_string());
                }
                self.state = match remaining - 1 {
                    0 => State::End,
                    n => State::Lines { remaining: n },
                };
            }
            State::End => {
                if line != END {
                    return Err(self.unexpected(line));
                }
                return Ok(Some(self.complete()));
            }
            State::Done => {
                return Err(FramingError::TrailingLine {
                    got: line.to_string(),
                })
            }
        }
        Ok(None)
    }

    /// Signal end of stream. Fails unless a frame was already completed.
    pub fn finish(&self) -> Result<(), FramingError> {
        match self.state {
            State::Done => Ok(()),
            State::Lines { remaining } => Err(FramingError::Truncated {
                expecting: format!("{} more of {} data line(s)", remaining, self.declared),
            }),
            state => Err(FramingError::Truncated {
                expecting: state.expecting().to_string(),
            }),
        }
    }

    fn unexpected(&self, line: &str) -> FramingError {
        FramingError::UnexpectedLine {
            expected: self.state.expecting(),
            got: line.to_string(),
        }
    }

    fn complete(&mut self) -> ResponseFrame {
        self.state = State::Done;
        ResponseFrame {
            command: std::mem::take(&mut self.command),
            status: self.status,
            data: self.data.take(),
        }
    }
}

fn parse_count(line: &str) -> Result<usize, FramingError> {
    let invalid = || FramingError::InvalidCount {
        got: line.to_string(),
    };
    if line.is_empty() || !line.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    line.parse().map_err(|_| invalid())
}

/// Parse a complete frame from a finite sequence of lines.
///
/// Lines after `END` are an error, as is running out of lines before it.
pub fn parse_frame<I, S>(lines: I) -> Result<ResponseFrame, FramingError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut assembler = FrameAssembler::new();
    let mut frame = None;
    for line in lines {
        let line = line.as_ref();
        if frame.is_some() {
            return Err(FramingError::TrailingLine {
                got: line.to_string(),
            });
        }
        frame = assembler.feed(line)?;
    }
    assembler.finish()?;
    frame.ok_or(FramingError::Truncated {
        expecting: END.to_string(),
    })
}

#[cfg(test)]
#[path = "frame_tests.rs"]
mod tests;
