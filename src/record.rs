// Copyright 2025 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Log records, severity levels, and the shared level threshold.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::AtomicU8;
use std::sync::atomic::Ordering;

use jiff::Timestamp;
use serde_json::Map;
use serde_json::Value;

/// An enum representing the available verbosity levels of the logger.
///
/// Levels are ordered from the most verbose to the most severe, so
/// `record.level() >= threshold` admits records at the threshold and above.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Designates lower priority information.
    Debug,
    /// Designates useful information.
    Info,
    /// Designates hazardous situations.
    Warn,
    /// Designates very serious errors.
    Error,
    /// Designates errors that are critical in development but recoverable in
    /// production.
    DPanic,
    /// Designates errors followed by a panic.
    Panic,
    /// Designates errors followed by process exit.
    Fatal,
}

impl Level {
    /// Return the string representation of the `Level`.
    ///
    /// This returns the same string as the `fmt::Display` implementation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::DPanic => "dpanic",
            Level::Panic => "panic",
            Level::Fatal => "fatal",
        }
    }

    fn from_u8(value: u8) -> Level {
        match value {
            0 => Level::Debug,
            1 => Level::Info,
            2 => Level::Warn,
            3 => Level::Error,
            4 => Level::DPanic,
            5 => Level::Panic,
            _ => Level::Fatal,
        }
    }
}

impl fmt::Debug for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// The error returned when a string does not name a known [`Level`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized level {0:?}")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Level, Self::Err> {
        for level in [
            Level::Debug,
            Level::Info,
            Level::Warn,
            Level::Error,
            Level::DPanic,
            Level::Panic,
            Level::Fatal,
        ] {
            if s.eq_ignore_ascii_case(level.as_str()) {
                return Ok(level);
            }
        }

        Err(ParseLevelError(s.to_string()))
    }
}

/// A shared minimum-level threshold that can be adjusted at runtime.
///
/// Cloning yields a handle to the same underlying value, so call sites can
/// keep logging through a core while another component raises or lowers the
/// threshold.
#[derive(Clone, Debug)]
pub struct AtomicLevel(Arc<AtomicU8>);

impl AtomicLevel {
    /// Create a new threshold handle at the given level.
    pub fn new(level: Level) -> Self {
        AtomicLevel(Arc::new(AtomicU8::new(level as u8)))
    }

    /// The current threshold.
    pub fn get(&self) -> Level {
        Level::from_u8(self.0.load(Ordering::Relaxed))
    }

    /// Replace the threshold.
    pub fn set(&self, level: Level) {
        self.0.store(level as u8, Ordering::Relaxed);
    }
}

/// The payload of a log message.
#[derive(Clone, Debug)]
pub struct Record<'a> {
    // the observed time
    now: Timestamp,

    // the metadata
    level: Level,
    logger: &'a str,
    file: Option<&'a str>,
    line: Option<u32>,

    // the payload
    payload: &'a str,
    stacktrace: Option<String>,

    // structural logging
    kvs: Map<String, Value>,
}

impl<'a> Record<'a> {
    /// The observed time.
    pub fn time(&self) -> Timestamp {
        self.now
    }

    /// The verbosity level of the message.
    pub fn level(&self) -> Level {
        self.level
    }

    /// The name of the logger that produced the message.
    pub fn logger(&self) -> &'a str {
        self.logger
    }

    /// The source file containing the message.
    pub fn file(&self) -> Option<&'a str> {
        self.file
    }

    /// The line containing the message.
    pub fn line(&self) -> Option<u32> {
        self.line
    }

    /// The call site rendered as `filename:line`.
    // obtain filename only from the record's full file path
    // reason: the full file path is noisy for log consumers
    pub fn caller(&self) -> Option<String> {
        let file = self.file?;
        let filename: Cow<'_, str> = std::path::Path::new(file)
            .file_name()
            .map(std::ffi::OsStr::to_string_lossy)
            .unwrap_or(Cow::Borrowed(file));
        match self.line {
            Some(line) => Some(format!("{filename}:{line}")),
            None => Some(filename.into_owned()),
        }
    }

    /// The message body.
    pub fn payload(&self) -> &'a str {
        self.payload
    }

    /// The stacktrace attached to the message, if any.
    pub fn stacktrace(&self) -> Option<&str> {
        self.stacktrace.as_deref()
    }

    /// The structured key-values.
    pub fn key_values(&self) -> &Map<String, Value> {
        &self.kvs
    }

    /// Create a builder initialized with the current record's values.
    pub fn to_builder(&self) -> RecordBuilder<'a> {
        RecordBuilder {
            record: self.clone(),
        }
    }

    /// Returns a new builder.
    pub fn builder() -> RecordBuilder<'a> {
        RecordBuilder::default()
    }
}

/// Builder for [`Record`].
#[derive(Debug)]
pub struct RecordBuilder<'a> {
    record: Record<'a>,
}

impl Default for RecordBuilder<'_> {
    fn default() -> Self {
        RecordBuilder {
            record: Record {
                now: Timestamp::now(),
                level: Level::Info,
                logger: "",
                file: None,
                line: None,
                payload: "",
                stacktrace: None,
                kvs: Map::new(),
            },
        }
    }
}

impl<'a> RecordBuilder<'a> {
    /// Set [`time`](Record::time).
    pub fn time(mut self, time: Timestamp) -> Self {
        self.record.now = time;
        self
    }

    /// Set [`level`](Record::level).
    pub fn level(mut self, level: Level) -> Self {
        self.record.level = level;
        self
    }

    /// Set [`logger`](Record::logger).
    pub fn logger(mut self, logger: &'a str) -> Self {
        self.record.logger = logger;
        self
    }

    /// Set [`file`](Record::file).
    pub fn file(mut self, file: Option<&'a str>) -> Self {
        self.record.file = file;
        self
    }

    /// Set [`line`](Record::line).
    pub fn line(mut self, line: Option<u32>) -> Self {
        self.record.line = line;
        self
    }

    /// Set [`payload`](Record::payload).
    pub fn payload(mut self, payload: &'a str) -> Self {
        self.record.payload = payload;
        self
    }

    /// Set [`stacktrace`](Record::stacktrace).
    pub fn stacktrace(mut self, stacktrace: impl Into<String>) -> Self {
        self.record.stacktrace = Some(stacktrace.into());
        self
    }

    /// Set [`key_values`](Record::key_values).
    pub fn key_values(mut self, kvs: Map<String, Value>) -> Self {
        self.record.kvs = kvs;
        self
    }

    /// Invoke the builder and return a `Record`.
    pub fn build(self) -> Record<'a> {
        self.record
    }
}
