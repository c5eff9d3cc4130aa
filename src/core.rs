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

//! The logging core and the profiles it is built from.

use std::backtrace::Backtrace;

use serde_json::Map;
use serde_json::Value;

use crate::append::Append;
use crate::append::Stderr;
use crate::error::Error;
use crate::layout::ConsoleLayout;
use crate::layout::GelfJsonLayout;
use crate::layout::Layout;
use crate::record::AtomicLevel;
use crate::record::Level;
use crate::record::Record;

/// Name of the structured JSON encoding.
pub const JSON_ENCODING: &str = "json";
/// Name of the human-friendly console encoding.
pub const CONSOLE_ENCODING: &str = "console";

/// The assembled pre-build configuration of a [`Core`].
///
/// Start from [`Profile::production`] or [`Profile::development`], adjust the
/// knobs, then [`build`](Profile::build) the core.
///
/// # Examples
///
/// ```
/// use gelf_stream::Level;
/// use gelf_stream::Profile;
///
/// let core = Profile::production()
///     .level(Level::Debug)
///     .field("version", "1.2.3")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug)]
pub struct Profile {
    encoding: String,
    level: Level,
    caller: bool,
    stacktrace: bool,
    fields: Map<String, Value>,
    appends: Vec<Box<dyn Append>>,
}

impl Profile {
    /// The production defaults: JSON encoding, Info threshold, caller and
    /// stacktrace capture enabled.
    pub fn production() -> Self {
        Profile {
            encoding: JSON_ENCODING.to_string(),
            level: Level::Info,
            caller: true,
            stacktrace: true,
            fields: Map::new(),
            appends: vec![],
        }
    }

    /// The development defaults: console encoding and a Debug threshold.
    pub fn development() -> Self {
        Profile {
            encoding: CONSOLE_ENCODING.to_string(),
            ..Profile::production()
        }
        .level(Level::Debug)
    }

    /// Set the output encoding by name.
    ///
    /// The name is resolved on [`build`](Profile::build); an unknown name is
    /// a build error.
    pub fn encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = encoding.into();
        self
    }

    /// Set the minimum emitted level.
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Enable or disable caller capture.
    pub fn caller(mut self, caller: bool) -> Self {
        self.caller = caller;
        self
    }

    /// Enable or disable stacktrace capture.
    pub fn stacktrace(mut self, stacktrace: bool) -> Self {
        self.stacktrace = stacktrace;
        self
    }

    /// Attach a constant field emitted on every record.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Add an appender. When none is added, the core writes to stderr.
    pub fn append(mut self, append: impl Into<Box<dyn Append>>) -> Self {
        self.appends.push(append.into());
        self
    }

    /// The configured encoding name.
    pub fn encoding_name(&self) -> &str {
        &self.encoding
    }

    /// The configured minimum level.
    pub fn min_level(&self) -> Level {
        self.level
    }

    /// Whether caller capture is enabled.
    pub fn caller_enabled(&self) -> bool {
        self.caller
    }

    /// Whether stacktrace capture is enabled.
    pub fn stacktrace_enabled(&self) -> bool {
        self.stacktrace
    }

    /// The constant fields emitted on every record.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Build the [`Core`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Build`] if the encoding name is not recognized.
    pub fn build(self) -> Result<Core, Error> {
        let layout: Box<dyn Layout> = match self.encoding.as_str() {
            JSON_ENCODING => {
                let mut layout = GelfJsonLayout::default();
                for (key, value) in self.fields {
                    layout = layout.field(key, value);
                }
                Box::new(layout)
            }
            CONSOLE_ENCODING => {
                let mut layout = ConsoleLayout::default();
                for (key, value) in self.fields {
                    layout = layout.field(key, value);
                }
                Box::new(layout)
            }
            encoding => {
                return Err(Error::Build {
                    source: anyhow::anyhow!("unrecognized encoding {encoding:?}"),
                });
            }
        };

        let mut appends = self.appends;
        if appends.is_empty() {
            appends.push(Box::new(Stderr));
        }

        Ok(Core {
            level: AtomicLevel::new(self.level),
            caller: self.caller,
            stacktrace: self.stacktrace,
            layout,
            appends,
        })
    }
}

/// A logging core: filters records by a shared level threshold, renders them
/// through its layout, and hands the bytes to its appenders.
#[derive(Debug)]
pub struct Core {
    level: AtomicLevel,
    caller: bool,
    stacktrace: bool,
    layout: Box<dyn Layout>,
    appends: Vec<Box<dyn Append>>,
}

impl Core {
    /// Whether a record at the given level would be emitted.
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.level.get()
    }

    /// The current minimum emitted level.
    pub fn level(&self) -> Level {
        self.level.get()
    }

    /// Adjust the minimum emitted level.
    ///
    /// Takes effect for all subsequent records, from any thread.
    pub fn set_level(&self, level: Level) {
        self.level.set(level);
    }

    /// Whether caller capture is enabled.
    pub fn caller_enabled(&self) -> bool {
        self.caller
    }

    /// Whether stacktrace capture is enabled.
    pub fn stacktrace_enabled(&self) -> bool {
        self.stacktrace
    }

    /// Emit a record, reporting failures to stderr.
    pub fn log(&self, record: &Record) {
        if let Err(err) = self.try_log(record) {
            eprintln!("failed to emit log record: {err:#}");
        }
    }

    /// Emit a record.
    pub fn try_log(&self, record: &Record) -> anyhow::Result<()> {
        if !self.enabled(record.level()) {
            return Ok(());
        }

        let capture_stacktrace =
            self.stacktrace && record.level() >= Level::Error && record.stacktrace().is_none();

        let adjusted: Option<Record> = if !self.caller || capture_stacktrace {
            let mut builder = record.to_builder();
            if !self.caller {
                builder = builder.file(None).line(None);
            }
            if capture_stacktrace {
                builder = builder.stacktrace(Backtrace::force_capture().to_string());
            }
            Some(builder.build())
        } else {
            None
        };
        let record = adjusted.as_ref().unwrap_or(record);

        let bytes = self.layout.format(record)?;
        for append in &self.appends {
            append.append(&bytes)?;
        }
        Ok(())
    }

    /// Flush all appenders.
    pub fn flush(&self) {
        for append in &self.appends {
            append.flush();
        }
    }
}
