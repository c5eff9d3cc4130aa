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

use std::fmt::Write;

use colored::Color;
use colored::ColoredString;
use colored::Colorize;
use jiff::tz::TimeZone;
use serde_json::Map;
use serde_json::Value;

use crate::gelf::Severity;
use crate::layout::Layout;
use crate::record::Level;
use crate::record::Record;

/// A layout that formats log records as human-friendly text.
///
/// Output format:
///
/// ```text
/// 2024-08-11T22:44:57.172105+08:00 <3> payments: checkout.rs:51 charge failed
/// 2024-08-11T22:44:57.172219+08:00 <6> payments: checkout.rs:53 charge retried version=1.2.3
/// ```
///
/// The angle-bracketed number is the GELF severity code, colored by level.
/// A stacktrace, when present, follows on its own lines.
#[derive(Default, Debug, Clone)]
pub struct ConsoleLayout {
    fields: Map<String, Value>,
}

impl ConsoleLayout {
    /// Attach a constant field emitted on every record.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }
}

impl Layout for ConsoleLayout {
    fn format(&self, record: &Record) -> anyhow::Result<Vec<u8>> {
        let color = match record.level() {
            Level::Debug => Color::Blue,
            Level::Info => Color::Green,
            Level::Warn => Color::Yellow,
            Level::Error | Level::DPanic | Level::Panic | Level::Fatal => Color::Red,
        };

        let time = record
            .time()
            .to_zoned(TimeZone::system())
            .strftime("%Y-%m-%dT%H:%M:%S.%6f%:z");
        let code = Severity::from_level(record.level()).code();
        let severity = ColoredString::from(format!("<{code}>")).color(color);
        let message = record.payload();

        let mut line = String::new();
        write!(line, "{time} {severity} ")?;
        if !record.logger().is_empty() {
            write!(line, "{}: ", record.logger())?;
        }
        if let Some(caller) = record.caller() {
            write!(line, "{caller} ")?;
        }
        write!(line, "{message}")?;

        for (key, value) in self.fields.iter().chain(record.key_values()) {
            match value {
                Value::String(s) => write!(line, " {key}={s}")?,
                value => write!(line, " {key}={value}")?,
            }
        }

        if let Some(stacktrace) = record.stacktrace() {
            write!(line, "\n{stacktrace}")?;
        }

        Ok(line.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_line() {
        let record = Record::builder()
            .level(Level::Warn)
            .logger("payments")
            .file(Some("src/checkout.rs"))
            .line(Some(53))
            .payload("charge retried")
            .build();

        let layout = ConsoleLayout::default().field("version", "1.2.3");
        let bytes = layout.format(&record).unwrap();
        let line = String::from_utf8(bytes).unwrap();

        assert!(line.contains("<4>"));
        assert!(line.contains("payments: "));
        assert!(line.contains("checkout.rs:53"));
        assert!(line.contains("charge retried"));
        assert!(line.contains("version=1.2.3"));
    }
}
