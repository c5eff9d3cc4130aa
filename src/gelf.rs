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

//! The GELF severity scale and record field names.
//!
//! See the GELF payload specification:
//! <https://go2docs.graylog.org/current/getting_in_log_data/gelf.html>

use crate::record::Level;

/// GELF name of the record timestamp field.
pub const TIMESTAMP_KEY: &str = "timestamp";
/// GELF name of the severity field; its value is a bare integer.
pub const LEVEL_KEY: &str = "level";
/// GELF name of the logger name field.
pub const LOGGER_KEY: &str = "_logger";
/// GELF name of the call site field.
pub const CALLER_KEY: &str = "_caller";
/// GELF name of the message field.
pub const MESSAGE_KEY: &str = "short_message";
/// GELF name of the stacktrace field.
pub const STACKTRACE_KEY: &str = "full_message";

/// The eight syslog-derived GELF severity codes.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(u8)]
pub enum Severity {
    /// System is unusable.
    Emergency = 0,
    /// Action must be taken immediately.
    Alert = 1,
    /// Critical conditions.
    Critical = 2,
    /// Error conditions.
    Error = 3,
    /// Warning conditions.
    Warning = 4,
    /// Normal but significant conditions.
    Notice = 5,
    /// Informational messages.
    Informational = 6,
    /// Debug-level messages.
    Debug = 7,
}

impl Severity {
    /// Map a native [`Level`] onto its GELF severity.
    ///
    /// The match is exhaustive, so every native level maps to exactly one
    /// code and an unmapped input cannot exist.
    pub fn from_level(level: Level) -> Severity {
        match level {
            Level::Debug => Severity::Debug,
            Level::Info => Severity::Informational,
            Level::Warn => Severity::Warning,
            Level::Error => Severity::Error,
            Level::DPanic => Severity::Emergency,
            Level::Panic => Severity::Emergency,
            Level::Fatal => Severity::Emergency,
        }
    }

    /// The numeric code emitted in the record's level field.
    pub fn code(self) -> u8 {
        self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_table() {
        assert_eq!(Severity::from_level(Level::Debug).code(), 7);
        assert_eq!(Severity::from_level(Level::Info).code(), 6);
        assert_eq!(Severity::from_level(Level::Warn).code(), 4);
        assert_eq!(Severity::from_level(Level::Error).code(), 3);
        assert_eq!(Severity::from_level(Level::DPanic).code(), 0);
        assert_eq!(Severity::from_level(Level::Panic).code(), 0);
        assert_eq!(Severity::from_level(Level::Fatal).code(), 0);
    }
}
