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

use serde::Serialize;
use serde::Serializer;
use serde::ser::SerializeMap;
use serde_json::Map;
use serde_json::Value;

use crate::gelf;
use crate::gelf::Severity;
use crate::layout::Layout;
use crate::record::Record;

/// A layout that formats log records as GELF JSON objects.
///
/// Output format:
///
/// ```json
/// {"timestamp":1723387497.172,"level":3,"_logger":"payments","_caller":"checkout.rs:51","short_message":"charge failed"}
/// {"timestamp":1723387497.173,"level":6,"_logger":"payments","short_message":"charge retried","version":"1.2.3"}
/// ```
///
/// The severity is a bare integer on the 0-7 GELF scale. Constant fields
/// configured on the layout and record key-values are merged into the
/// object after the reserved fields.
///
/// # Examples
///
/// ```
/// use gelf_stream::layout::GelfJsonLayout;
///
/// let layout = GelfJsonLayout::default().field("version", "1.2.3");
/// ```
#[derive(Default, Debug, Clone)]
pub struct GelfJsonLayout {
    fields: Map<String, Value>,
}

impl GelfJsonLayout {
    /// Attach a constant field emitted on every record.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }
}

struct RecordLine<'a> {
    record: &'a Record<'a>,
    fields: &'a Map<String, Value>,
}

impl Serialize for RecordLine<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let record = self.record;
        let mut map = serializer.serialize_map(None)?;

        // epoch seconds with millisecond precision
        let timestamp = record.time().as_millisecond() as f64 / 1000.0;
        map.serialize_entry(gelf::TIMESTAMP_KEY, &timestamp)?;
        map.serialize_entry(gelf::LEVEL_KEY, &Severity::from_level(record.level()).code())?;
        if !record.logger().is_empty() {
            map.serialize_entry(gelf::LOGGER_KEY, record.logger())?;
        }
        if let Some(caller) = record.caller() {
            map.serialize_entry(gelf::CALLER_KEY, &caller)?;
        }
        map.serialize_entry(gelf::MESSAGE_KEY, record.payload())?;
        if let Some(stacktrace) = record.stacktrace() {
            map.serialize_entry(gelf::STACKTRACE_KEY, stacktrace)?;
        }

        for (key, value) in self.fields {
            map.serialize_entry(key, value)?;
        }
        for (key, value) in record.key_values() {
            map.serialize_entry(key, value)?;
        }

        map.end()
    }
}

impl Layout for GelfJsonLayout {
    fn format(&self, record: &Record) -> anyhow::Result<Vec<u8>> {
        let line = RecordLine {
            record,
            fields: &self.fields,
        };
        Ok(serde_json::to_vec(&line)?)
    }
}
