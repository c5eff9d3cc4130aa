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

use serde_json::Map;
use serde_json::Value;

use crate::core::Core;
use crate::record::Level;
use crate::record::Record;

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Self::Error,
            log::Level::Warn => Self::Warn,
            log::Level::Info => Self::Info,
            log::Level::Debug => Self::Debug,
            log::Level::Trace => Self::Debug,
        }
    }
}

impl log::Log for Core {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        Core::enabled(self, metadata.level().into())
    }

    fn log(&self, record: &log::Record) {
        if !Core::enabled(self, record.level().into()) {
            return;
        }

        // key-values
        struct KvCollector<'a> {
            kvs: &'a mut Map<String, Value>,
        }

        impl<'kvs> log::kv::VisitSource<'kvs> for KvCollector<'_> {
            fn visit_pair(
                &mut self,
                key: log::kv::Key<'kvs>,
                value: log::kv::Value<'kvs>,
            ) -> Result<(), log::kv::Error> {
                self.kvs.insert(key.to_string(), value.to_string().into());
                Ok(())
            }
        }

        let mut kvs = Map::new();
        let mut visitor = KvCollector { kvs: &mut kvs };
        if record.key_values().visit(&mut visitor).is_err() {
            kvs.clear();
        }

        let payload = record.args().to_string();
        let native = Record::builder()
            .level(record.level().into())
            .logger(record.target())
            .file(record.file())
            .line(record.line())
            .payload(&payload)
            .key_values(kvs)
            .build();

        Core::log(self, &native);
    }

    fn flush(&self) {
        Core::flush(self);
    }
}

impl Core {
    /// Install this core as the global [`log`] logger.
    ///
    /// `log` levels map onto the native scale with both `Trace` and `Debug`
    /// rendered as GELF debug. This should be called early in the execution
    /// of a Rust program; any log events that occur before installation are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if a global logger has already been set.
    pub fn install(self) -> Result<(), log::SetLoggerError> {
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(log::LevelFilter::Trace);
        Ok(())
    }
}
