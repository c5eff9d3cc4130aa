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

//! Configuration-driven core factories.

use std::fmt;

use crate::config::Config;
use crate::core::Core;
use crate::core::JSON_ENCODING;
use crate::core::Profile;
use crate::error::Error;
use crate::record::Level;

/// A factory that assembles a [`Core`] from a configuration subtree.
///
/// `path` is the dot-separated location of the core's own settings; the first
/// segment of the path addresses settings shared across cores (development
/// mode, stacktrace policy, caller policy).
pub trait CoreFactory: fmt::Debug + Send + Sync + 'static {
    /// The stable identifier by which configuration selects this factory.
    fn name(&self) -> &'static str;

    /// Assemble a core from the settings under `path`.
    fn new_core(&self, conf: &Config, path: &str) -> Result<Core, Error>;
}

impl<T: CoreFactory> From<T> for Box<dyn CoreFactory> {
    fn from(value: T) -> Self {
        Box::new(value)
    }
}

/// A registry of [`CoreFactory`] instances keyed by name.
///
/// `new_core` dispatches on the `type` key of the addressed subtree.
///
/// # Examples
///
/// ```
/// use gelf_stream::Config;
/// use gelf_stream::FactoryRegistry;
/// use gelf_stream::GelfStreamFactory;
///
/// let mut registry = FactoryRegistry::default();
/// registry.register(GelfStreamFactory);
///
/// let conf = Config::new(serde_json::json!({
///     "logging": { "cores": { "json": { "type": "gelf_stream" } } },
/// }));
/// let core = registry.new_core(&conf, "logging.cores.json").unwrap();
/// ```
#[derive(Debug, Default)]
pub struct FactoryRegistry {
    factories: Vec<Box<dyn CoreFactory>>,
}

impl FactoryRegistry {
    /// Add a factory to the registry.
    pub fn register(&mut self, factory: impl Into<Box<dyn CoreFactory>>) {
        self.factories.push(factory.into());
    }

    /// Assemble a core from the subtree at `path`, selecting the factory
    /// named by `<path>.type`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Build`] if no registered factory matches, or
    /// whatever error the selected factory produces.
    pub fn new_core(&self, conf: &Config, path: &str) -> Result<Core, Error> {
        let ty = conf.get_str(&format!("{path}.type")).unwrap_or_default();
        let factory = self
            .factories
            .iter()
            .find(|factory| factory.name() == ty)
            .ok_or_else(|| Error::Build {
                source: anyhow::anyhow!("no core factory registered for type {ty:?}"),
            })?;
        factory.new_core(conf, path)
    }
}

/// The `gelf_stream` core factory.
///
/// Assembles a core whose output uses GELF field names and severity codes.
/// The configuration keys consumed, with `R` the first segment of the path
/// and `P` the path itself:
///
/// | key            | type   | effect                                          |
/// |----------------|--------|-------------------------------------------------|
/// | `R.development`| bool   | development instead of production defaults      |
/// | `P.encoding`   | string | output encoding name, defaults to `json`        |
/// | `R.stacktrace` | string | disables capture only for the literal `"false"` |
/// | `R.caller`     | bool   | enables or disables caller capture              |
/// | `P.level`      | string | minimum emitted level, adjustable after build   |
/// | `app.version`  | string | constant `version` field on every record        |
///
/// Every key is optional; absent keys fall back to the selected defaults.
///
/// # Examples
///
/// Example YAML configuration consumed through a [`Config`] tree:
///
/// ```yaml
/// logging:
///   cores:
///     json:
///       type: "gelf_stream"
///       level: "debug"
///       encoding: "json"
///   caller: true
///   stacktrace: "error"
///   development: true
/// ```
#[derive(Debug, Default)]
pub struct GelfStreamFactory;

impl GelfStreamFactory {
    /// Assemble the pre-build [`Profile`] from the settings under `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `<path>.level` does not name a known
    /// level.
    pub fn profile(conf: &Config, path: &str) -> Result<Profile, Error> {
        let root = path.split('.').next().unwrap_or(path);

        let mut profile = if conf.get_bool(&format!("{root}.development")) {
            Profile::development()
        } else {
            Profile::production()
        };

        // the wire format is always GELF; the encoding override only picks
        // how the GELF fields are rendered
        profile = profile.encoding(JSON_ENCODING);
        if let Some(encoding) = conf.get_str(&format!("{path}.encoding")) {
            profile = profile.encoding(encoding);
        }

        let key = format!("{root}.stacktrace");
        if conf.is_set(&key) {
            // compatibility rule: only the literal string "false" disables
            // capture, any other value enables it
            profile = profile.stacktrace(conf.get_str(&key).as_deref() != Some("false"));
        }

        let key = format!("{root}.caller");
        if conf.is_set(&key) {
            profile = profile.caller(conf.get_bool(&key));
        }

        let key = format!("{path}.level");
        if conf.is_set(&key) {
            let value = conf.get_str(&key).unwrap_or_default();
            let level = value.parse::<Level>().map_err(|source| Error::Config {
                value: value.clone(),
                source,
            })?;
            profile = profile.level(level);
        }

        if let Some(version) = conf.get_str("app.version") {
            profile = profile.field("version", version);
        }

        Ok(profile)
    }
}

impl CoreFactory for GelfStreamFactory {
    fn name(&self) -> &'static str {
        "gelf_stream"
    }

    fn new_core(&self, conf: &Config, path: &str) -> Result<Core, Error> {
        GelfStreamFactory::profile(conf, path)?.build()
    }
}
