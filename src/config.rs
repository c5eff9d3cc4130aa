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

//! A read-only, dot-path addressed view over a hierarchical configuration
//! tree.
//!
//! Loading configuration from files is the embedding application's business;
//! anything that deserializes into a [`serde_json::Value`] (JSON, YAML, TOML
//! via transcoding) can back a [`Config`].

use serde_json::Value;

/// A read-only accessor over a hierarchical configuration tree.
///
/// Keys are dot-separated paths; each segment selects a field of an object
/// node. Scalars are coerced the way loosely-typed config readers do: a
/// boolean `false` reads back as the string `"false"`, the strings `"true"`
/// and `"1"` read back as the boolean `true`.
///
/// # Examples
///
/// ```
/// use gelf_stream::Config;
///
/// let conf = Config::new(serde_json::json!({
///     "logging": { "caller": true },
/// }));
/// assert!(conf.is_set("logging.caller"));
/// assert!(conf.get_bool("logging.caller"));
/// ```
#[derive(Clone, Debug)]
pub struct Config {
    root: Value,
}

impl Config {
    /// Create a config view over the given tree.
    pub fn new(root: Value) -> Self {
        Config { root }
    }

    fn lookup(&self, path: &str) -> Option<&Value> {
        let mut node = &self.root;
        for segment in path.split('.') {
            node = node.as_object()?.get(segment)?;
        }
        Some(node)
    }

    /// Whether the given path resolves to a non-null value.
    pub fn is_set(&self, path: &str) -> bool {
        self.lookup(path).is_some_and(|node| !node.is_null())
    }

    /// The value at the given path rendered as a string.
    ///
    /// Booleans and numbers are coerced to their literal text. Objects,
    /// arrays, null, and absent paths yield `None`.
    pub fn get_str(&self, path: &str) -> Option<String> {
        match self.lookup(path)? {
            Value::String(s) => Some(s.clone()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// The value at the given path interpreted as a boolean.
    ///
    /// Accepts booleans, the strings `"true"` and `"1"` (ASCII
    /// case-insensitive), and non-zero numbers. Anything else is `false`.
    pub fn get_bool(&self, path: &str) -> bool {
        match self.lookup(path) {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => s.eq_ignore_ascii_case("true") || s == "1",
            Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn fixture() -> Config {
        Config::new(json!({
            "app": { "version": "1.2.3" },
            "logging": {
                "development": true,
                "stacktrace": false,
                "caller": "1",
                "cores": { "json": { "level": "debug", "encoding": "json" } },
            },
        }))
    }

    #[test]
    fn test_is_set() {
        let conf = fixture();
        assert!(conf.is_set("logging.development"));
        assert!(conf.is_set("logging.cores.json.level"));
        assert!(!conf.is_set("logging.cores.console"));
        assert!(!conf.is_set("nope"));
    }

    #[test]
    fn test_get_str_coerces_scalars() {
        let conf = fixture();
        assert_eq!(conf.get_str("app.version").as_deref(), Some("1.2.3"));
        assert_eq!(conf.get_str("logging.stacktrace").as_deref(), Some("false"));
        assert_eq!(conf.get_str("logging.development").as_deref(), Some("true"));
        assert_eq!(conf.get_str("logging.cores"), None);
        assert_eq!(conf.get_str("missing"), None);
    }

    #[test]
    fn test_get_bool_coerces_scalars() {
        let conf = fixture();
        assert!(conf.get_bool("logging.development"));
        assert!(conf.get_bool("logging.caller"));
        assert!(!conf.get_bool("logging.stacktrace"));
        assert!(!conf.get_bool("app.version"));
        assert!(!conf.get_bool("missing"));
    }
}
