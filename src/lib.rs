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

//! gelf-stream builds logging cores whose output conforms to the GELF
//! (Graylog Extended Log Format) field-naming and severity conventions,
//! driven by a hierarchical configuration tree.
//!
//! # Overview
//!
//! The entry point is the `gelf_stream` core factory: given a [`Config`]
//! view over a configuration tree and the dot-path of a core's settings, it
//! assembles a [`Core`] that filters records by an adjustable level
//! threshold, renders them with GELF field names and the 0-7 severity
//! scale, and writes them to its appenders.
//!
//! # Examples
//!
//! ```
//! use gelf_stream::Config;
//! use gelf_stream::FactoryRegistry;
//! use gelf_stream::GelfStreamFactory;
//!
//! let mut registry = FactoryRegistry::default();
//! registry.register(GelfStreamFactory);
//!
//! let conf = Config::new(serde_json::json!({
//!     "app": { "version": "1.2.3" },
//!     "logging": {
//!         "caller": true,
//!         "cores": { "json": { "type": "gelf_stream", "level": "debug" } },
//!     },
//! }));
//!
//! let core = registry.new_core(&conf, "logging.cores.json").unwrap();
//! core.install().unwrap();
//!
//! log::info!("this record is rendered as GELF JSON");
//! ```

pub mod append;
pub mod gelf;
pub mod layout;

pub use append::Append;
pub use layout::Layout;

mod bridge;
mod config;
mod core;
mod error;
mod factory;
mod record;

pub use config::Config;
pub use core::CONSOLE_ENCODING;
pub use core::Core;
pub use core::JSON_ENCODING;
pub use core::Profile;
pub use error::Error;
pub use factory::CoreFactory;
pub use factory::FactoryRegistry;
pub use factory::GelfStreamFactory;
pub use record::AtomicLevel;
pub use record::Level;
pub use record::ParseLevelError;
pub use record::Record;
pub use record::RecordBuilder;
pub use gelf::Severity;
