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

use crate::record::ParseLevelError;

/// The error returned when constructing a logging core fails.
///
/// Construction is deterministic: a repeated call with the same configuration
/// yields the same core or the same error, and no partially-configured core
/// is ever exposed.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configured level threshold does not name a known level.
    #[error("cannot parse log level {value:?}")]
    Config {
        /// The offending raw value.
        value: String,
        /// The underlying parse failure.
        #[source]
        source: ParseLevelError,
    },

    /// The underlying core construction failed.
    #[error("failed to build logging core")]
    Build {
        /// The underlying cause.
        #[source]
        source: anyhow::Error,
    },
}
