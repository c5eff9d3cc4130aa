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

//! Appenders that write formatted log records to their destinations.

use std::fmt;

mod stdio;
mod testing;

pub use self::stdio::Stderr;
pub use self::stdio::Stdout;
pub use self::testing::Capture;

/// A trait representing an appender that writes formatted log records.
///
/// The core renders each record through its layout and hands the resulting
/// bytes, without a trailing newline, to every appender.
pub trait Append: fmt::Debug + Send + Sync + 'static {
    /// Writes one formatted record.
    fn append(&self, bytes: &[u8]) -> anyhow::Result<()>;

    /// Flushes any buffered records.
    fn flush(&self) {}
}

impl<T: Append> From<T> for Box<dyn Append> {
    fn from(value: T) -> Self {
        Box::new(value)
    }
}
