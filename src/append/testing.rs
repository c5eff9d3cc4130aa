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

use std::sync::Arc;
use std::sync::Mutex;

use crate::append::Append;

/// An appender that retains formatted records in memory so a test harness
/// can assert on the rendered output.
///
/// Cloning yields a handle to the same buffer: keep one clone and hand the
/// other to the core under test.
///
/// # Examples
///
/// ```
/// use gelf_stream::append::Capture;
///
/// let capture = Capture::default();
/// let sink = capture.clone();
/// ```
#[derive(Debug, Clone, Default)]
pub struct Capture {
    lines: Arc<Mutex<Vec<String>>>,
}

impl Capture {
    /// All records appended so far, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl Append for Capture {
    fn append(&self, bytes: &[u8]) -> anyhow::Result<()> {
        let line = String::from_utf8_lossy(bytes).into_owned();
        self.lines.lock().unwrap().push(line);
        Ok(())
    }
}
