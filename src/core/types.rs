// Copyright 2025 Eric Jingryd (tidynest@proton.me)
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

//! Core type definitions for print job handling
//!
//! - `PrintJob`: the content of one job file, captured at read time
//! - `MonitorSettings`: knobs shared by the event handler and the monitor

use chrono::{DateTime, Local};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Job directory used when none is given, relative to the working directory
pub const DEFAULT_JOB_DIR: &str = "print_jobs";

/// Extension accepted by default (`report.txt`, `RECEIPT.TXT`, ...)
pub const DEFAULT_EXTENSION: &str = "txt";

/// How often the worker wakes up to check its stop flag
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Suffixes producers commonly use for files still being written
const TEMPORARY_SUFFIXES: [&str; 5] = [".part", ".partial", ".tmp", ".swp", "~"];

/// Returns true for hidden or temp-style file names
///
/// `.job.partial`, `receipt.tmp` and `receipt.txt~` are work files of a
/// producer, not finished jobs.
pub fn is_temporary_name(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };

    let lower = name.to_ascii_lowercase();
    name.starts_with('.') || TEMPORARY_SUFFIXES.iter().any(|s| lower.ends_with(s))
}

/// A single print job read from the watched directory
///
/// Owned by value: once handed to the UI there is no link back to the file,
/// which may already have been deleted.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrintJob {
    /// File the job was read from
    pub source: PathBuf,
    /// Full text content at the time of read
    pub content: String,
    /// Local time the job was picked up
    pub received_at: DateTime<Local>,
}

impl PrintJob {
    pub fn new(source: PathBuf, content: String) -> Self {
        Self {
            source,
            content,
            received_at: Local::now(),
        }
    }

    /// File name of the job, or the full path if it has none
    pub fn file_name(&self) -> String {
        self.source
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .unwrap_or_else(|| self.source.display().to_string())
    }

    /// Suggested name for a "Save Output" copy of this job
    ///
    /// `receipt.txt` → `receipt-output.txt`
    pub fn suggested_output_name(&self) -> String {
        let stem = self
            .source
            .file_stem()
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty())
            .unwrap_or("print");
        format!("{}-output.txt", stem)
    }
}

impl fmt::Display for PrintJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} bytes, {})",
            self.file_name(),
            self.content.len(),
            self.received_at.format("%H:%M:%S")
        )
    }
}

/// Settings for a directory monitor session
#[derive(Clone, Debug, PartialEq)]
pub struct MonitorSettings {
    /// Only files with this extension are jobs (`None` accepts every file)
    pub extension: Option<String>,
    /// Remove the job file once its content has been read
    pub delete_after_read: bool,
    /// Stop-flag polling granularity of the worker thread
    pub poll_interval: Duration,
    /// Create the watched directory when it does not exist yet
    pub create_if_missing: bool,
}

impl Default for MonitorSettings {
    fn default() -> Self {
        Self {
            extension: Some(DEFAULT_EXTENSION.to_string()),
            delete_after_read: false,
            poll_interval: DEFAULT_POLL_INTERVAL,
            create_if_missing: true,
        }
    }
}

impl MonitorSettings {
    /// Returns true if `path` carries the configured extension
    ///
    /// Comparison ignores ASCII case. With no extension configured every
    /// path matches.
    pub fn matches_extension(&self, path: &Path) -> bool {
        match &self.extension {
            None => true,
            Some(wanted) => path
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| e.eq_ignore_ascii_case(wanted))
                .unwrap_or(false),
        }
    }
}
