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

//! Error types for job handling and directory monitoring

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning a job file into a `PrintJob`
#[derive(Debug, Error)]
pub enum JobError {
    /// Job file could not be opened or was not valid UTF-8 text
    #[error("Failed to read job file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Job file was read but could not be removed afterwards
    #[error("Failed to delete job file {path}: {source}")]
    Delete {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised when starting a directory monitor
#[derive(Debug, Error)]
pub enum MonitorError {
    /// Watched directory does not exist and creation is disabled
    #[error("Directory not found: {0}")]
    DirectoryNotFound(PathBuf),
    /// Path exists but is a regular file
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),
    /// Watched directory could not be created
    #[error("Failed to create directory {path}: {source}")]
    CreateFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The OS notification backend rejected the watch
    #[error("Failed to watch directory: {0}")]
    Watch(#[from] notify::Error),
    /// Worker thread could not be spawned
    #[error("Failed to spawn watcher thread: {0}")]
    Spawn(#[source] std::io::Error),
}

/// Errors raised by "Save Output"
#[derive(Debug, Error)]
pub enum SaveError {
    /// Atomic write operation failed
    #[error("Failed to save output to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
