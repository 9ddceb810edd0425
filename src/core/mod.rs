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

//! Core job handling
//!
//! Everything between a filesystem event and a displayable `PrintJob`,
//! with no GTK or threading concerns:
//! - Type definitions for jobs and monitor settings
//! - Event filtering and job file reading (`JobHandler`)
//! - Receipt rendering for terminal output
//! - Saving preview text back to disk
//!
//! Kept free of UI code so it can be unit tested without a display server.

pub mod error;
pub mod handler;
pub mod output;
pub mod receipt;
pub mod types;

pub use error::{JobError, MonitorError, SaveError};
pub use handler::JobHandler;
pub use output::save_output;
pub use types::*;

#[cfg(test)]
mod tests;
