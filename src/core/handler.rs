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

//! Filesystem event handler
//!
//! Turns raw `notify` events into `PrintJob`s. A job appears either by being
//! created in the watched directory or by being renamed into it (how most
//! spoolers publish a finished file). Failures are logged and dropped here;
//! nothing about a broken job file ever reaches the UI.
//!
//! Hidden and temp-style names (`.job.partial`, `job.tmp`, `job.txt~`) are
//! never jobs, so a producer's work file is left alone until it is renamed
//! into place. A rename of an existing job within the directory is not a
//! new arrival.

use notify::{
    event::{CreateKind, ModifyKind, RenameMode},
    Event, EventKind,
};
use std::{collections::VecDeque, fs, path::Path};
use tracing::{debug, warn};

use crate::core::{is_temporary_name, JobError, MonitorSettings, PrintJob};

/// Rename cookies remembered while waiting for the matching `To` half
const RENAME_HISTORY: usize = 32;

/// Reads job files announced by filesystem events
#[derive(Clone, Debug)]
pub struct JobHandler {
    settings: MonitorSettings,
    /// Trackers of recent renames whose source was already a job
    job_renames: VecDeque<usize>,
}

impl JobHandler {
    pub fn new(settings: MonitorSettings) -> Self {
        Self {
            settings,
            job_renames: VecDeque::with_capacity(RENAME_HISTORY),
        }
    }

    /// Returns true for events that announce a new file in the directory
    pub fn is_arrival(kind: &EventKind) -> bool {
        matches!(
            kind,
            EventKind::Create(_) | EventKind::Modify(ModifyKind::Name(RenameMode::To))
        )
    }

    /// Returns true if the name of `path` qualifies it as a job
    ///
    /// Checks the configured extension and rejects hidden or temp-style
    /// names. Does not touch the filesystem.
    pub fn accepts_name(&self, path: &Path) -> bool {
        !is_temporary_name(path) && self.settings.matches_extension(path)
    }

    /// Returns true if `path` should be treated as a print job
    ///
    /// Directories never are. Files must pass `accepts_name`.
    pub fn accepts(&self, path: &Path) -> bool {
        !path.is_dir() && self.accepts_name(path)
    }

    /// Reads one job file
    ///
    /// With `delete_after_read` the file is removed after a successful read.
    /// A failed delete is logged; the job is still returned.
    pub fn read_job(&self, path: &Path) -> Result<PrintJob, JobError> {
        let content = fs::read_to_string(path).map_err(|source| JobError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        if self.settings.delete_after_read {
            if let Err(e) = Self::delete_job_file(path) {
                warn!("{}", e);
            }
        }

        Ok(PrintJob::new(path.to_path_buf(), content))
    }

    /// Processes one event, returning the jobs it produced
    ///
    /// Unreadable files are logged at warn level and skipped.
    pub fn handle_event(&mut self, event: &Event) -> Vec<PrintJob> {
        if event.kind == EventKind::Modify(ModifyKind::Name(RenameMode::From)) {
            self.remember_rename(event);
            return Vec::new();
        }

        if self.is_job_rename(event) {
            debug!("Ignoring rename of an existing job: {:?}", event.paths);
            return Vec::new();
        }

        if !Self::is_arrival(&event.kind) {
            return Vec::new();
        }

        if matches!(event.kind, EventKind::Create(CreateKind::Folder)) {
            debug!("Ignoring new directory: {:?}", event.paths);
            return Vec::new();
        }

        let mut jobs = Vec::new();
        for path in &event.paths {
            if !self.accepts(path) {
                debug!("Ignoring {}", path.display());
                continue;
            }

            match self.read_job(path) {
                Ok(job) => {
                    debug!("Read job {}", job);
                    jobs.push(job);
                }
                Err(e) => warn!("{}", e),
            }
        }
        jobs
    }

    /// Records the tracker of a rename whose source was itself a job
    fn remember_rename(&mut self, event: &Event) {
        let Some(tracker) = event.attrs.tracker() else {
            return;
        };

        if event.paths.iter().any(|p| self.accepts_name(p)) {
            if self.job_renames.len() == RENAME_HISTORY {
                self.job_renames.pop_front();
            }
            self.job_renames.push_back(tracker);
        }
    }

    /// True for the `To` half of a rename whose `From` half was a job
    fn is_job_rename(&mut self, event: &Event) -> bool {
        if event.kind != EventKind::Modify(ModifyKind::Name(RenameMode::To)) {
            return false;
        }

        let Some(tracker) = event.attrs.tracker() else {
            return false;
        };

        match self.job_renames.iter().position(|t| *t == tracker) {
            Some(index) => {
                self.job_renames.remove(index);
                true
            }
            None => false,
        }
    }

    fn delete_job_file(path: &Path) -> Result<(), JobError> {
        fs::remove_file(path).map_err(|source| JobError::Delete {
            path: path.to_path_buf(),
            source,
        })
    }
}
