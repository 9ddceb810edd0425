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

//! MVC Controller - Mediates between the directory monitor and GTK4 views
//!
//! # Responsibilities
//!
//! - Own the single `DirectoryMonitor` of the main window
//! - Switch the watched directory (stop old session, start new one)
//! - Hand jobs produced on the watcher thread to the UI thread
//! - Provide status text for the main window
//!
//! # Architecture
//!
//! The Controller doesn't know about GTK4 widgets. Jobs arrive on an mpsc
//! channel filled by the watcher thread; the UI drains it from the GTK main
//! loop with `take_pending_jobs()`, so dialogs are only ever built on the UI
//! thread.

use std::{
    cell::{Cell, RefCell},
    path::{Path, PathBuf},
    sync::mpsc::{channel, Receiver},
};
use tracing::{debug, error, info};

use crate::core::{MonitorError, MonitorSettings, PrintJob};
use crate::monitor::{DirectoryMonitor, WatcherState};

/// Status shown before any directory has been chosen
pub const IDLE_STATUS: &str = "Choose a directory to monitor";

/// MVC Controller coordinating the monitor and the main window
pub struct Controller {
    /// Directory monitor (at most one running session)
    monitor: RefCell<DirectoryMonitor>,
    /// Receiving end of the watcher → UI hand-off
    jobs: Receiver<PrintJob>,
    /// Text for the main window status label
    status: RefCell<String>,
    /// Jobs handed to the UI since the current directory was selected
    jobs_received: Cell<usize>,
    /// Jobs queued by a previous directory's watcher, not yet shown
    carried_over: RefCell<Vec<PrintJob>>,
}

impl Controller {
    /// Creates a Controller with a stopped monitor
    ///
    /// # Example
    ///
    /// ```no_run
    /// use thermal_print_monitor::core::MonitorSettings;
    /// use thermal_print_monitor::ui::Controller;
    /// use std::path::Path;
    ///
    /// let controller = Controller::new(MonitorSettings::default());
    /// controller.select_directory(Path::new("print_jobs"))?;
    /// println!("{}", controller.status_text());
    /// # Ok::<(), thermal_print_monitor::core::MonitorError>(())
    /// ```
    pub fn new(settings: MonitorSettings) -> Self {
        let (tx, rx) = channel();

        Self {
            monitor: RefCell::new(DirectoryMonitor::new(settings, tx)),
            jobs: rx,
            status: RefCell::new(IDLE_STATUS.to_string()),
            jobs_received: Cell::new(0),
            carried_over: RefCell::new(Vec::new()),
        }
    }

    /// Starts monitoring `dir`, replacing any previous directory
    ///
    /// The previous watcher is stopped and joined before the new one starts.
    /// Jobs it already queued are still handed out by `take_pending_jobs`,
    /// but are not counted against the new directory.
    ///
    /// # Returns
    ///
    /// * `Ok(PathBuf)` - Directory now being monitored
    /// * `Err(MonitorError)` - Directory could not be watched; the monitor
    ///   is stopped and the status text describes the failure
    pub fn select_directory(&self, dir: &Path) -> Result<PathBuf, MonitorError> {
        self.monitor.borrow_mut().stop();

        let stale: Vec<PrintJob> = self.jobs.try_iter().collect();
        if !stale.is_empty() {
            debug!("Carrying over {} job(s) from the previous directory", stale.len());
            self.carried_over.borrow_mut().extend(stale);
        }
        self.jobs_received.set(0);

        let result = self.monitor.borrow_mut().start(dir);

        match &result {
            Ok(watching) => {
                *self.status.borrow_mut() = format!("Monitoring: {}", watching.display());
            }
            Err(e) => {
                error!("Failed to monitor {}: {}", dir.display(), e);
                *self.status.borrow_mut() = format!("Not monitoring: {}", e);
            }
        }

        result
    }

    /// Drains every job that arrived since the last call (non-blocking)
    pub fn take_pending_jobs(&self) -> Vec<PrintJob> {
        let mut pending = std::mem::take(&mut *self.carried_over.borrow_mut());
        let jobs: Vec<PrintJob> = self.jobs.try_iter().collect();

        if !jobs.is_empty() {
            let total = self.jobs_received.get() + jobs.len();
            self.jobs_received.set(total);

            if let Some(dir) = self.watched_dir() {
                *self.status.borrow_mut() = format!(
                    "Monitoring: {} ({} job{} received)",
                    dir.display(),
                    total,
                    if total == 1 { "" } else { "s" }
                );
            }
        }

        pending.extend(jobs);
        pending
    }

    pub fn status_text(&self) -> String {
        self.status.borrow().clone()
    }

    pub fn watcher_state(&self) -> WatcherState {
        self.monitor.borrow().state()
    }

    pub fn watched_dir(&self) -> Option<PathBuf> {
        self.monitor.borrow().watched_dir().map(Path::to_path_buf)
    }

    pub fn jobs_received(&self) -> usize {
        self.jobs_received.get()
    }

    /// Stops the monitor and waits for its thread to exit
    ///
    /// Called on window close; safe to call more than once.
    pub fn shutdown(&self) {
        if self.watcher_state() == WatcherState::Running {
            info!("Shutting down directory monitor");
        }
        self.monitor.borrow_mut().stop();
        *self.status.borrow_mut() = IDLE_STATUS.to_string();
    }
}
