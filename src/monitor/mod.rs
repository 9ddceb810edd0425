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

//! Directory monitor for incoming print jobs
//!
//! Uses OS-level file watching (Linux inotify) via the notify crate. Each
//! session runs on a dedicated worker thread that owns the notify watcher,
//! turns events into `PrintJob`s and sends them down a channel. The worker
//! never touches UI state; whoever holds the receiving end decides how jobs
//! are displayed.
//!
//! # Lifecycle
//!
//! ```text
//! Stopped ──start(dir)──▶ Running ──stop()──▶ Stopped
//!                            │
//!                            └──start(other)── stops, joins, then restarts
//! ```

mod worker;

use notify::{Config, RecommendedWatcher, RecursiveMode, Watcher};
use std::{
    fs,
    path::{Path, PathBuf},
    sync::{
        atomic::{AtomicBool, Ordering},
        mpsc::{channel, Sender},
        Arc,
    },
    thread::{self, JoinHandle},
};
use tracing::{error, info};

use crate::core::{JobHandler, MonitorError, MonitorSettings, PrintJob};
use worker::Worker;

/// Whether a monitor currently has a live worker thread
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WatcherState {
    Stopped,
    Running,
}

/// A running watch on one directory
struct Session {
    dir: PathBuf,
    stop_flag: Arc<AtomicBool>,
    worker: JoinHandle<()>,
}

/// Watches a single directory (non-recursively) for new job files
///
/// At most one worker is active per monitor. Jobs from every session are
/// delivered to the same sender, so the receiving side can stay wired up
/// across directory changes.
///
/// # Example
///
/// ```no_run
/// use thermal_print_monitor::core::MonitorSettings;
/// use thermal_print_monitor::monitor::DirectoryMonitor;
/// use std::{path::Path, sync::mpsc::channel};
///
/// let (tx, rx) = channel();
/// let mut monitor = DirectoryMonitor::new(MonitorSettings::default(), tx);
/// monitor.start(Path::new("print_jobs"))?;
///
/// for job in rx.iter().take(1) {
///     println!("{}", job.content);
/// }
/// monitor.stop();
/// # Ok::<(), thermal_print_monitor::core::MonitorError>(())
/// ```
pub struct DirectoryMonitor {
    settings: MonitorSettings,
    sender: Sender<PrintJob>,
    session: Option<Session>,
}

impl DirectoryMonitor {
    pub fn new(settings: MonitorSettings, sender: Sender<PrintJob>) -> Self {
        Self {
            settings,
            sender,
            session: None,
        }
    }

    pub fn settings(&self) -> &MonitorSettings {
        &self.settings
    }

    /// Replaces the settings used by the next `start()`
    pub fn set_settings(&mut self, settings: MonitorSettings) {
        self.settings = settings;
    }

    /// Starts watching `dir`, stopping any previous session first
    ///
    /// The notify watcher is registered on the calling thread so that an
    /// unwatchable path is reported here rather than lost in the worker.
    ///
    /// # Returns
    ///
    /// * `Ok(PathBuf)` - The (canonicalised) directory now being watched
    /// * `Err(MonitorError)` - Directory invalid or watch registration failed;
    ///   the monitor is left stopped
    pub fn start(&mut self, dir: &Path) -> Result<PathBuf, MonitorError> {
        self.stop();

        let dir = prepare_directory(dir, self.settings.create_if_missing)?;

        let (event_tx, event_rx) = channel();
        let mut watcher = RecommendedWatcher::new(
            move |res| {
                let _ = event_tx.send(res);
            },
            Config::default(),
        )?;
        watcher.watch(&dir, RecursiveMode::NonRecursive)?;

        let stop_flag = Arc::new(AtomicBool::new(false));
        let worker = Worker::new(
            watcher,
            event_rx,
            JobHandler::new(self.settings.clone()),
            self.sender.clone(),
            stop_flag.clone(),
            self.settings.poll_interval,
        );

        let handle = thread::Builder::new()
            .name("print-monitor".to_string())
            .spawn(move || worker.run())
            .map_err(MonitorError::Spawn)?;

        info!("Monitoring {}", dir.display());

        self.session = Some(Session {
            dir: dir.clone(),
            stop_flag,
            worker: handle,
        });

        Ok(dir)
    }

    /// Stops the worker and waits for it to exit
    ///
    /// Safe to call repeatedly or on a monitor that was never started.
    /// Blocks for at most one poll interval on a healthy worker.
    pub fn stop(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };

        session.stop_flag.store(true, Ordering::SeqCst);
        if session.worker.join().is_err() {
            error!("Watcher thread for {} panicked", session.dir.display());
        }

        info!("Stopped monitoring {}", session.dir.display());
    }

    pub fn state(&self) -> WatcherState {
        match &self.session {
            Some(session) if !session.worker.is_finished() => WatcherState::Running,
            _ => WatcherState::Stopped,
        }
    }

    /// Directory of the current session, if any
    pub fn watched_dir(&self) -> Option<&Path> {
        self.session.as_ref().map(|s| s.dir.as_path())
    }
}

impl Drop for DirectoryMonitor {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Validates `dir`, creating it when allowed
fn prepare_directory(dir: &Path, create_if_missing: bool) -> Result<PathBuf, MonitorError> {
    if dir.exists() {
        if !dir.is_dir() {
            return Err(MonitorError::NotADirectory(dir.to_path_buf()));
        }
    } else if create_if_missing {
        fs::create_dir_all(dir).map_err(|source| MonitorError::CreateFailed {
            path: dir.to_path_buf(),
            source,
        })?;
        info!("Created job directory {}", dir.display());
    } else {
        return Err(MonitorError::DirectoryNotFound(dir.to_path_buf()));
    }

    Ok(dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf()))
}

#[cfg(test)]
mod tests;
