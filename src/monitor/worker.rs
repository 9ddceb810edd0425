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

//! Watcher thread body

use notify::{Event, RecommendedWatcher};
use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        mpsc::{Receiver, RecvTimeoutError, Sender},
        Arc,
    },
    time::Duration,
};
use tracing::{debug, warn};

use crate::core::{JobHandler, PrintJob};

/// Owns everything the watcher thread needs
///
/// Dropping the worker drops the notify watcher, which unregisters the watch.
pub(super) struct Worker {
    _watcher: RecommendedWatcher,
    events: Receiver<notify::Result<Event>>,
    handler: JobHandler,
    jobs: Sender<PrintJob>,
    stop_flag: Arc<AtomicBool>,
    poll_interval: Duration,
}

impl Worker {
    pub(super) fn new(
        watcher: RecommendedWatcher,
        events: Receiver<notify::Result<Event>>,
        handler: JobHandler,
        jobs: Sender<PrintJob>,
        stop_flag: Arc<AtomicBool>,
        poll_interval: Duration,
    ) -> Self {
        Self {
            _watcher: watcher,
            events,
            handler,
            jobs,
            stop_flag,
            poll_interval,
        }
    }

    /// Runs until the stop flag is set or the job receiver goes away
    pub(super) fn run(mut self) {
        debug!("Watcher thread started");

        while !self.stop_flag.load(Ordering::SeqCst) {
            match self.events.recv_timeout(self.poll_interval) {
                Ok(Ok(event)) => {
                    for job in self.handler.handle_event(&event) {
                        if self.jobs.send(job).is_err() {
                            debug!("Job receiver dropped, watcher thread exiting");
                            return;
                        }
                    }
                }
                Ok(Err(e)) => warn!("Watch error: {}", e),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => {
                    warn!("Notifier disconnected, watcher thread exiting");
                    break;
                }
            }
        }

        debug!("Watcher thread finished");
    }
}
