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

//! Event handler setup
//!
//! Wires up the main window handlers:
//! - Job dispatch (watcher channel → preview dialogs)
//! - Window close (stop and join the watcher)

use gtk4::{prelude::*, ApplicationWindow, Label};
use std::{rc::Rc, time::Duration};
use tracing::info;

use crate::ui::components::PrintPreviewDialog;
use crate::ui::Controller;

/// How often the UI thread drains the job channel
const JOB_DISPATCH_INTERVAL: Duration = Duration::from_millis(100);

/// Wires up all event handlers for the main window
pub fn wire_up_handlers(window: &ApplicationWindow, controller: Rc<Controller>, status_label: &Label) {
    wire_job_dispatch(window, controller.clone(), status_label);

    // ============================================================================
    // Close handler
    // ============================================================================
    window.connect_close_request(move |_| {
        controller.shutdown();
        glib::Propagation::Proceed
    });
}

/// Drains jobs on the GTK main loop and opens one preview per job
///
/// The timeout only holds weak references, so it ends with the window.
fn wire_job_dispatch(window: &ApplicationWindow, controller: Rc<Controller>, status_label: &Label) {
    let window_weak = window.downgrade();
    let status_weak = status_label.downgrade();

    glib::timeout_add_local(JOB_DISPATCH_INTERVAL, move || {
        let (Some(window), Some(status_label)) = (window_weak.upgrade(), status_weak.upgrade())
        else {
            return glib::ControlFlow::Break;
        };

        for job in controller.take_pending_jobs() {
            info!("🧾 Print job: {}", job);
            PrintPreviewDialog::new(&window, &job).show();
        }

        let status = controller.status_text();
        if status_label.text().as_str() != status {
            status_label.set_text(&status);
        }

        glib::ControlFlow::Continue
    });
}
