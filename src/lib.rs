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

//! Thermal Printer Monitor
//!
//! Watches a directory for new text files ("print jobs") and shows each one
//! as a thermal receipt: in a GTK4 preview dialog, or on the terminal.
//!
//! # Features
//!
//! - **Live Detection:** OS-level directory watching (inotify) via notify
//! - **Thread Isolation:** Watcher runs on its own thread; jobs reach the UI
//!   over a channel, never by calling UI code from the watcher
//! - **Receipt Preview:** Read-only monospace view with Save Output
//! - **Consume Mode:** Optionally deletes job files once read
//! - **Headless Mode:** Prints receipts to the terminal
//!
//! # Architecture
//!
//! - **`core`:** Jobs, event filtering, receipt rendering, saving output
//! - **`monitor`:** Directory watcher thread and its lifecycle
//! - **`ui`:** GTK4 GUI components (MVC pattern)
//! - **`logging`:** tracing subscriber setup
//!
//! # Examples
//!
//! ## Watching a directory without a GUI
//!
//! ```no_run
//! use thermal_print_monitor::core::{receipt::render_receipt, MonitorSettings};
//! use thermal_print_monitor::monitor::DirectoryMonitor;
//! use std::{path::Path, sync::mpsc::channel};
//!
//! let (tx, rx) = channel();
//! let mut monitor = DirectoryMonitor::new(MonitorSettings::default(), tx);
//! monitor.start(Path::new("print_jobs"))?;
//!
//! for job in rx.iter() {
//!     print!("{}", render_receipt(&job.content, 42));
//! }
//! # Ok::<(), thermal_print_monitor::core::MonitorError>(())
//! ```
//!
//! ## Using the GUI
//!
//! ```no_run
//! use thermal_print_monitor::core::MonitorSettings;
//! use thermal_print_monitor::ui::App;
//!
//! let app = App::new(MonitorSettings::default(), None);
//! app.run(); // Blocks until window closes
//! ```

pub mod core;
pub mod logging;
pub mod monitor;
pub mod ui;

// Re-export commonly used types for convenience
pub use crate::core::{MonitorSettings, PrintJob};
pub use monitor::{DirectoryMonitor, WatcherState};
