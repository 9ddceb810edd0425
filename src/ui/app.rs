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

//! GTK4 Application wrapper
//!
//! This module sets up the GTK4 application lifecycle and creates
//! the main window. It uses the Controller to run the directory monitor.
//!
//! # Architecture
//!
//! ```text
//! App (GTK4 Application)
//!   ├─ Creates Controller (owns the DirectoryMonitor)
//!   ├─ Builds main window (header bar + status label)
//!   ├─ Registers actions (open directory, about, quit)
//!   └─ Drains jobs from the Controller on the main loop
//! ```

use gtk4::prelude::*;
use gtk4::{gdk, Application, ApplicationWindow, CssProvider};
use std::path::PathBuf;
use std::rc::Rc;
use tracing::warn;

use crate::core::MonitorSettings;
use crate::ui::{actions, builders, Controller};

/// GTK4 Application for the print monitor
pub struct App {
    /// GTK4 Application instance
    app: Application,
    /// MVC Controller
    controller: Rc<Controller>,
    /// Directory to monitor as soon as the window opens
    initial_dir: Option<PathBuf>,
}

impl App {
    /// Creates a new App
    ///
    /// # Arguments
    ///
    /// * `settings` - Monitor settings used for every selected directory
    /// * `initial_dir` - Directory to start monitoring at launch, if any
    ///
    /// # Example
    ///
    /// ```no_run
    /// use thermal_print_monitor::core::MonitorSettings;
    /// use thermal_print_monitor::ui::App;
    /// use std::path::PathBuf;
    ///
    /// let app = App::new(MonitorSettings::default(), Some(PathBuf::from("print_jobs")));
    /// app.run();
    /// ```
    pub fn new(settings: MonitorSettings, initial_dir: Option<PathBuf>) -> Self {
        let app = Application::builder()
            .application_id("com.tidynest.thermal-print-monitor")
            .build();

        let controller = Rc::new(Controller::new(settings));

        Self {
            app,
            controller,
            initial_dir,
        }
    }

    /// Runs the GTK4 application
    ///
    /// Blocks until the application exits. The monitor is stopped and its
    /// thread joined before this returns, however the window was closed.
    pub fn run(self) -> glib::ExitCode {
        let controller = self.controller.clone();
        let initial_dir = self.initial_dir.clone();

        // Connect activate signal (called when app starts)
        self.app.connect_activate(move |app| {
            Self::build_ui(app, controller.clone(), initial_dir.clone());
        });

        // Arguments were already parsed by clap
        let exit_code = self.app.run_with_args::<&str>(&[]);

        self.controller.shutdown();
        exit_code
    }

    /// Loads custom CSS styling for the application
    ///
    /// Applies the CSS from `style.css` to the default display
    /// at APPLICATION priority level.
    fn load_css() {
        let provider = CssProvider::new();
        provider.load_from_string(include_str!("style.css"));

        match gdk::Display::default() {
            Some(display) => gtk4::style_context_add_provider_for_display(
                &display,
                &provider,
                gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
            ),
            None => warn!("No display available, skipping custom CSS"),
        }
    }

    /// Builds the main window UI
    ///
    /// This is called when the application activates.
    fn build_ui(app: &Application, controller: Rc<Controller>, initial_dir: Option<PathBuf>) {
        // A second activation (e.g. launching again) just raises the window
        if let Some(window) = app.active_window() {
            window.present();
            return;
        }

        Self::load_css();

        let initial_failure = initial_dir.and_then(|dir| match controller.select_directory(&dir) {
            Ok(_) => None,
            Err(e) => Some((dir, e)),
        });

        let window = ApplicationWindow::builder()
            .application(app)
            .title("Thermal Printer Monitor")
            .default_width(800)
            .default_height(600)
            .build();

        window.set_titlebar(Some(&builders::build_header_bar()));

        let (main_vbox, status_label) = builders::build_main_layout(&controller.status_text());
        window.set_child(Some(&main_vbox));

        actions::setup_open_directory_action(app, &window, controller.clone(), &status_label);
        actions::setup_about_action(app, &window);
        actions::setup_quit_action(app, controller.clone());

        builders::wire_up_handlers(&window, controller, &status_label);

        window.present();

        if let Some((dir, e)) = initial_failure {
            actions::show_monitor_error(&window, &dir, &e);
        }
    }
}
