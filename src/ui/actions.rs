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

//! GTK Action setup for the application
//!
//! This module contains all GTK action definitions (open directory, about,
//! quit) and their setup functions

use gtk4::{gio, prelude::*, AlertDialog, Application, ApplicationWindow, FileDialog, Label};
use std::{path::Path, rc::Rc};
use tracing::{debug, info, warn};

use crate::core::MonitorError;
use crate::ui::Controller;

/// Shows the "Cannot Monitor Directory" alert for a failed selection
pub(crate) fn show_monitor_error(window: &ApplicationWindow, path: &Path, error: &MonitorError) {
    let dialog = AlertDialog::builder()
        .modal(true)
        .message("Cannot Monitor Directory")
        .detail(format!("{}:\n\n{}", path.display(), error))
        .buttons(vec!["OK"])
        .build();

    dialog.show(Some(window));
}

/// Sets up the quit action
///
/// Creates a GTK action that stops the monitor and quits the application.
pub fn setup_quit_action(app: &Application, controller: Rc<Controller>) {
    let quit_action = gio::SimpleAction::new("quit", None);
    let app_for_quit = app.clone();

    quit_action.connect_activate(move |_, _| {
        controller.shutdown();
        app_for_quit.quit();
    });

    app.add_action(&quit_action);
    app.set_accels_for_action("app.quit", &["<Control>q"]);
}

/// Sets up the about action
pub fn setup_about_action(app: &Application, window: &ApplicationWindow) {
    let about_action = gio::SimpleAction::new("about", None);
    let window_for_about = window.clone();

    about_action.connect_activate(move |_, _| {
        let dialog = AlertDialog::builder()
            .modal(true)
            .message("Thermal Printer Monitor")
            .detail(format!(
                "Version {}\n\nWatches a directory for new text files and shows each one as a thermal print preview.",
                env!("CARGO_PKG_VERSION")
            ))
            .buttons(vec!["OK"])
            .build();

        dialog.show(Some(&window_for_about));
    });

    app.add_action(&about_action);
}

/// Sets up the open-directory action
///
/// Creates a GTK action that opens a folder picker and switches the
/// monitor to the selected directory. Refreshes the status label after.
pub fn setup_open_directory_action(
    app: &Application,
    window: &ApplicationWindow,
    controller: Rc<Controller>,
    status_label: &Label,
) {
    let open_action = gio::SimpleAction::new("open-directory", None);
    let window_for_open = window.clone();
    let status_label_for_open = status_label.clone();

    open_action.connect_activate(move |_, _| {
        debug!("📂 Open directory clicked");

        let file_dialog = FileDialog::builder()
            .title("Select Directory")
            .modal(true)
            .build();

        if let Some(dir) = controller.watched_dir() {
            file_dialog.set_initial_folder(Some(&gio::File::for_path(dir)));
        }

        let controller_clone = controller.clone();
        let status_label_clone = status_label_for_open.clone();
        let window_clone = window_for_open.clone();

        file_dialog.select_folder(
            Some(&window_for_open),
            None::<&gio::Cancellable>,
            move |result| {
                let folder = match result {
                    Ok(folder) => folder,
                    Err(_) => {
                        debug!("🚫 Directory selection cancelled");
                        return;
                    }
                };

                let Some(path) = folder.path() else {
                    warn!("Selected folder is not a local path");
                    return;
                };

                match controller_clone.select_directory(&path) {
                    Ok(watching) => info!("📂 Now monitoring {}", watching.display()),
                    Err(e) => show_monitor_error(&window_clone, &path, &e),
                }

                status_label_clone.set_text(&controller_clone.status_text());
            },
        );
    });

    app.add_action(&open_action);
    app.set_accels_for_action("app.open-directory", &["<Control>o"]);
}
