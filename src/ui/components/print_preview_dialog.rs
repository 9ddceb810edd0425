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

//! Thermal print preview dialog
//!
//! Shows one print job in a read-only, fixed-width text view styled as a
//! paper roll. "Save Output" writes the displayed text back to disk.

use gtk4::prelude::*;
use gtk4::{
    gio, Align, AlertDialog, Box as GtkBox, Button, FileDialog, FileFilter, Label, Orientation,
    PolicyType, ScrolledWindow, TextView, Window, WrapMode,
};
use tracing::{debug, error, warn};

use crate::core::{save_output, PrintJob};

/// Modal preview of a single print job
pub struct PrintPreviewDialog {
    window: Window,
}

impl PrintPreviewDialog {
    /// Builds the dialog for `job`, transient for `parent`
    pub fn new(parent: &impl IsA<Window>, job: &PrintJob) -> Self {
        let window = Window::builder()
            .title("Thermal Print Simulation")
            .modal(true)
            .transient_for(parent)
            .default_width(400)
            .default_height(600)
            .build();

        let main_vbox = GtkBox::new(Orientation::Vertical, 8);
        main_vbox.set_margin_start(12);
        main_vbox.set_margin_end(12);
        main_vbox.set_margin_top(12);
        main_vbox.set_margin_bottom(12);

        let title_label = Label::new(Some("Thermal Print Preview"));
        title_label.set_halign(Align::Center);
        title_label.add_css_class("preview-title");
        main_vbox.append(&title_label);

        let source_label = Label::new(Some(&format!(
            "{} · received {}",
            job.file_name(),
            job.received_at.format("%Y-%m-%d %H:%M:%S")
        )));
        source_label.set_halign(Align::Center);
        source_label.add_css_class("dim-label");
        main_vbox.append(&source_label);

        // Receipts keep their own line breaks; scroll instead of wrapping
        let text_view = TextView::builder()
            .editable(false)
            .cursor_visible(false)
            .monospace(true)
            .wrap_mode(WrapMode::None)
            .left_margin(10)
            .right_margin(10)
            .top_margin(10)
            .bottom_margin(10)
            .build();
        text_view.add_css_class("thermal-paper");
        text_view.buffer().set_text(&job.content);

        let scrolled_window = ScrolledWindow::builder()
            .vexpand(true)
            .hscrollbar_policy(PolicyType::Automatic)
            .child(&text_view)
            .build();
        main_vbox.append(&scrolled_window);

        let button_box = GtkBox::new(Orientation::Horizontal, 12);
        button_box.set_halign(Align::End);

        let save_button = Button::builder().label("Save Output").build();
        save_button.add_css_class("suggested-action");
        let close_button = Button::builder().label("Close").build();

        button_box.append(&save_button);
        button_box.append(&close_button);
        main_vbox.append(&button_box);

        window.set_child(Some(&main_vbox));

        let window_for_close = window.clone();
        close_button.connect_clicked(move |_| window_for_close.close());

        let window_for_save = window.clone();
        let text_view_for_save = text_view.clone();
        let suggested_name = job.suggested_output_name();
        save_button.connect_clicked(move |_| {
            Self::choose_save_path(&window_for_save, &text_view_for_save, &suggested_name);
        });

        Self { window }
    }

    pub fn show(&self) {
        self.window.present();
    }

    fn text_of(text_view: &TextView) -> String {
        let buffer = text_view.buffer();
        buffer
            .text(&buffer.start_iter(), &buffer.end_iter(), false)
            .to_string()
    }

    /// Opens a save dialog and writes the displayed text to the chosen file
    fn choose_save_path(window: &Window, text_view: &TextView, suggested_name: &str) {
        let filter = FileFilter::new();
        filter.set_name(Some("Text Files"));
        filter.add_pattern("*.txt");

        let file_dialog = FileDialog::builder()
            .title("Save Output")
            .initial_name(suggested_name)
            .default_filter(&filter)
            .modal(true)
            .build();

        let window_clone = window.clone();
        let text_view_clone = text_view.clone();

        file_dialog.save(Some(window), None::<&gio::Cancellable>, move |result| {
            let file = match result {
                Ok(file) => file,
                Err(_) => {
                    debug!("Save output cancelled");
                    return;
                }
            };

            let Some(path) = file.path() else {
                warn!("Save target is not a local file");
                Self::alert(&window_clone, "Error", "Only local files can be saved.");
                return;
            };

            match save_output(&path, &Self::text_of(&text_view_clone)) {
                Ok(()) => Self::alert(&window_clone, "Saved", "Output saved successfully."),
                Err(e) => {
                    error!("{}", e);
                    Self::alert(&window_clone, "Error", &e.to_string());
                }
            }
        });
    }

    fn alert(parent: &Window, message: &str, detail: &str) {
        let dialog = AlertDialog::builder()
            .modal(true)
            .message(message)
            .detail(detail)
            .buttons(vec!["OK"])
            .build();

        dialog.show(Some(parent));
    }
}
