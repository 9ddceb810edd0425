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

//! Layout builder
//!
//! Creates the main application layout structure.

use gtk4::{prelude::*, Align, Box as GtkBox, Label, Orientation};

/// Builds the main application layout
///
/// Creates a vertical box containing:
/// - Status label (what is being monitored)
/// - Hint label explaining how jobs appear
///
/// # Returns
///
/// Tuple of (main_vbox, status_label)
pub fn build_main_layout(initial_status: &str) -> (GtkBox, Label) {
    let main_vbox = GtkBox::new(Orientation::Vertical, 12);
    main_vbox.set_margin_start(24);
    main_vbox.set_margin_end(24);
    main_vbox.set_margin_top(24);
    main_vbox.set_margin_bottom(24);
    main_vbox.set_valign(Align::Center);

    let status_label = Label::new(Some(initial_status));
    status_label.add_css_class("status-label");
    status_label.set_wrap(true);
    status_label.set_selectable(true);
    main_vbox.append(&status_label);

    let hint_label = Label::new(Some(
        "New .txt files dropped into the monitored directory open as a thermal print preview.",
    ));
    hint_label.add_css_class("dim-label");
    hint_label.set_wrap(true);
    main_vbox.append(&hint_label);

    (main_vbox, status_label)
}
