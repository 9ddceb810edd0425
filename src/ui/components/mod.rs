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

//! UI Components
//!
//! Reusable GTK4 widgets for the print monitor.
//!
//! # Components
//!
//! - `print_preview_dialog.rs` - Thermal print preview with Save Output

mod print_preview_dialog;

pub use print_preview_dialog::PrintPreviewDialog;
