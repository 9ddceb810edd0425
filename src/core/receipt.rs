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

//! Thermal receipt rendering for terminals
//!
//! Lays job content out on a fixed-width paper strip. Lines that fit are kept
//! verbatim so column alignment survives; longer lines wrap at the last space
//! that fits, or hard-split when there is none.

/// Columns on an 80mm roll at the default font
pub const DEFAULT_PAPER_WIDTH: usize = 42;

/// Narrowest strip we will render
pub const MIN_PAPER_WIDTH: usize = 8;

const TAB_WIDTH: usize = 4;

/// Wraps a single line (no newlines) to at most `width` characters per row
pub fn wrap_line(line: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut rest: Vec<char> = line.chars().collect();

    while rest.len() > width {
        let split = rest[..=width]
            .iter()
            .rposition(|c| *c == ' ')
            .filter(|&i| i > 0)
            .unwrap_or(width);

        let row: String = rest[..split].iter().collect();
        rows.push(row.trim_end().to_string());

        let resume = if rest[split] == ' ' { split + 1 } else { split };
        rest.drain(..resume);
    }

    rows.push(rest.into_iter().collect());
    rows
}

/// Renders `content` as a bordered receipt `width` columns wide
///
/// ```
/// use thermal_print_monitor::core::receipt::render_receipt;
///
/// let receipt = render_receipt("TOTAL   4.20", 12);
/// assert_eq!(
///     receipt,
///     "+--------------+\n| TOTAL   4.20 |\n+--------------+\n"
/// );
/// ```
pub fn render_receipt(content: &str, width: usize) -> String {
    let width = width.max(MIN_PAPER_WIDTH);
    let edge = format!("+{}+\n", "-".repeat(width + 2));

    let mut out = String::with_capacity((width + 5) * (content.lines().count() + 2));
    out.push_str(&edge);

    let mut lines = content.lines().peekable();
    if lines.peek().is_none() {
        out.push_str(&format!("| {:<width$} |\n", ""));
    }

    for line in lines {
        let expanded = line.replace('\t', &" ".repeat(TAB_WIDTH));
        for row in wrap_line(&expanded, width) {
            out.push_str(&format!("| {:<width$} |\n", row));
        }
    }

    out.push_str(&edge);
    out
}
