//! Plain-text seating chart.
//!
//! Layout, front of the bus at the top:
//!
//! ```text
//! Bus Manager - 2 / 6 seated
//! ==========================
//!
//!                  FRONT
//!  1 Alice            2 --              |   3 --              4 Bob
//!  5 --               6 --              |
//!                  REAR
//!
//! Waitlist (2)
//!   - Carol
//!   - Dave
//! ```

use std::fmt::Write;

use seating_core::{ChartLayout, SeatingSnapshot};

/// Characters reserved for an occupant name; longer names are cut with `~`.
const NAME_WIDTH: usize = 16;

const AISLE: &str = "  |  ";

/// Render the snapshot as a printable chart.
pub fn render_chart(title: &str, snapshot: &SeatingSnapshot, layout: &ChartLayout) -> String {
    let mut out = String::new();

    let heading = format!("{} - {}", title, snapshot.occupancy);
    let _ = writeln!(out, "{}", heading);
    let _ = writeln!(out, "{}", "=".repeat(heading.chars().count()));
    let _ = writeln!(out);

    let per_side = layout.seats_per_side.max(1) as usize;
    let number_width = snapshot.occupancy.total.to_string().len().max(2);
    let side_width = per_side * cell_width(number_width);
    let row_width = side_width * 2 + AISLE.len();

    let _ = writeln!(out, "{}", centered("FRONT", row_width));

    for row in layout.rows(snapshot.occupancy.total) {
        let mut line = String::new();

        for seat in &row.left {
            line.push_str(&cell(seat.number(), number_width, snapshot.occupant(*seat)));
        }
        pad_to(&mut line, side_width);

        line.push_str(AISLE);
        for seat in &row.right {
            line.push_str(&cell(seat.number(), number_width, snapshot.occupant(*seat)));
        }

        let _ = writeln!(out, "{}", line.trim_end());
    }

    let _ = writeln!(out, "{}", centered("REAR", row_width));
    let _ = writeln!(out);

    let _ = writeln!(out, "Waitlist ({})", snapshot.waitlist.len());
    if snapshot.waitlist.is_empty() {
        let _ = writeln!(out, "  Everyone has a seat!");
    }
    for name in &snapshot.waitlist {
        let _ = writeln!(out, "  - {}", name);
    }

    out
}

// -----------------------------------------------------------------------------
// Helpers
// -----------------------------------------------------------------------------

fn cell_width(number_width: usize) -> usize {
    // number + " " + name + one space of separation
    number_width + 1 + NAME_WIDTH + 1
}

fn cell(number: u32, number_width: usize, occupant: Option<&str>) -> String {
    let name = occupant.map(truncate).unwrap_or_else(|| "--".to_string());
    format!(
        "{:>nw$} {:<width$} ",
        number,
        name,
        nw = number_width,
        width = NAME_WIDTH
    )
}

fn truncate(name: &str) -> String {
    if name.chars().count() <= NAME_WIDTH {
        name.to_string()
    } else {
        let mut cut: String = name.chars().take(NAME_WIDTH - 1).collect();
        cut.push('~');
        cut
    }
}

fn pad_to(line: &mut String, width: usize) {
    let len = line.chars().count();
    if len < width {
        line.push_str(&" ".repeat(width - len));
    }
}

fn centered(label: &str, width: usize) -> String {
    let pad = width.saturating_sub(label.len()) / 2;
    format!("{}{}", " ".repeat(pad), label)
}
