// crates/seating-client/src/components/seat_map.rs

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use seating_core::{ChartRow, SeatId, SeatingSnapshot};

use crate::app::{App, Panel};

/// Characters of the occupant name shown inside a seat.
const NAME_WIDTH: usize = 12;

const AISLE: &str = "   ";

pub fn draw_seat_map(f: &mut Frame, area: Rect, app: &App) {
    let snapshot = app.snapshot();
    let focused = app.current_panel == Panel::Seats;

    let block = Block::default()
        .title(" Bus ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused { Color::Yellow } else { Color::White }));

    let marker_style = Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD);

    let per_side = app.layout.seats_per_side.max(1) as usize;
    let number_width = snapshot.occupancy.total.to_string().len();
    let cursor = focused.then_some(app.seat_cursor);

    let mut lines = vec![Line::styled("F R O N T", marker_style)];
    for row in app.layout.rows(snapshot.occupancy.total) {
        lines.push(row_line(&snapshot, &row, per_side, number_width, cursor));
    }
    lines.push(Line::styled("R E A R", marker_style));

    // Keep the cursor row visible on short terminals.
    let inner_height = area.height.saturating_sub(2) as usize;
    let cursor_line = app
        .layout
        .position(app.seat_cursor)
        .map(|(row, _)| row + 1)
        .unwrap_or(0);
    let scroll = if inner_height > 0 && cursor_line >= inner_height {
        cursor_line + 1 - inner_height
    } else {
        0
    };

    let map = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .scroll((scroll as u16, 0))
        .block(block);

    f.render_widget(map, area);
}

/// One bus row. Missing seats on either side are padded so every row has
/// the same width and stays aligned under `Alignment::Center`.
fn row_line(
    snapshot: &SeatingSnapshot,
    row: &ChartRow,
    per_side: usize,
    number_width: usize,
    cursor: Option<SeatId>,
) -> Line<'static> {
    let mut spans = Vec::new();

    for (i, side) in [&row.left, &row.right].into_iter().enumerate() {
        if i == 1 {
            spans.push(Span::raw(AISLE));
        }
        for seat in side {
            spans.push(seat_span(snapshot, *seat, number_width, cursor == Some(*seat)));
            spans.push(Span::raw(" "));
        }
        let missing = per_side.saturating_sub(side.len());
        if missing > 0 {
            let blank = missing * (cell_width(number_width) + 1);
            spans.push(Span::raw(" ".repeat(blank)));
        }
    }

    Line::from(spans)
}

fn cell_width(number_width: usize) -> usize {
    // "[" + number + " " + name + "]"
    number_width + NAME_WIDTH + 3
}

fn seat_span(
    snapshot: &SeatingSnapshot,
    seat: SeatId,
    number_width: usize,
    under_cursor: bool,
) -> Span<'static> {
    let occupant = snapshot.occupant(seat);

    let label = match occupant {
        Some(name) => short_name(name),
        None => "·".to_string(),
    };
    let text = format!(
        "[{:>nw$} {:<width$}]",
        seat.number(),
        label,
        nw = number_width,
        width = NAME_WIDTH
    );

    let mut style = match occupant {
        Some(_) => Style::default().fg(Color::White).bg(Color::Blue),
        None if snapshot.is_drop_target(seat) => Style::default().fg(Color::Cyan),
        None => Style::default().fg(Color::DarkGray),
    };
    if under_cursor {
        style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
    }

    Span::styled(text, style)
}

fn short_name(name: &str) -> String {
    if name.chars().count() <= NAME_WIDTH {
        name.to_string()
    } else {
        let mut cut: String = name.chars().take(NAME_WIDTH - 1).collect();
        cut.push('…');
        cut
    }
}
