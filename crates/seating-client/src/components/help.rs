// crates/seating-client/src/components/help.rs

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

const SHORTCUTS: [(&str, Color, &str); 11] = [
    ("Enter", Color::Green, "Select passenger / place or pick up at seat"),
    ("D/Del", Color::Red, "Unassign seat under cursor"),
    ("Esc", Color::Yellow, "Cancel placing"),
    ("R/r", Color::Magenta, "Auto-fill remaining seats"),
    ("C/c", Color::Red, "Clear all seats"),
    ("P/p", Color::Cyan, "Print chart to file"),
    ("Tab", Color::Blue, "Switch panel"),
    ("W/w", Color::Blue, "Toggle waitlist"),
    ("↑↓←→/hjkl", Color::White, "Move cursor"),
    ("F1", Color::Gray, "Toggle help"),
    ("Q/q", Color::Red, "Quit"),
];

pub fn draw_help(f: &mut Frame, area: Rect) {
    // Clear the area first for the overlay
    f.render_widget(Clear, area);

    let help_items: Vec<ListItem> = SHORTCUTS
        .iter()
        .map(|(key, color, description)| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<10}", key),
                    Style::default().fg(*color).add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(" - {}", description)),
            ]))
        })
        .collect();

    let help_list = List::new(help_items)
        .block(Block::default()
            .title(" Help - Keyboard Shortcuts ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)));

    f.render_widget(help_list, area);

    // Add footer with close instruction
    let footer = Paragraph::new("Press F1 or ESC to close help")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    let footer_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(2),
        width: area.width,
        height: 1,
    };

    f.render_widget(footer, footer_area);
}
