// crates/seating-client/src/components/status_bar.rs

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, InputMode};

pub fn draw_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let held = app.snapshot().selected;

    let (msg, style) = match (app.input_mode, held) {
        (InputMode::Confirming(action), _) => {
            let prompt = vec![
                Span::styled(action.prompt(), Style::default().fg(Color::Yellow)),
                Span::raw(" [Y]es [N]o"),
            ];
            (Line::from(prompt), Style::default().fg(Color::Yellow))
        }
        (InputMode::Normal, Some(name)) => {
            // Placing indicator
            let placing = vec![
                Span::styled("PLACING ", Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD)),
                Span::styled(name, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
                Span::raw(" | Enter on any empty seat | "),
                Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
                Span::raw(" Cancel"),
            ];
            (Line::from(placing), Style::default().fg(Color::Blue))
        }
        (InputMode::Normal, None) => {
            let shortcuts = vec![
                Span::styled("[Enter]", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
                Span::raw("Select "),
                Span::styled("[D]", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
                Span::raw("Unassign "),
                Span::styled("[R]", Style::default().fg(Color::Magenta)),
                Span::raw("Auto-Fill "),
                Span::styled("[C]", Style::default().fg(Color::Red)),
                Span::raw("lear "),
                Span::styled("[P]", Style::default().fg(Color::Cyan)),
                Span::raw("rint "),
                Span::styled("[Q]", Style::default().fg(Color::Gray)),
                Span::raw("uit"),
            ];
            (Line::from(shortcuts), Style::default())
        }
    };

    let status_block = Block::default()
        .borders(Borders::ALL)
        .border_style(style);

    let paragraph = Paragraph::new(msg)
        .block(status_block)
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}
