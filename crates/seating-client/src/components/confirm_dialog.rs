// crates/seating-client/src/components/confirm_dialog.rs

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use seating_core::ConfirmAction;

pub fn draw_confirm_dialog(f: &mut Frame, area: Rect, action: ConfirmAction) {
    // Clear the area first for the overlay
    f.render_widget(Clear, area);

    let accent = match action {
        ConfirmAction::RandomizeRemaining => Color::Magenta,
        ConfirmAction::ClearAll => Color::Red,
    };

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            action.prompt(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Y]", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            Span::raw("es   "),
            Span::styled("[N]", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Span::raw("o"),
        ]),
    ];

    let dialog = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default()
            .title(" Confirm ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent)));

    f.render_widget(dialog, area);
}
