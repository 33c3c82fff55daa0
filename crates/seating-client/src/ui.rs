// crates/seating-client/src/ui.rs

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, InputMode};
use crate::components::{
    confirm_dialog::draw_confirm_dialog,
    help::draw_help,
    seat_map::draw_seat_map,
    status_bar::draw_status_bar,
    waitlist::draw_waitlist,
};

pub fn draw(f: &mut Frame, app: &App) {
    // Main layout
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),   // Header
            Constraint::Min(10),     // Main content
            Constraint::Length(3),   // Status bar
        ])
        .split(f.size());

    draw_header(f, chunks[0], app);
    draw_main_content(f, chunks[1], app);
    draw_status_bar(f, chunks[2], app);

    if let InputMode::Confirming(action) = app.input_mode {
        draw_confirm_dialog(f, centered_rect(40, 20, f.size()), action);
    }

    if app.show_help {
        draw_help(f, centered_rect(60, 70, f.size()));
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(45),
            Constraint::Percentage(25),
        ])
        .split(area);

    // Left: title and seated counter
    let occupancy = app.engine.occupancy();
    let counter_color = if occupancy.is_full() { Color::Green } else { Color::Cyan };

    let left_text = vec![
        Span::styled(&app.title, Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::styled(
            occupancy.assigned.to_string(),
            Style::default().fg(counter_color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" / {} seated", occupancy.total),
            Style::default().fg(Color::Gray),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_text))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(left_paragraph, header_chunks[0]);

    // Center: feedback from the last action
    let center_text = app.status_message.clone().unwrap_or_default();
    let center_paragraph = Paragraph::new(center_text)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(center_paragraph, header_chunks[1]);

    // Right: help hints
    let help_text = "[F1]Help [Tab]Panel [W]aitlist";
    let right_paragraph = Paragraph::new(help_text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(right_paragraph, header_chunks[2]);
}

fn draw_main_content(f: &mut Frame, area: Rect, app: &App) {
    if !app.show_waitlist {
        draw_seat_map(f, area, app);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(32),  // Waitlist sidebar
            Constraint::Min(20),     // Bus
        ])
        .split(area);

    draw_waitlist(f, chunks[0], app);
    draw_seat_map(f, chunks[1], app);
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
