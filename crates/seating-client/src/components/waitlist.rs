// crates/seating-client/src/components/waitlist.rs

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::{App, Panel};

pub fn draw_waitlist(f: &mut Frame, area: Rect, app: &App) {
    let snapshot = app.snapshot();
    let focused = app.current_panel == Panel::Waitlist;

    let block = Block::default()
        .title(format!(" Waitlist ({}) ", snapshot.waitlist.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused { Color::Yellow } else { Color::White }));

    if snapshot.waitlist.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from("List is empty."),
            Line::from(Span::styled("Everyone has a seat!", Style::default().fg(Color::Gray))),
        ])
        .alignment(Alignment::Center)
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = snapshot
        .waitlist
        .iter()
        .map(|name| {
            let held = snapshot.selected.as_deref() == Some(name.as_str());
            let style = if held {
                Style::default().fg(Color::White).bg(Color::Blue).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let marker = if held { " >" } else { "" };
            ListItem::new(Line::from(vec![
                Span::styled(name.clone(), style),
                Span::styled(marker, Style::default().fg(Color::Blue)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if focused {
        state.select(Some(app.waitlist_index));
    }

    f.render_stateful_widget(list, area, &mut state);
}
