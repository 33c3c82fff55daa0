// crates/seating-client/src/app.rs

use std::fs;
use std::path::PathBuf;

use seating_core::{
    Approve, ChartLayout, ConfirmAction, PassengerId, SeatId, SeatingEngine, SeatingError,
    SeatingEvent, SeatingSnapshot,
};
use seating_protocol::{format_event, render_chart};
use tracing::{debug, error, info, warn};

use crate::types::ClientConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// A bulk operation is waiting for a yes/no answer.
    Confirming(ConfirmAction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Waitlist,
    Seats,
}

pub struct App {
    pub engine: SeatingEngine,
    pub title: String,
    pub layout: ChartLayout,
    pub chart_path: PathBuf,

    // UI state
    pub input_mode: InputMode,
    pub current_panel: Panel,
    pub should_quit: bool,
    pub show_help: bool,
    pub show_waitlist: bool,

    // Cursors
    pub waitlist_index: usize,
    pub seat_cursor: SeatId,

    /// One-line feedback for the last action.
    pub status_message: Option<String>,
}

impl App {
    pub fn new(engine: SeatingEngine, config: &ClientConfig) -> Self {
        Self {
            engine,
            title: config.title.clone(),
            layout: config.layout(),
            chart_path: config.chart_path.clone(),
            input_mode: InputMode::Normal,
            current_panel: Panel::Waitlist,
            should_quit: false,
            show_help: false,
            show_waitlist: true,
            waitlist_index: 0,
            seat_cursor: SeatId::new(1),
            status_message: None,
        }
    }

    pub fn snapshot(&self) -> SeatingSnapshot {
        self.engine.snapshot()
    }

    pub fn next_panel(&mut self) {
        self.current_panel = match self.current_panel {
            Panel::Waitlist => Panel::Seats,
            Panel::Seats if self.show_waitlist => Panel::Waitlist,
            Panel::Seats => Panel::Seats,
        };
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Show or hide the waitlist sidebar. Hiding it moves focus to the seats.
    pub fn toggle_waitlist(&mut self) {
        self.show_waitlist = !self.show_waitlist;
        if !self.show_waitlist {
            self.current_panel = Panel::Seats;
        }
    }

    // -------------------------------------------------------------------------
    // Cursor movement
    // -------------------------------------------------------------------------

    pub fn move_selection_up(&mut self) {
        match self.current_panel {
            Panel::Waitlist => {
                self.waitlist_index = self.waitlist_index.saturating_sub(1);
            }
            Panel::Seats => self.move_seat_cursor(-1, 0),
        }
    }

    pub fn move_selection_down(&mut self) {
        match self.current_panel {
            Panel::Waitlist => {
                let len = self.engine.waitlist().len();
                if self.waitlist_index + 1 < len {
                    self.waitlist_index += 1;
                }
            }
            Panel::Seats => self.move_seat_cursor(1, 0),
        }
    }

    pub fn move_selection_left(&mut self) {
        if self.current_panel == Panel::Seats {
            self.move_seat_cursor(0, -1);
        }
    }

    pub fn move_selection_right(&mut self) {
        if self.current_panel == Panel::Seats {
            self.move_seat_cursor(0, 1);
        }
    }

    fn move_seat_cursor(&mut self, rows: isize, columns: isize) {
        let Some((row, column)) = self.layout.position(self.seat_cursor) else {
            return;
        };
        let (Some(row), Some(column)) = (
            row.checked_add_signed(rows),
            column.checked_add_signed(columns),
        ) else {
            return;
        };

        if let Some(seat) = self
            .layout
            .seat_at(row, column, self.engine.total_seats())
        {
            self.seat_cursor = seat;
        }
    }

    /// Passenger under the waitlist cursor.
    pub fn highlighted_passenger(&self) -> Option<PassengerId> {
        self.engine.waitlist().get(self.waitlist_index).copied()
    }

    // -------------------------------------------------------------------------
    // Engine operations
    // -------------------------------------------------------------------------

    /// Enter: select the highlighted passenger, or click the seat under the cursor.
    pub fn activate(&mut self) {
        match self.current_panel {
            Panel::Waitlist => {
                if let Some(passenger) = self.highlighted_passenger() {
                    let result = self.engine.select_passenger(passenger);
                    let holding = self.engine.selected().is_some();
                    self.apply(result);
                    if holding {
                        self.current_panel = Panel::Seats;
                    }
                }
            }
            Panel::Seats => {
                let result = self.engine.click_seat(self.seat_cursor);
                self.apply(result);
            }
        }
    }

    pub fn unassign_at_cursor(&mut self) {
        if self.current_panel == Panel::Seats {
            let result = self.engine.unassign_seat(self.seat_cursor);
            self.apply(result);
        }
    }

    pub fn cancel_placement(&mut self) {
        let events = self.engine.clear_selection();
        self.apply(Ok(events));
    }

    /// Open the yes/no dialog for a bulk operation. Nothing changes yet.
    pub fn request_confirmation(&mut self, action: ConfirmAction) {
        self.input_mode = InputMode::Confirming(action);
    }

    /// Close the dialog, running the pending operation only on `yes`.
    pub fn answer_confirmation(&mut self, yes: bool) {
        let InputMode::Confirming(action) = self.input_mode else {
            return;
        };
        self.input_mode = InputMode::Normal;

        if !yes {
            info!(?action, "operator declined");
            self.status_message = Some("Cancelled".to_string());
            return;
        }

        let events = match action {
            ConfirmAction::RandomizeRemaining => self.engine.randomize_remaining(&mut Approve),
            ConfirmAction::ClearAll => self.engine.clear_all(&mut Approve),
        };
        self.apply(Ok(events));

        self.status_message = Some(match action {
            ConfirmAction::RandomizeRemaining => {
                let waiting = self.engine.waitlist().len();
                format!("Auto-filled: {}, {} still waiting", self.engine.occupancy(), waiting)
            }
            ConfirmAction::ClearAll => "All seats cleared".to_string(),
        });
    }

    /// Write the printable chart to `chart_path`.
    pub fn print_chart(&mut self) {
        let chart = render_chart(&self.title, &self.snapshot(), &self.layout);
        match fs::write(&self.chart_path, chart) {
            Ok(()) => {
                info!(path = %self.chart_path.display(), "chart printed");
                self.status_message = Some(format!("Chart written to {}", self.chart_path.display()));
            }
            Err(e) => {
                error!(path = %self.chart_path.display(), error = %e, "failed to print chart");
                self.status_message = Some(format!("Print failed: {}", e));
            }
        }
    }

    /// Log the engine's events and refresh cursors and feedback.
    fn apply(&mut self, result: Result<Vec<SeatingEvent>, SeatingError>) {
        match result {
            Ok(events) => {
                for event in &events {
                    debug!(event = %format_event(event, self.engine.roster()), "engine event");

                    if let SeatingEvent::Displaced { seat, passenger } = event {
                        self.status_message = Some(format!(
                            "{} left seat {} and is back on the waitlist",
                            self.engine.name(*passenger),
                            seat
                        ));
                    }
                }
            }
            Err(e) => {
                warn!(error = %e, "operation rejected");
                self.status_message = Some(e.to_string());
            }
        }

        self.clamp_waitlist_index();
    }

    fn clamp_waitlist_index(&mut self) {
        let len = self.engine.waitlist().len();
        if self.waitlist_index >= len {
            self.waitlist_index = len.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn app(names: &[&str], seats: u32) -> App {
        let config = ClientConfig {
            total_seats: seats,
            roster: names.iter().map(|s| s.to_string()).collect(),
            chart_path: std::env::temp_dir().join("bus-seating-app-test.txt"),
            ..ClientConfig::default()
        };
        let engine = config.build_engine(Some(3)).unwrap();
        App::new(engine, &config)
    }

    #[test]
    fn enter_on_waitlist_then_seat_places_passenger() {
        let mut app = app(&["Ana", "Beto"], 6);
        app.move_selection_down();
        app.activate();

        assert_eq!(app.current_panel, Panel::Seats);
        assert_eq!(app.snapshot().selected.as_deref(), Some("Beto"));

        app.move_selection_right();
        app.move_selection_down();
        assert_eq!(app.seat_cursor, SeatId::new(6));

        app.activate();
        let snap = app.snapshot();
        assert_eq!(snap.occupant(SeatId::new(6)), Some("Beto"));
        assert_eq!(snap.waitlist, vec!["Ana"]);
        assert_eq!(app.waitlist_index, 0);
    }

    #[test]
    fn seat_cursor_stays_on_the_bus() {
        let mut app = app(&["Ana"], 5);
        app.current_panel = Panel::Seats;

        app.move_selection_left();
        app.move_selection_up();
        assert_eq!(app.seat_cursor, SeatId::new(1));

        app.move_selection_down();
        assert_eq!(app.seat_cursor, SeatId::new(5));
        // Row 2 only has seat 5.
        app.move_selection_right();
        assert_eq!(app.seat_cursor, SeatId::new(5));
    }

    #[test]
    fn bulk_operations_wait_for_confirmation() {
        let mut app = app(&["Ana", "Beto", "Cata"], 3);

        app.request_confirmation(ConfirmAction::RandomizeRemaining);
        assert_eq!(
            app.input_mode,
            InputMode::Confirming(ConfirmAction::RandomizeRemaining)
        );
        assert_eq!(app.engine.occupancy().assigned, 0);

        app.answer_confirmation(false);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.engine.occupancy().assigned, 0);

        app.request_confirmation(ConfirmAction::RandomizeRemaining);
        app.answer_confirmation(true);
        assert_eq!(app.engine.occupancy().assigned, 3);

        app.request_confirmation(ConfirmAction::ClearAll);
        app.answer_confirmation(true);
        assert_eq!(app.engine.occupancy().assigned, 0);
        assert_eq!(app.status_message.as_deref(), Some("All seats cleared"));
    }

    #[test]
    fn replace_reports_displaced_passenger() {
        let mut app = app(&["Ana", "Beto"], 4);
        app.activate(); // hold Ana
        app.activate(); // seat 1
        app.current_panel = Panel::Waitlist;
        app.activate(); // hold Beto
        app.activate(); // seat 1 again, Ana is replaced

        assert_eq!(
            app.status_message.as_deref(),
            Some("Ana left seat 1 and is back on the waitlist")
        );
        assert_eq!(app.snapshot().waitlist, vec!["Ana"]);
    }

    #[test]
    fn cancel_and_unassign() {
        let mut app = app(&["Ana"], 2);
        app.activate();
        app.cancel_placement();
        assert_eq!(app.engine.selected(), None);

        app.current_panel = Panel::Waitlist;
        app.activate();
        app.activate();
        assert_eq!(app.engine.occupancy().assigned, 1);

        app.unassign_at_cursor();
        assert_eq!(app.engine.occupancy().assigned, 0);
        assert_eq!(app.engine.selected(), None);
    }

    #[test]
    fn hiding_waitlist_focuses_seats() {
        let mut app = app(&["Ana"], 2);
        app.toggle_waitlist();
        assert_eq!(app.current_panel, Panel::Seats);
        app.next_panel();
        assert_eq!(app.current_panel, Panel::Seats);
        app.toggle_waitlist();
        app.next_panel();
        assert_eq!(app.current_panel, Panel::Waitlist);
    }

    #[test]
    fn print_writes_chart_file() {
        let mut app = app(&["Ana"], 2);
        app.print_chart();

        let written = fs::read_to_string(&app.chart_path).unwrap();
        assert!(written.starts_with("Bus Manager - 0 / 2 seated"));
        assert!(written.contains("  - Ana"));
        let _ = fs::remove_file(&app.chart_path);
    }
}
