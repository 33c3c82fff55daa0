//! seating-core
//!
//! Pure seat-assignment logic:
//! - roster of passengers and numbered seats
//! - input messages / output events
//! - the seating engine (selection state machine + randomizer)
//! - confirmation capability for destructive bulk operations
//! - chart layout and render snapshots

pub mod seat;
pub mod passenger;
pub mod messages;
pub mod confirm;
pub mod seating_engine;
pub mod error;
pub mod chart;
pub mod snapshot;

pub use seat::SeatId;
pub use passenger::{PassengerId, Roster};

pub use messages::{InputMessage, SeatingEvent};

pub use confirm::{Approve, Confirm, ConfirmAction, Decline};
pub use seating_engine::SeatingEngine;
pub use error::SeatingError;
pub use chart::{ChartLayout, ChartRow};
pub use snapshot::{Occupancy, SeatingSnapshot};
