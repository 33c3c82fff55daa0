//! Message types used by the seating engine.
//!
//! These are **presentation-agnostic** logical messages:
//! - [`InputMessage`]: operator gestures the engine consumes.
//! - [`SeatingEvent`]: state changes the engine produces.
//!
//! Text encoders for both live in the `seating-protocol` crate;
//! this module is purely logical.

use crate::passenger::PassengerId;
use crate::seat::SeatId;

/// A single operator gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMessage {
    /// Passenger clicked in the waitlist (toggles the selection).
    SelectPassenger(PassengerId),

    /// Seat clicked: place the held passenger, or pick up the occupant.
    ClickSeat(SeatId),

    /// Remove a seat's occupant without picking them up.
    UnassignSeat(SeatId),

    /// Drop the held passenger without placing them.
    ClearSelection,

    /// Auto-fill open seats from the waitlist (needs confirmation).
    RandomizeRemaining,

    /// Empty every seat (needs confirmation).
    ClearAll,
}

/// A state change emitted by the engine, in the order it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatingEvent {
    /// The held passenger changed; `None` means nothing is held.
    SelectionChanged(Option<PassengerId>),

    /// `passenger` now occupies `seat`.
    Assigned { seat: SeatId, passenger: PassengerId },

    /// `passenger` was overwritten on `seat` by a placement and is back on
    /// the waitlist. This is a replace, the displaced passenger is not
    /// moved anywhere.
    Displaced { seat: SeatId, passenger: PassengerId },

    /// `passenger` left `seat` (unassign, pick-up, or relocation).
    Vacated { seat: SeatId, passenger: PassengerId },

    /// Every seat was emptied; `released` passengers went back to the waitlist.
    Cleared { released: usize },
}

impl SeatingEvent {
    /// True for events that change seat occupancy.
    pub fn changes_occupancy(&self) -> bool {
        !matches!(self, SeatingEvent::SelectionChanged(_))
    }
}
