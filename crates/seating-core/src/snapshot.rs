//! Render-facing views of the engine state.
//!
//! The engine works in ids; renderers want names. A [`SeatingSnapshot`]
//! resolves everything once so a chart printer or a UI frame can read it
//! without going back to the roster.

use std::fmt;

use crate::seat::SeatId;

/// The `(assigned, total)` pair behind the "12 / 46 seated" counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Occupancy {
    pub assigned: usize,
    pub total: u32,
}

impl Occupancy {
    pub fn open(&self) -> usize {
        (self.total as usize).saturating_sub(self.assigned)
    }

    pub fn is_full(&self) -> bool {
        self.open() == 0
    }
}

impl fmt::Display for Occupancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {} seated", self.assigned, self.total)
    }
}

/// Owned, name-resolved copy of the engine state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SeatingSnapshot {
    /// Occupant name per seat, index `n - 1` for seat `n`.
    pub seats: Vec<Option<String>>,

    /// Unassigned passengers in roster order.
    pub waitlist: Vec<String>,

    /// Passenger currently held for placement.
    pub selected: Option<String>,

    pub occupancy: Occupancy,
}

impl SeatingSnapshot {
    pub fn occupant(&self, seat: SeatId) -> Option<&str> {
        let index = (seat.number() as usize).checked_sub(1)?;
        self.seats.get(index)?.as_deref()
    }

    /// Empty and a passenger is held: the seat is a valid drop target.
    pub fn is_drop_target(&self, seat: SeatId) -> bool {
        self.selected.is_some() && self.occupant(seat).is_none()
    }
}
