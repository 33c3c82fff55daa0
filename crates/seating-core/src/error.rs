//! Error types for the seating engine.
//!
//! The engine has no I/O, so every failure is a rejected argument:
//! an out-of-range seat, a passenger outside the roster, or a roster /
//! grid that cannot be built. A failed call leaves the engine untouched.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeatingError {
    /// Seat id outside `1..=total`.
    #[error("seat {seat} is out of range (valid seats are 1..={total})")]
    SeatOutOfRange { seat: u32, total: u32 },

    /// Passenger id or name that is not part of the roster.
    #[error("unknown passenger: {0}")]
    UnknownPassenger(String),

    /// The same name appears twice in the roster.
    #[error("duplicate passenger name in roster: {0}")]
    DuplicatePassenger(String),

    /// A roster entry is empty after trimming.
    #[error("roster entry {index} has a blank name")]
    BlankPassengerName { index: usize },

    /// A bus with zero seats.
    #[error("seat count must be at least 1")]
    NoSeats,
}
