//! Seat identifiers.

use std::fmt;

/// A numbered seat, `1..=total_seats`.
///
/// Seats carry no attributes beyond their number. A `SeatId` can be
/// built from any integer; the engine checks the range when it is used.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SeatId(u32);

impl SeatId {
    pub fn new(number: u32) -> Self {
        SeatId(number)
    }

    pub fn number(self) -> u32 {
        self.0
    }

    /// All seats of a bus with `total` seats, front to back.
    pub fn all(total: u32) -> impl Iterator<Item = SeatId> {
        (1..=total).map(SeatId)
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for SeatId {
    fn from(number: u32) -> Self {
        SeatId(number)
    }
}
