//! Physical seat layout of the bus.
//!
//! Seats are numbered front to back, left to right, with an aisle in the
//! middle of each row. A short final row fills the left side first, so a
//! 46-seat bus with two seats per side is 11 full rows plus a last row of
//! two seats on the left.

use crate::seat::SeatId;

/// Seats on each side of the aisle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartLayout {
    pub seats_per_side: u32,
}

impl Default for ChartLayout {
    fn default() -> Self {
        ChartLayout { seats_per_side: 2 }
    }
}

/// One row of the bus: the seats left and right of the aisle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartRow {
    pub left: Vec<SeatId>,
    pub right: Vec<SeatId>,
}

impl ChartRow {
    pub fn seats(&self) -> impl Iterator<Item = SeatId> + '_ {
        self.left.iter().chain(self.right.iter()).copied()
    }
}

impl ChartLayout {
    pub fn new(seats_per_side: u32) -> Self {
        ChartLayout {
            seats_per_side: seats_per_side.max(1),
        }
    }

    pub fn seats_per_row(&self) -> u32 {
        self.seats_per_side.max(1) * 2
    }

    /// Split seats `1..=total_seats` into rows, front to back.
    pub fn rows(&self, total_seats: u32) -> Vec<ChartRow> {
        let per_side = self.seats_per_side.max(1) as usize;
        let seats: Vec<SeatId> = SeatId::all(total_seats).collect();

        seats
            .chunks(per_side * 2)
            .map(|chunk| {
                let split = chunk.len().min(per_side);
                ChartRow {
                    left: chunk[..split].to_vec(),
                    right: chunk[split..].to_vec(),
                }
            })
            .collect()
    }

    /// `(row, column)` of a seat, where columns count across the aisle
    /// (`0..seats_per_row`). Used for cursor movement in the seat map.
    pub fn position(&self, seat: SeatId) -> Option<(usize, usize)> {
        let n = seat.number();
        if n == 0 {
            return None;
        }
        let per_row = self.seats_per_row();
        let zero_based = n - 1;
        Some(((zero_based / per_row) as usize, (zero_based % per_row) as usize))
    }

    /// Inverse of [`ChartLayout::position`], bounded by `total_seats`.
    pub fn seat_at(&self, row: usize, column: usize, total_seats: u32) -> Option<SeatId> {
        let per_row = self.seats_per_row() as usize;
        if column >= per_row {
            return None;
        }
        let n = row * per_row + column + 1;
        if n as u64 > total_seats as u64 {
            None
        } else {
            Some(SeatId::new(n as u32))
        }
    }
}
