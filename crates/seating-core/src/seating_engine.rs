//! Seat assignment engine.
//!
//! Owns the session state:
//! - the fixed [`Roster`] and seat count,
//! - the assignment relation `seat -> passenger`,
//! - the "held" passenger awaiting placement.
//!
//! A seat click is interpreted through a small state machine driven by
//! the selection:
//!
//! | held      | seat      | effect                                       |
//! |-----------|-----------|----------------------------------------------|
//! | `p`       | empty     | place `p`, release selection                 |
//! | `p`       | has `q`   | place `p`, `q` drops to the waitlist         |
//! | nothing   | has `q`   | empty the seat, hold `q`                     |
//! | nothing   | empty     | nothing                                      |
//!
//! The occupied-seat placement is a replace, not a swap: `q` is not moved
//! into `p`'s old seat.
//!
//! Every mutating call returns the [`SeatingEvent`]s it produced. A call
//! that fails validation returns an error and changes nothing.

use std::collections::{BTreeMap, HashMap};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::confirm::{Confirm, ConfirmAction};
use crate::error::SeatingError;
use crate::messages::{InputMessage, SeatingEvent};
use crate::passenger::{PassengerId, Roster};
use crate::seat::SeatId;
use crate::snapshot::{Occupancy, SeatingSnapshot};

#[derive(Debug)]
pub struct SeatingEngine {
    roster: Roster,
    total_seats: u32,

    /// Seat -> occupant. Empty seats are absent.
    seats: BTreeMap<SeatId, PassengerId>,

    /// Occupant -> seat. Kept in lock-step with `seats` so a passenger can
    /// never hold two seats.
    seat_of: HashMap<PassengerId, SeatId>,

    selected: Option<PassengerId>,

    rng: StdRng,
}

impl SeatingEngine {
    /// Create an engine with an empty bus, seeding the shuffle from OS entropy.
    pub fn new(roster: Roster, total_seats: u32) -> Result<Self, SeatingError> {
        Self::with_rng(roster, total_seats, StdRng::from_entropy())
    }

    /// Create an engine whose auto-fill is reproducible.
    pub fn with_seed(roster: Roster, total_seats: u32, seed: u64) -> Result<Self, SeatingError> {
        Self::with_rng(roster, total_seats, StdRng::seed_from_u64(seed))
    }

    fn with_rng(roster: Roster, total_seats: u32, rng: StdRng) -> Result<Self, SeatingError> {
        if total_seats == 0 {
            return Err(SeatingError::NoSeats);
        }

        debug!(passengers = roster.len(), total_seats, "seating engine created");

        Ok(SeatingEngine {
            roster,
            total_seats,
            seats: BTreeMap::new(),
            seat_of: HashMap::new(),
            selected: None,
            rng,
        })
    }

    /// Dispatch a single operator gesture.
    ///
    /// `confirm` is only consulted for `RandomizeRemaining` and `ClearAll`.
    pub fn process_message(
        &mut self,
        msg: InputMessage,
        confirm: &mut dyn Confirm,
    ) -> Result<Vec<SeatingEvent>, SeatingError> {
        match msg {
            InputMessage::SelectPassenger(passenger) => self.select_passenger(passenger),
            InputMessage::ClickSeat(seat) => self.click_seat(seat),
            InputMessage::UnassignSeat(seat) => self.unassign_seat(seat),
            InputMessage::ClearSelection => Ok(self.clear_selection()),
            InputMessage::RandomizeRemaining => Ok(self.randomize_remaining(confirm)),
            InputMessage::ClearAll => Ok(self.clear_all(confirm)),
        }
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Toggle the held passenger.
    ///
    /// Selecting the held passenger again releases it; selecting anyone
    /// else replaces the selection. Seats are never touched.
    pub fn select_passenger(
        &mut self,
        passenger: PassengerId,
    ) -> Result<Vec<SeatingEvent>, SeatingError> {
        self.check_passenger(passenger)?;

        let next = if self.selected == Some(passenger) {
            None
        } else {
            Some(passenger)
        };
        self.selected = next;

        debug!(passenger = %passenger, held = next.is_some(), "select passenger");
        Ok(vec![SeatingEvent::SelectionChanged(next)])
    }

    /// Drop the held passenger without placing them.
    pub fn clear_selection(&mut self) -> Vec<SeatingEvent> {
        match self.selected.take() {
            Some(_) => vec![SeatingEvent::SelectionChanged(None)],
            None => Vec::new(),
        }
    }

    /// Seat click: place the held passenger, or pick up the occupant.
    pub fn click_seat(&mut self, seat: SeatId) -> Result<Vec<SeatingEvent>, SeatingError> {
        self.check_seat(seat)?;

        let mut events = Vec::new();
        let occupant = self.seats.get(&seat).copied();

        match (self.selected, occupant) {
            (Some(held), _) => {
                // Covers both the empty seat and the replace case.
                self.place(seat, held, &mut events);
                self.selected = None;
                events.push(SeatingEvent::SelectionChanged(None));
                debug!(seat = %seat, passenger = %held, "placed held passenger");
            }
            (None, Some(occupant)) => {
                self.vacate(seat, &mut events);
                self.selected = Some(occupant);
                events.push(SeatingEvent::SelectionChanged(Some(occupant)));
                debug!(seat = %seat, passenger = %occupant, "picked up occupant");
            }
            (None, None) => {}
        }

        Ok(events)
    }

    /// Remove a seat's occupant, leaving the selection alone.
    pub fn unassign_seat(&mut self, seat: SeatId) -> Result<Vec<SeatingEvent>, SeatingError> {
        self.check_seat(seat)?;

        let mut events = Vec::new();
        self.vacate(seat, &mut events);
        Ok(events)
    }

    /// Fill open seats with waitlisted passengers in a uniformly random order.
    ///
    /// Waitlisted passengers are taken in roster order and paired with a
    /// Fisher-Yates shuffle of the open seats. Passengers beyond the number
    /// of open seats stay on the waitlist. Existing assignments are kept.
    /// Releases the selection. Does nothing if `confirm` declines.
    pub fn randomize_remaining<C>(&mut self, confirm: &mut C) -> Vec<SeatingEvent>
    where
        C: Confirm + ?Sized,
    {
        if !confirm.confirm(ConfirmAction::RandomizeRemaining) {
            debug!("randomize declined");
            return Vec::new();
        }

        let mut open = self.open_seats();
        let waiting = self.waitlist();
        open.shuffle(&mut self.rng);

        let mut events = Vec::new();
        for (passenger, seat) in waiting.iter().copied().zip(open.iter().copied()) {
            self.place(seat, passenger, &mut events);
        }

        if self.selected.take().is_some() {
            events.push(SeatingEvent::SelectionChanged(None));
        }

        let placed = waiting.len().min(open.len());
        info!(
            placed,
            still_waiting = waiting.len() - placed,
            open_seats = open.len() - placed,
            "randomized remaining seats"
        );

        events
    }

    /// Empty every seat and release the selection. Does nothing if
    /// `confirm` declines.
    pub fn clear_all<C>(&mut self, confirm: &mut C) -> Vec<SeatingEvent>
    where
        C: Confirm + ?Sized,
    {
        if !confirm.confirm(ConfirmAction::ClearAll) {
            debug!("clear declined");
            return Vec::new();
        }

        let released = self.seats.len();
        self.seats.clear();
        self.seat_of.clear();

        let mut events = vec![SeatingEvent::Cleared { released }];
        if self.selected.take().is_some() {
            events.push(SeatingEvent::SelectionChanged(None));
        }

        info!(released, "cleared all seats");
        events
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Unassigned passengers, in roster order. Computed on every call.
    pub fn waitlist(&self) -> Vec<PassengerId> {
        self.roster
            .ids()
            .filter(|id| !self.seat_of.contains_key(id))
            .collect()
    }

    /// Empty seats, ascending.
    pub fn open_seats(&self) -> Vec<SeatId> {
        SeatId::all(self.total_seats)
            .filter(|seat| !self.seats.contains_key(seat))
            .collect()
    }

    pub fn occupant(&self, seat: SeatId) -> Option<PassengerId> {
        self.seats.get(&seat).copied()
    }

    pub fn seat_of(&self, passenger: PassengerId) -> Option<SeatId> {
        self.seat_of.get(&passenger).copied()
    }

    /// The assignment relation, ordered by seat.
    pub fn assignment(&self) -> &BTreeMap<SeatId, PassengerId> {
        &self.seats
    }

    pub fn selected(&self) -> Option<PassengerId> {
        self.selected
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn total_seats(&self) -> u32 {
        self.total_seats
    }

    pub fn occupancy(&self) -> Occupancy {
        Occupancy {
            assigned: self.seats.len(),
            total: self.total_seats,
        }
    }

    /// Display name of a passenger id, or `"<unknown>"`.
    pub fn name(&self, passenger: PassengerId) -> &str {
        self.roster.name(passenger).unwrap_or("<unknown>")
    }

    /// Resolve the whole state into names for rendering.
    pub fn snapshot(&self) -> SeatingSnapshot {
        let seats = SeatId::all(self.total_seats)
            .map(|seat| self.occupant(seat).map(|p| self.name(p).to_string()))
            .collect();

        let waitlist = self
            .waitlist()
            .into_iter()
            .map(|p| self.name(p).to_string())
            .collect();

        SeatingSnapshot {
            seats,
            waitlist,
            selected: self.selected.map(|p| self.name(p).to_string()),
            occupancy: self.occupancy(),
        }
    }

    // -------------------------------------------------------------------------
    // Helpers
    // -------------------------------------------------------------------------

    fn check_seat(&self, seat: SeatId) -> Result<(), SeatingError> {
        if seat.number() == 0 || seat.number() > self.total_seats {
            return Err(SeatingError::SeatOutOfRange {
                seat: seat.number(),
                total: self.total_seats,
            });
        }
        Ok(())
    }

    fn check_passenger(&self, passenger: PassengerId) -> Result<(), SeatingError> {
        if self.roster.contains(passenger) {
            Ok(())
        } else {
            Err(SeatingError::UnknownPassenger(passenger.to_string()))
        }
    }

    /// Put `passenger` on `seat`, keeping both directions of the relation
    /// consistent.
    ///
    /// If the passenger already sits elsewhere, that seat is vacated first.
    /// If the seat holds someone else, they are dropped from the relation.
    fn place(&mut self, seat: SeatId, passenger: PassengerId, events: &mut Vec<SeatingEvent>) {
        if let Some(previous_seat) = self.seat_of.remove(&passenger) {
            if previous_seat != seat {
                self.seats.remove(&previous_seat);
                events.push(SeatingEvent::Vacated {
                    seat: previous_seat,
                    passenger,
                });
            }
        }

        if let Some(previous) = self.seats.insert(seat, passenger) {
            if previous != passenger {
                self.seat_of.remove(&previous);
                events.push(SeatingEvent::Displaced {
                    seat,
                    passenger: previous,
                });
            }
        }

        self.seat_of.insert(passenger, seat);
        events.push(SeatingEvent::Assigned { seat, passenger });
    }

    fn vacate(&mut self, seat: SeatId, events: &mut Vec<SeatingEvent>) {
        if let Some(passenger) = self.seats.remove(&seat) {
            self.seat_of.remove(&passenger);
            events.push(SeatingEvent::Vacated { seat, passenger });
        }
    }
}
