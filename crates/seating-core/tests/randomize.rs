// crates/seating-core/tests/randomize.rs
use std::collections::{BTreeMap, HashMap, HashSet};

use seating_core::{
    Approve, ConfirmAction, Decline, Roster, SeatId, SeatingEngine, SeatingEvent,
};

fn engine_with_seed(names: &[&str], seats: u32, seed: u64) -> SeatingEngine {
    let roster = Roster::new(names.iter().copied()).expect("valid roster");
    SeatingEngine::with_seed(roster, seats, seed).expect("valid engine")
}

fn seat(engine: &mut SeatingEngine, name: &str, seat: u32) {
    let p = engine.roster().find(name).expect("name in roster");
    engine.select_passenger(p).unwrap();
    engine.click_seat(SeatId::new(seat)).unwrap();
}

#[test]
fn fills_open_seats_and_leaves_overflow_waiting() {
    // 6 seats, 3 taken, 5 waiting.
    let names = ["A", "B", "C", "D", "E", "F", "G", "H"];
    let mut e = engine_with_seed(&names, 6, 42);
    seat(&mut e, "A", 2);
    seat(&mut e, "B", 4);
    seat(&mut e, "C", 5);

    let before: BTreeMap<_, _> = e.assignment().clone();
    let waiting_before = e.waitlist();
    assert_eq!(waiting_before.len(), 5);

    let events = e.randomize_remaining(&mut Approve);

    // Existing seats are untouched.
    for (seat, passenger) in &before {
        assert_eq!(e.occupant(*seat), Some(*passenger));
    }

    // The three open seats now hold three distinct former waiters.
    let open_before = [SeatId::new(1), SeatId::new(3), SeatId::new(6)];
    let newly_seated: Vec<_> = open_before
        .iter()
        .map(|s| e.occupant(*s).expect("open seat filled"))
        .collect();
    let distinct: HashSet<_> = newly_seated.iter().collect();
    assert_eq!(distinct.len(), 3);
    assert!(newly_seated.iter().all(|p| waiting_before.contains(p)));

    // Waitlist is walked in roster order: D, E, F get seats; G, H wait.
    let names_seated: HashSet<&str> = newly_seated.iter().map(|p| e.name(*p)).collect();
    assert_eq!(names_seated, HashSet::from(["D", "E", "F"]));
    let still_waiting: Vec<&str> = e.waitlist().into_iter().map(|p| e.name(p)).collect();
    assert_eq!(still_waiting, vec!["G", "H"]);

    let assigned = events
        .iter()
        .filter(|ev| matches!(ev, SeatingEvent::Assigned { .. }))
        .count();
    assert_eq!(assigned, 3);
    assert!(e.occupancy().is_full());
}

#[test]
fn no_open_seats_is_a_quiet_noop() {
    let mut e = engine_with_seed(&["A", "B", "C"], 2, 1);
    seat(&mut e, "A", 1);
    seat(&mut e, "B", 2);
    let before = e.assignment().clone();

    let events = e.randomize_remaining(&mut Approve);

    assert!(events.is_empty());
    assert_eq!(e.assignment(), &before);
    assert_eq!(e.waitlist().len(), 1);
}

#[test]
fn empty_waitlist_leaves_seats_open() {
    let mut e = engine_with_seed(&["A"], 5, 1);
    seat(&mut e, "A", 3);

    e.randomize_remaining(&mut Approve);

    assert_eq!(e.occupancy().assigned, 1);
    assert_eq!(e.open_seats().len(), 4);
}

#[test]
fn randomize_releases_selection() {
    let mut e = engine_with_seed(&["A", "B", "C"], 4, 3);
    let c = e.roster().find("C").unwrap();
    e.select_passenger(c).unwrap();

    let events = e.randomize_remaining(&mut Approve);

    assert_eq!(e.selected(), None);
    assert_eq!(events.last(), Some(&SeatingEvent::SelectionChanged(None)));
    assert!(e.waitlist().is_empty());
}

#[test]
fn declined_randomize_changes_nothing() {
    let mut e = engine_with_seed(&["A", "B", "C"], 4, 3);
    let b = e.roster().find("B").unwrap();
    e.select_passenger(b).unwrap();

    let mut asked = Vec::new();
    let events = e.randomize_remaining(&mut |action: ConfirmAction| {
        asked.push(action);
        false
    });

    assert!(events.is_empty());
    assert_eq!(asked, vec![ConfirmAction::RandomizeRemaining]);
    assert!(e.assignment().is_empty());
    assert_eq!(e.selected(), Some(b));

    assert!(e.randomize_remaining(&mut Decline).is_empty());
}

#[test]
fn same_seed_gives_same_chart() {
    let names = ["A", "B", "C", "D", "E"];
    let mut first = engine_with_seed(&names, 8, 99);
    let mut second = engine_with_seed(&names, 8, 99);

    first.randomize_remaining(&mut Approve);
    second.randomize_remaining(&mut Approve);

    assert_eq!(first.assignment(), second.assignment());
}

/// Every ordering of 3 passengers over 3 open seats should come up about
/// equally often. 6000 trials give ~1000 per ordering with a standard
/// deviation near 29; the bounds sit more than 5 deviations out.
#[test]
fn shuffle_is_uniform_over_seat_orderings() {
    let mut e = engine_with_seed(&["A", "B", "C"], 3, 2024);
    let ids: Vec<_> = e.roster().ids().collect();

    let trials = 6000;
    let mut counts: HashMap<Vec<u32>, u32> = HashMap::new();

    for _ in 0..trials {
        e.randomize_remaining(&mut Approve);
        let ordering: Vec<u32> = ids
            .iter()
            .map(|p| e.seat_of(*p).expect("everyone seated").number())
            .collect();
        *counts.entry(ordering).or_default() += 1;
        e.clear_all(&mut Approve);
    }

    assert_eq!(counts.len(), 6, "all 3! orderings should occur");
    for (ordering, count) in &counts {
        assert!(
            (850..=1150).contains(count),
            "ordering {:?} seen {} times",
            ordering,
            count
        );
    }
}

/// A lone waiter should land on each open seat with equal probability,
/// regardless of where the open seats are.
#[test]
fn single_waiter_lands_uniformly() {
    let mut e = engine_with_seed(&["A", "B", "C", "Z"], 6, 77);
    seat(&mut e, "A", 1);
    seat(&mut e, "B", 3);
    seat(&mut e, "C", 4);
    let z = e.roster().find("Z").unwrap();

    let trials = 3000;
    let mut counts: BTreeMap<u32, u32> = BTreeMap::new();

    for _ in 0..trials {
        e.randomize_remaining(&mut Approve);
        let landed = e.seat_of(z).expect("Z seated");
        *counts.entry(landed.number()).or_default() += 1;
        e.unassign_seat(landed).unwrap();
    }

    assert_eq!(counts.keys().copied().collect::<Vec<_>>(), vec![2, 5, 6]);
    for count in counts.values() {
        assert!((850..=1150).contains(count), "counts {:?}", counts);
    }
}
