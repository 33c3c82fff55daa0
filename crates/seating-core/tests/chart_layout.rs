// crates/seating-core/tests/chart_layout.rs
use seating_core::{ChartLayout, SeatId};

fn numbers(seats: &[SeatId]) -> Vec<u32> {
    seats.iter().map(|s| s.number()).collect()
}

#[test]
fn reference_bus_has_eleven_full_rows_and_a_short_one() {
    let rows = ChartLayout::default().rows(46);

    assert_eq!(rows.len(), 12);
    for row in &rows[..11] {
        assert_eq!(row.left.len(), 2);
        assert_eq!(row.right.len(), 2);
    }
    assert_eq!(numbers(&rows[0].left), vec![1, 2]);
    assert_eq!(numbers(&rows[0].right), vec![3, 4]);
    assert_eq!(numbers(&rows[11].left), vec![45, 46]);
    assert!(rows[11].right.is_empty());

    let all: Vec<u32> = rows.iter().flat_map(|r| r.seats()).map(|s| s.number()).collect();
    assert_eq!(all, (1..=46).collect::<Vec<_>>());
}

#[test]
fn short_row_fills_left_side_first() {
    let rows = ChartLayout::new(3).rows(10);

    assert_eq!(rows.len(), 2);
    assert_eq!(numbers(&rows[1].left), vec![7, 8, 9]);
    assert_eq!(numbers(&rows[1].right), vec![10]);
}

#[test]
fn position_and_seat_at_are_inverse() {
    let layout = ChartLayout::default();

    assert_eq!(layout.position(SeatId::new(1)), Some((0, 0)));
    assert_eq!(layout.position(SeatId::new(7)), Some((1, 2)));
    assert_eq!(layout.position(SeatId::new(0)), None);

    for n in 1..=46 {
        let (row, col) = layout.position(SeatId::new(n)).unwrap();
        assert_eq!(layout.seat_at(row, col, 46), Some(SeatId::new(n)));
    }

    // Past the last seat, or past the row width.
    assert_eq!(layout.seat_at(11, 2, 46), None);
    assert_eq!(layout.seat_at(0, 4, 46), None);
}

#[test]
fn zero_seats_per_side_is_treated_as_one() {
    let layout = ChartLayout::new(0);
    assert_eq!(layout.seats_per_row(), 2);
    assert_eq!(layout.rows(3).len(), 2);
}
