// crates/seating-protocol/tests/script_codec.rs
use pretty_assertions::assert_eq;
use seating_core::{InputMessage, Roster, SeatId, SeatingEvent};
use seating_protocol::script_codec::{format_event, parse_input_line, ParseError, ScriptCommand};

#[test]
fn parses_every_command() {
    let cases = [
        ("P, Diego De León", ScriptCommand::SelectPassenger("Diego De León".into())),
        ("S, 12", ScriptCommand::ClickSeat(12)),
        ("s,3", ScriptCommand::ClickSeat(3)),
        ("U, 46", ScriptCommand::UnassignSeat(46)),
        ("E", ScriptCommand::ClearSelection),
        ("R", ScriptCommand::RandomizeRemaining { confirmed: true }),
        ("R, n", ScriptCommand::RandomizeRemaining { confirmed: false }),
        ("X, Y", ScriptCommand::ClearAll { confirmed: true }),
        ("X, no", ScriptCommand::ClearAll { confirmed: false }),
    ];

    for (line, expected) in cases {
        assert_eq!(parse_input_line(line), Ok(Some(expected)), "line {:?}", line);
    }
}

#[test]
fn skips_blank_lines_and_comments() {
    assert_eq!(parse_input_line(""), Ok(None));
    assert_eq!(parse_input_line("   "), Ok(None));
    assert_eq!(parse_input_line("#name: anything, S, 1"), Ok(None));
}

#[test]
fn passenger_names_keep_inner_commas() {
    assert_eq!(
        parse_input_line("P, Cervantes, Juan Armando"),
        Ok(Some(ScriptCommand::SelectPassenger(
            "Cervantes, Juan Armando".into()
        )))
    );
}

#[test]
fn rejects_malformed_lines() {
    assert_eq!(
        parse_input_line("Z, 1"),
        Err(ParseError::UnknownCommand("Z".into()))
    );
    assert_eq!(
        parse_input_line("SEAT, 1"),
        Err(ParseError::UnknownCommand("SEAT".into()))
    );
    assert!(matches!(
        parse_input_line("S"),
        Err(ParseError::WrongArity { command: 'S', .. })
    ));
    assert!(matches!(
        parse_input_line("U, 1, 2"),
        Err(ParseError::WrongArity { command: 'U', .. })
    ));
    assert!(matches!(
        parse_input_line("P,  "),
        Err(ParseError::WrongArity { command: 'P', .. })
    ));
    assert!(matches!(
        parse_input_line("E, 1"),
        Err(ParseError::WrongArity { command: 'E', .. })
    ));
    assert!(matches!(
        parse_input_line("S, -4"),
        Err(ParseError::BadSeat { .. })
    ));
    assert_eq!(
        parse_input_line("R, maybe"),
        Err(ParseError::BadConfirmation("maybe".into()))
    );
}

#[test]
fn resolves_names_against_roster() {
    let roster = Roster::new(["Omar", "César"]).unwrap();

    let msg = ScriptCommand::SelectPassenger("César".into())
        .to_message(&roster)
        .unwrap();
    assert_eq!(msg, InputMessage::SelectPassenger(roster.find("César").unwrap()));

    assert_eq!(
        ScriptCommand::ClickSeat(4).to_message(&roster).unwrap(),
        InputMessage::ClickSeat(SeatId::new(4))
    );
    assert!(ScriptCommand::SelectPassenger("Rod".into())
        .to_message(&roster)
        .is_err());
}

#[test]
fn formats_events() {
    let roster = Roster::new(["Omar", "César"]).unwrap();
    let omar = roster.find("Omar").unwrap();
    let cesar = roster.find("César").unwrap();
    let seat = SeatId::new(9);

    let lines: Vec<String> = [
        SeatingEvent::SelectionChanged(Some(cesar)),
        SeatingEvent::Displaced { seat, passenger: omar },
        SeatingEvent::Assigned { seat, passenger: cesar },
        SeatingEvent::SelectionChanged(None),
        SeatingEvent::Vacated { seat, passenger: cesar },
        SeatingEvent::Cleared { released: 3 },
    ]
    .iter()
    .map(|e| format_event(e, &roster))
    .collect();

    assert_eq!(
        lines,
        vec![
            "H, César",
            "D, 9, Omar",
            "A, 9, César",
            "H, -",
            "V, 9, César",
            "C, 3",
        ]
    );
}
