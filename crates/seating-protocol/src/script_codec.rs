// crates/seating-protocol/src/script_codec.rs

//! Session script codec.
//!
//! A session script is a replayable log of operator gestures, one per
//! line. It drives the batch mode of the client and the regression
//! scenarios of the engine.
//!
//! Input format (lines → [`ScriptCommand`]):
//!
//! - Select / deselect a passenger:
//!   `P, passenger name`
//!
//! - Click a seat:
//!   `S, seat(int)`
//!
//! - Unassign a seat:
//!   `U, seat(int)`
//!
//! - Cancel placement (release the held passenger):
//!   `E`
//!
//! - Randomize remaining seats, optionally declining the confirmation:
//!   `R` / `R, Y` / `R, N`
//!
//! - Clear all seats, optionally declining the confirmation:
//!   `X` / `X, Y` / `X, N`
//!
//! Output format ([`SeatingEvent`] → line):
//!
//! - Assigned:   `A, seat, name`
//! - Displaced:  `D, seat, name`
//! - Vacated:    `V, seat, name`
//! - Held:       `H, name` (or `H, -` when released)
//! - Cleared:    `C, released`

use std::num::ParseIntError;

use seating_core::{
    ConfirmAction, InputMessage, Roster, SeatId, SeatingEngine, SeatingError, SeatingEvent,
};
use thiserror::Error;
use tracing::debug;

/// One parsed script line, before passenger names are resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    SelectPassenger(String),
    ClickSeat(u32),
    UnassignSeat(u32),
    ClearSelection,
    RandomizeRemaining { confirmed: bool },
    ClearAll { confirmed: bool },
}

/// Why a single line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    #[error("`{command}` expects {expected}")]
    WrongArity {
        command: char,
        expected: &'static str,
    },

    #[error("invalid seat number `{text}`: {source}")]
    BadSeat {
        text: String,
        #[source]
        source: ParseIntError,
    },

    #[error("confirmation must be Y or N, got `{0}`")]
    BadConfirmation(String),
}

/// Failure while replaying a script, tagged with its 1-based line number.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: ParseError,
    },

    #[error("line {line}: {source}")]
    Engine {
        line: usize,
        #[source]
        source: SeatingError,
    },
}

impl ScriptCommand {
    /// Resolve passenger names against `roster`.
    pub fn to_message(&self, roster: &Roster) -> Result<InputMessage, SeatingError> {
        Ok(match self {
            ScriptCommand::SelectPassenger(name) => {
                InputMessage::SelectPassenger(roster.require(name)?)
            }
            ScriptCommand::ClickSeat(seat) => InputMessage::ClickSeat(SeatId::new(*seat)),
            ScriptCommand::UnassignSeat(seat) => InputMessage::UnassignSeat(SeatId::new(*seat)),
            ScriptCommand::ClearSelection => InputMessage::ClearSelection,
            ScriptCommand::RandomizeRemaining { .. } => InputMessage::RandomizeRemaining,
            ScriptCommand::ClearAll { .. } => InputMessage::ClearAll,
        })
    }

    /// Answer this line gives to a confirmation prompt. Lines without a
    /// confirmation flag answer yes.
    pub fn confirmed(&self) -> bool {
        match self {
            ScriptCommand::RandomizeRemaining { confirmed }
            | ScriptCommand::ClearAll { confirmed } => *confirmed,
            _ => true,
        }
    }
}

/// Parse a single script line.
///
/// Returns `Ok(None)` for blank lines or comments (starting with `#`).
pub fn parse_input_line(line: &str) -> Result<Option<ScriptCommand>, ParseError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    // Names may contain anything but the first comma, so split once.
    let (head, rest) = match trimmed.split_once(',') {
        Some((head, rest)) => (head.trim(), Some(rest.trim())),
        None => (trimmed, None),
    };

    let mut chars = head.chars();
    let command = match (chars.next(), chars.next()) {
        (Some(c), None) => c.to_ascii_uppercase(),
        _ => return Err(ParseError::UnknownCommand(head.to_string())),
    };

    let command = match command {
        'P' => match rest {
            Some(name) if !name.is_empty() => ScriptCommand::SelectPassenger(name.to_string()),
            _ => {
                return Err(ParseError::WrongArity {
                    command,
                    expected: "a passenger name",
                })
            }
        },
        'S' => ScriptCommand::ClickSeat(parse_seat(command, rest)?),
        'U' => ScriptCommand::UnassignSeat(parse_seat(command, rest)?),
        'E' => {
            if rest.is_some() {
                return Err(ParseError::WrongArity {
                    command,
                    expected: "no arguments",
                });
            }
            ScriptCommand::ClearSelection
        }
        'R' => ScriptCommand::RandomizeRemaining {
            confirmed: parse_confirmation(rest)?,
        },
        'X' => ScriptCommand::ClearAll {
            confirmed: parse_confirmation(rest)?,
        },
        _ => return Err(ParseError::UnknownCommand(head.to_string())),
    };

    Ok(Some(command))
}

/// Format a [`SeatingEvent`] as a script output line.
pub fn format_event(event: &SeatingEvent, roster: &Roster) -> String {
    let name = |p| roster.name(p).unwrap_or("<unknown>");

    match *event {
        SeatingEvent::Assigned { seat, passenger } => format!("A, {}, {}", seat, name(passenger)),
        SeatingEvent::Displaced { seat, passenger } => format!("D, {}, {}", seat, name(passenger)),
        SeatingEvent::Vacated { seat, passenger } => format!("V, {}, {}", seat, name(passenger)),
        SeatingEvent::SelectionChanged(Some(passenger)) => format!("H, {}", name(passenger)),
        SeatingEvent::SelectionChanged(None) => "H, -".to_string(),
        SeatingEvent::Cleared { released } => format!("C, {}", released),
    }
}

/// Replay a whole script against `engine`, returning the formatted events.
///
/// Stops at the first line that fails to parse or is rejected by the engine.
pub fn run_script(engine: &mut SeatingEngine, script: &str) -> Result<Vec<String>, ScriptError> {
    let mut output = Vec::new();

    for (index, raw_line) in script.lines().enumerate() {
        let line = index + 1;

        let command = match parse_input_line(raw_line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(source) => return Err(ScriptError::Parse { line, source }),
        };

        let msg = command
            .to_message(engine.roster())
            .map_err(|source| ScriptError::Engine { line, source })?;

        let confirmed = command.confirmed();
        let mut answer = move |_: ConfirmAction| confirmed;

        let events = engine
            .process_message(msg, &mut answer)
            .map_err(|source| ScriptError::Engine { line, source })?;

        debug!(line, events = events.len(), "script line applied");

        output.extend(events.iter().map(|e| format_event(e, engine.roster())));
    }

    Ok(output)
}

// -----------------------------------------------------------------------------
// Helpers
// -----------------------------------------------------------------------------

fn parse_seat(command: char, rest: Option<&str>) -> Result<u32, ParseError> {
    let text = match rest {
        Some(text) if !text.is_empty() && !text.contains(',') => text,
        _ => {
            return Err(ParseError::WrongArity {
                command,
                expected: "a single seat number",
            })
        }
    };

    parse_u32(text).map_err(|source| ParseError::BadSeat {
        text: text.to_string(),
        source,
    })
}

fn parse_confirmation(rest: Option<&str>) -> Result<bool, ParseError> {
    match rest.map(str::to_ascii_uppercase).as_deref() {
        None | Some("Y") | Some("YES") => Ok(true),
        Some("N") | Some("NO") => Ok(false),
        Some(_) => Err(ParseError::BadConfirmation(
            rest.unwrap_or_default().to_string(),
        )),
    }
}

fn parse_u32(s: &str) -> Result<u32, ParseIntError> {
    s.parse::<u32>()
}
