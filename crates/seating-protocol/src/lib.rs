//! seating-protocol
//!
//! Text encodings for the seating engine.
//!
//! This crate turns logical engine messages
//! (`seating_core::InputMessage` / `SeatingEvent`) into text and back,
//! and renders the engine state as a printable chart.
//!
//! - [`script_codec`] : line-oriented session scripts (batch mode / replay)
//! - [`chart_text`]   : plain-text seating chart for printing

pub mod script_codec;
pub mod chart_text;

pub use script_codec::{
    format_event,
    parse_input_line,
    run_script,
    ParseError,
    ScriptCommand,
    ScriptError,
};
pub use chart_text::render_chart;
