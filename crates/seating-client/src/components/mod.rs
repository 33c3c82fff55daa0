// crates/seating-client/src/components/mod.rs

pub mod waitlist;
pub mod seat_map;
pub mod status_bar;
pub mod confirm_dialog;
pub mod help;
