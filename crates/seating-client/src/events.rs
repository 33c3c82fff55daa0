// crates/seating-client/src/events.rs

use std::time::Duration;

use crossterm::event::{self, Event};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::{debug, error};

/// How long a single poll waits before re-checking whether the UI is gone.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Read terminal events on a blocking thread and forward them to the UI loop.
///
/// The task ends once the receiving side is dropped or the terminal
/// reports an error.
pub fn spawn_input_reader(tx: UnboundedSender<Event>) -> JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        loop {
            if tx.is_closed() {
                break;
            }

            match event::poll(POLL_INTERVAL) {
                Ok(true) => match event::read() {
                    Ok(ev) => {
                        if tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        error!("Failed to read terminal event: {}", e);
                        break;
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    error!("Failed to poll terminal: {}", e);
                    break;
                }
            }
        }

        debug!("input reader stopped");
    })
}
