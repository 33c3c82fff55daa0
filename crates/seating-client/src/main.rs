// crates/seating-client/src/main.rs

mod app;
mod ui;
mod components;
mod events;
mod types;

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use seating_core::ConfirmAction;
use seating_protocol::{render_chart, run_script};
use tokio::sync::mpsc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::app::{App, InputMode};
use crate::events::spawn_input_reader;
use crate::types::ClientConfig;

#[derive(Parser)]
#[clap(name = "bus-seating")]
#[clap(about = "Seat assignment manager for a single bus trip")]
struct Cli {
    /// TOML file with title, seat count and roster
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Override the number of seats
    #[clap(short, long)]
    seats: Option<u32>,

    /// Seed for the auto-fill shuffle
    #[clap(long)]
    seed: Option<u64>,

    /// Run a session script instead of the terminal UI
    #[clap(long)]
    script: Option<PathBuf>,

    /// Where the printable chart is written
    #[clap(short, long)]
    print_to: Option<PathBuf>,

    /// Enable debug logging
    #[clap(short, long)]
    debug: bool,

    /// Log file used while the terminal UI is running
    #[clap(long, default_value = "bus-seating.log")]
    log_file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ClientConfig::load(path)?,
        None => ClientConfig::default(),
    };
    if let Some(seats) = cli.seats {
        config.total_seats = seats;
    }
    if let Some(path) = &cli.print_to {
        config.chart_path = path.clone();
    }

    let engine = config.build_engine(cli.seed)?;

    if let Some(script) = &cli.script {
        if cli.debug {
            init_logging(None)?;
        }
        return run_batch(engine, &config, script, cli.print_to.is_some());
    }

    if cli.debug {
        init_logging(Some(&cli.log_file))?;
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let app = App::new(engine, &config);
    let res = run_app(&mut terminal, app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

/// Install the tracing subscriber. The terminal UI owns stdout, so it logs to a file.
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
        }
    }

    Ok(())
}

fn run_batch(
    mut engine: seating_core::SeatingEngine,
    config: &ClientConfig,
    script: &Path,
    write_chart: bool,
) -> Result<()> {
    let raw = fs::read_to_string(script)
        .with_context(|| format!("reading script {}", script.display()))?;

    let lines = run_script(&mut engine, &raw)
        .with_context(|| format!("running script {}", script.display()))?;
    for line in &lines {
        println!("{}", line);
    }

    let chart = render_chart(&config.title, &engine.snapshot(), &config.layout());
    println!();
    print!("{}", chart);

    if write_chart {
        fs::write(&config.chart_path, &chart)
            .with_context(|| format!("writing chart to {}", config.chart_path.display()))?;
        info!(path = %config.chart_path.display(), "chart printed");
    }

    Ok(())
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();
    let reader = spawn_input_reader(tx);

    info!(
        seats = app.engine.total_seats(),
        passengers = app.engine.roster().len(),
        "session started"
    );

    let result = loop {
        // Draw UI
        if let Err(e) = terminal.draw(|f| ui::draw(f, &app)) {
            break Err(e.into());
        }

        let Some(event) = rx.recv().await else {
            error!("terminal input closed");
            break Ok(());
        };

        if let Event::Key(key) = event {
            if key.kind == KeyEventKind::Press {
                handle_key(&mut app, key);
            }
        }

        if app.should_quit {
            break Ok(());
        }
    };

    // Cleanup: closing the channel stops the reader at its next poll.
    drop(rx);
    if let Err(e) = reader.await {
        error!("input reader failed: {}", e);
    }

    info!(occupancy = %app.engine.occupancy(), "session ended");
    result
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if app.show_help {
        if matches!(key.code, KeyCode::F(1) | KeyCode::Esc) {
            app.toggle_help();
        }
        return;
    }

    match app.input_mode {
        InputMode::Confirming(_) => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                app.answer_confirmation(true);
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.answer_confirmation(false);
            }
            _ => {}
        },

        InputMode::Normal => match key.code {
            // Global hotkeys
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                app.should_quit = true;
            }
            KeyCode::Tab => {
                app.next_panel();
            }

            // Navigation
            KeyCode::Up | KeyCode::Char('k') => {
                app.move_selection_up();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.move_selection_down();
            }
            KeyCode::Left | KeyCode::Char('h') => {
                app.move_selection_left();
            }
            KeyCode::Right | KeyCode::Char('l') => {
                app.move_selection_right();
            }

            // Seating
            KeyCode::Enter => {
                app.activate();
            }
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => {
                app.unassign_at_cursor();
            }
            KeyCode::Esc => {
                app.cancel_placement();
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                app.request_confirmation(ConfirmAction::RandomizeRemaining);
            }
            KeyCode::Char('c') | KeyCode::Char('C') => {
                app.request_confirmation(ConfirmAction::ClearAll);
            }
            KeyCode::Char('p') | KeyCode::Char('P') => {
                app.print_chart();
            }

            // View toggles
            KeyCode::Char('w') | KeyCode::Char('W') => {
                app.toggle_waitlist();
            }
            KeyCode::F(1) => {
                app.toggle_help();
            }

            _ => {}
        },
    }
}
