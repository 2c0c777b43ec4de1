use chinup_flap::core::{GameConfig, LOG_FILE, RANKINGS_FILE, TICK_INTERVAL_MICROS};
use chinup_flap::input::{map_key, KeyAction};
use chinup_flap::ranking::{JsonRankingStore, MemoryRankingStore, RankingStore};
use chinup_flap::sensor::{FeedSensor, GestureSensor};
use chinup_flap::session::{process_input, process_tick, Session};
use chinup_flap::ui::{self, UiState};
use chinup_flap::utils::logging::init_logging;
use chinup_flap::utils::persistence;
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::thread;
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "chinup-flap", version)]
#[command(about = "Fly through the gates by doing chin-ups (or pressing Space)")]
struct Args {
    /// Index of the pose feed / camera to use
    #[arg(long, default_value_t = 0)]
    cam: u32,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    let data_dir = match persistence::data_dir() {
        Ok(dir) => Some(dir),
        Err(e) => {
            eprintln!("Warning: no data directory ({}), rankings will not be saved", e);
            None
        }
    };
    let log_path = data_dir.as_ref().map(|dir| dir.join(LOG_FILE));
    init_logging(log_path.as_deref());
    log::info!("Chin-up Flap starting (sensor {})", args.cam);

    let config = GameConfig::default().validated()?;

    let mut store: Box<dyn RankingStore> = match &data_dir {
        Some(dir) => Box::new(JsonRankingStore::new(dir.join(RANKINGS_FILE))),
        None => {
            log::warn!("Using in-memory rankings");
            Box::new(MemoryRankingStore::new())
        }
    };
    let feed_dir = data_dir.unwrap_or_else(std::env::temp_dir);
    let mut sensor = FeedSensor::new(feed_dir, config.world_height);
    let mut session = Session::new(config, args.cam, store.load());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut session, &mut sensor, store.as_mut());

    // Restore terminal before reporting any error
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    sensor.release();
    log::info!("Chin-up Flap exiting");
    result
}

/// Fixed-rate loop: input, one simulation step, render, then sleep until the
/// next tick. A late frame re-bases the schedule instead of running catch-up steps.
fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    session: &mut Session,
    sensor: &mut dyn GestureSensor,
    store: &mut dyn RankingStore,
) -> io::Result<()> {
    let tick = Duration::from_micros(TICK_INTERVAL_MICROS);
    let mut rng = rand::thread_rng();
    let mut ui_state = UiState::new();
    let mut next_tick = Instant::now() + tick;

    loop {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                match map_key(session.phase, key) {
                    Some(KeyAction::Quit) => return Ok(()),
                    Some(KeyAction::Session(input)) => {
                        let before = session.phase;
                        process_input(session, input, sensor);
                        if session.phase != before {
                            ui_state.clear();
                        }
                    }
                    None => {}
                }
            }
        }

        let outcome = process_tick(session, sensor, store, &mut rng);
        ui_state.apply_tick(&outcome);

        terminal.draw(|frame| ui::draw(frame, session, &ui_state))?;

        let now = Instant::now();
        if next_tick > now {
            thread::sleep(next_tick - now);
            next_tick += tick;
        } else {
            next_tick = now + tick;
        }
    }
}
