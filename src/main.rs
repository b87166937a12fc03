mod keyboard;
mod terminal;
mod ui;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::supports_keyboard_enhancement;
use keyboard::KeyboardState;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use terminal::{RawMode, TerminalGuard};
use tilesnake::core::{FRAME_INTERVAL_MICROS, LOG_FILE_NAME};
use tilesnake::utils::persistence;
use tilesnake::{build_info, frame_tick, FrameClock, GameSession, SaveManager, TileDisplay};
use tracing_subscriber::EnvFilter;
use ui::draw_ui;

/// Send tracing output to a log file in the data directory. The terminal
/// belongs to the game, so nothing is written to stderr.
fn init_logging() {
    let Ok(path) = persistence::save_path(LOG_FILE_NAME) else {
        return;
    };
    let Ok(file) = File::create(path) else {
        return;
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
}

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Tilesnake - snake on a 20x18 tile grid\n");
                println!("Usage: tilesnake [option]\n");
                println!("Options:");
                println!("  --reset-scores  Erase all stored high scores");
                println!("  --version       Show version information");
                println!("  --help          Show this help message\n");
                println!("Controls:");
                println!("  Arrows/WASD  Move, or change speed on the title screen");
                println!("  Z/Space      Start a run");
                println!("  Enter        Start, pause and resume");
                println!("  Tab/X        Toggle wrap-around on the title screen");
                println!("  Q/Esc        Quit");
                std::process::exit(0);
            }
            "--reset-scores" => {
                if SaveManager::new()?.reset_scores()? {
                    println!("High scores erased.");
                } else {
                    println!("No high scores saved yet.");
                }
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'tilesnake --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    init_logging();
    tracing::info!(version = %build_info::version_line(), "starting");

    let save_manager = SaveManager::new()?;
    let config = persistence::load_config();
    let mut session = GameSession::new(config, save_manager.load_or_default());
    let mut display = TileDisplay::new();
    display.apply_all(&session.redraw());

    // Setup terminal; the guard restores it on every exit path
    let mut guard = TerminalGuard::enter(io::stdout(), RawMode::CROSSTERM)?;
    let reports_release = supports_keyboard_enhancement().unwrap_or(false);
    if reports_release {
        guard.enable_key_releases()?;
    }
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = run(
        &mut terminal,
        &mut session,
        &mut display,
        &save_manager,
        reports_release,
    );

    drop(terminal);
    drop(guard);

    if let Err(e) = persistence::save_config(&session.config) {
        tracing::warn!(error = %e, "failed to save config");
    }
    tracing::info!("exiting");
    result
}

/// Frame loop: gather input, step the engine, draw, wait for the next frame.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &mut GameSession,
    display: &mut TileDisplay,
    save_manager: &SaveManager,
    reports_release: bool,
) -> io::Result<()> {
    let mut keyboard = KeyboardState::new(reports_release);
    let mut clock = FrameClock::new(Duration::from_micros(FRAME_INTERVAL_MICROS));
    let mut rng = rand::thread_rng();

    loop {
        let now = Instant::now();
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Release && keyboard::is_quit(&key) {
                        return Ok(());
                    }
                    keyboard.handle(&key, now);
                }
                Event::Resize(_, _) => {
                    terminal.clear()?;
                    display.apply_all(&session.redraw());
                }
                _ => {}
            }
        }

        let result = frame_tick(session, clock.frame(), keyboard.held(now), &mut rng);
        display.apply_all(&result.commands);

        if result.scores_changed {
            if let Err(e) = save_manager.save(&session.high_scores) {
                tracing::warn!(error = %e, "failed to save high scores");
            }
        }

        terminal.draw(|f| draw_ui(f, display))?;
        clock.wait_next_frame();
    }
}
