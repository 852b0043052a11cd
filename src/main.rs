mod display;

use std::io::{stdout, BufWriter, Write};
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::Instant;

use crossterm::{
    cursor,
    event::{
        self, Event, KeyEvent, KeyEventKind, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use platform_shooter::assets::{DirectorySource, SpriteAtlas};
use platform_shooter::config::GameConfig;
use platform_shooter::entities::GamePhase;
use platform_shooter::error::AppError;
use platform_shooter::game::Game;
use platform_shooter::input::{map_key, HoldTracker};

/// Once a movement key is repeating it counts as held while repeats keep
/// arriving within this many frames.  8 frames @ 60 FPS ≈ 133 ms, longer
/// than the usual 30-50 ms OS repeat interval.
const HOLD_WINDOW: u64 = 8;

/// Frames a fresh press stays held before the first repeat shows up.
/// 36 frames @ 60 FPS = 600 ms, past the usual 250-500 ms auto-repeat delay.
const INITIAL_HOLD_WINDOW: u64 = 36;

const DEFAULT_LOG_FILE: &str = "platform_shooter.log";

// ── Logging ───────────────────────────────────────────────────────────────────

/// The terminal is in raw alternate-screen mode while the game runs, so logs
/// go to `LOG_FILE` (or are dropped if it can't be opened).
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let path = std::env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
    let writer = match std::fs::OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => BoxMakeWriter::new(Mutex::new(file)),
        Err(_) => BoxMakeWriter::new(std::io::sink),
    };

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_ansi(false)
            .with_writer(writer)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_ansi(false)
            .with_writer(writer)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let _ = terminal::disable_raw_mode();
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Drive the phase machine until it reaches `Quit`.
///
/// Each frame drains every pending terminal event, turns presses into game
/// events, samples held movement keys, steps the game once, redraws, then
/// sleeps out the rest of the current phase's frame budget.
fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    game: &mut Game,
    atlas: &SpriteAtlas,
) -> std::io::Result<()> {
    let clock = Instant::now();
    let mut holds = HoldTracker::new(HOLD_WINDOW).with_initial_window(INITIAL_HOLD_WINDOW);
    let mut frame: u64 = 0;

    while game.phase() != GamePhase::Quit {
        let frame_start = Instant::now();
        frame += 1;

        let mut events = Vec::new();
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(KeyEvent { code, kind, modifiers, .. }) = ev else {
                continue;
            };
            match kind {
                KeyEventKind::Press => {
                    holds.press(code, frame);
                    events.extend(map_key(code, modifiers));
                }
                KeyEventKind::Repeat => holds.press(code, frame),
                KeyEventKind::Release => holds.release(code),
            }
        }

        let now_ms = u64::try_from(clock.elapsed().as_millis()).unwrap_or(u64::MAX);
        game.step(&events, holds.held(frame), now_ms);
        display::render(out, game, atlas)?;

        let budget = game.frame_duration();
        let elapsed = frame_start.elapsed();
        if elapsed < budget {
            thread::sleep(budget - elapsed);
        }
    }
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<(), AppError> {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let config = GameConfig::from_env().inspect_err(|err| {
        tracing::error!(%err, "invalid configuration");
    })?;
    let atlas = SpriteAtlas::load(&config.assets, &DirectorySource::new(&config.assets.dir));
    let mut game = Game::new(config, atlas.animations());
    tracing::info!(animations = ?game.animations(), "starting");

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = run(&mut out, &rx, &mut game, &atlas);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result?;
    tracing::info!("quit");
    Ok(())
}
