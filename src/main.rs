mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event},
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use galaxian::assets::AssetLoader;
use galaxian::audio::{AudioSink, LogAudio};
use galaxian::compute::{apply_command, init_state, tick};
use galaxian::config::GameConfig;
use galaxian::entities::GameState;
use galaxian::highscore::{self, HighScoreStore};
use galaxian::input::{command_for, Command};
use galaxian::scheduler::Scheduler;

#[derive(Parser, Debug)]
#[command(name = "galaxian", about = "Defend the board against a bouncing alien formation")]
struct Args {
    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Sprite directory (overrides the config)
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// One-in-N chance per alien per tick to fire (overrides the config)
    #[arg(long)]
    fire_odds: Option<u32>,
}

// ── Setup ─────────────────────────────────────────────────────────────────────

fn load_config(args: &Args) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(dir) = &args.assets {
        config.asset_dir = dir.clone();
    }
    if let Some(odds) = args.fire_odds {
        config.fire_odds = odds;
    }
    config.validate()?;
    Ok(config)
}

/// Logs go to a file: stdout and stderr belong to the game screen.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.
///
/// While the scheduler is running, pending key events are drained without
/// blocking, applied, and one simulation step follows.  Once the game is over
/// the scheduler is stopped and the loop blocks on input until a restart.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    scheduler: &mut Scheduler,
    rng: &mut StdRng,
    store: &mut HighScoreStore,
    rx: &mpsc::Receiver<Event>,
) -> Result<()> {
    let mut audio = LogAudio::new();

    loop {
        let mut events = Vec::new();
        if !scheduler.is_running() {
            match rx.recv() {
                Ok(ev) => events.push(ev),
                Err(_) => return Ok(()), // input thread gone
            }
        }
        events.extend(rx.try_iter());

        for ev in events {
            if let Event::Key(key) = ev {
                match command_for(&key, state.status) {
                    Some(Command::Quit) => return Ok(()),
                    Some(command) => apply_command(state, scheduler, command),
                    None => {}
                }
            }
        }

        if scheduler.is_running() {
            tick(state, scheduler, rng);
        }

        audio.play_all(state.drain_cues());
        if state.is_game_over() {
            store.record(state.high_score);
        }

        display::render(out, state)?;

        if scheduler.is_running() {
            scheduler.wait();
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_config(&args)?;
    init_logging(&config.log_file)?;
    log::info!("starting with {:?}", config);

    let sprites = AssetLoader::new(&config.asset_dir).load_all();
    let mut store = HighScoreStore::new(
        config
            .high_score_file
            .clone()
            .unwrap_or_else(highscore::default_path),
    );
    let high_score = store.load();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let (cols, rows) = terminal::size().context("querying terminal size")?;
    if cols < display::MIN_COLS || rows < display::MIN_ROWS {
        log::warn!(
            "terminal is {}x{}, the board needs {}x{}; it will be clipped",
            cols,
            rows,
            display::MIN_COLS,
            display::MIN_ROWS
        );
    }

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let mut state = init_state(sprites, config.fire_odds, high_score);
    let mut scheduler = Scheduler::new(config.tick_rate_hz);
    scheduler.start();

    let result = game_loop(&mut out, &mut state, &mut scheduler, &mut rng, &mut store, &rx);
    store.record(state.high_score);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(e) = &result {
        log::error!("{:#}", e);
    }
    result
}
