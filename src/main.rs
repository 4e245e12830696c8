//! Flappy entry point
//!
//! Sets up logging, settings and the terminal, then runs the frame loop.

use std::io::{self, Stdout};
use std::path::Path;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crossterm::{event, terminal};

use flappy::audio::{AudioManager, TerminalBell};
use flappy::persistence::FileStore;
use flappy::platform::input::{self, InputOptions};
use flappy::renderer::{TerminalRenderer, TerminalSession};
use flappy::sim::InputEvent;
use flappy::{Game, Settings};

fn init_logging(settings: &Settings) {
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(path) = &settings.log_file {
        match std::fs::OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => {
                builder
                    .target(env_logger::Target::Pipe(Box::new(file)))
                    .filter_level(log::LevelFilter::Info);
            }
            Err(e) => eprintln!("Could not open log file {}: {}", path.display(), e),
        }
    }
    builder.init();
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn main() -> io::Result<()> {
    let settings = Settings::load(Path::new(flappy::settings::SETTINGS_FILE));
    init_logging(&settings);
    log::info!("Flappy starting...");

    let seed = settings.seed.unwrap_or_else(time_seed);

    let mut audio = AudioManager::new(Box::new(TerminalBell::stdout()));
    audio.set_master_volume(settings.master_volume);
    audio.set_sfx_volume(settings.sfx_volume);
    audio.set_muted(settings.muted);

    let store = FileStore::new(&settings.best_score_path);
    let mut game = Game::new(seed, settings.tuning.clone(), Box::new(store), audio);

    let mut out = io::stdout();
    let session = TerminalSession::enter(&mut out)?;
    let result = run(&mut game, &settings, &mut out);

    // Flush before teardown, whatever ended the loop
    game.shutdown();
    session.leave()?;

    log::info!("Flappy exited");
    result
}

fn run(game: &mut Game, settings: &Settings, out: &mut Stdout) -> io::Result<()> {
    let opts = InputOptions {
        cell_size: settings.cell_size(),
        pause_on_blur: settings.pause_on_blur,
    };

    let (cols, rows) = terminal::size()?;
    let mut renderer = TerminalRenderer::new(cols, rows, opts.cell_size);
    game.handle_input(input::resize_event(cols, rows, opts.cell_size));
    renderer.draw(&game.snapshot(), out)?;

    let mut last_frame = Instant::now();
    while game.is_running() {
        // Block until the next tick is due or input arrives
        let mut dirty = false;
        if event::poll(game.until_next_tick())? {
            loop {
                let ev = event::read()?;
                if let event::Event::Resize(cols, rows) = ev {
                    renderer.resize(cols, rows);
                    dirty = true;
                }
                if let Some(game_input) = input::translate(&ev, game.mode(), &opts) {
                    game.handle_input(game_input);
                    dirty |= game_input != InputEvent::Quit;
                }
                if !game.is_running() || !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }

        let now = Instant::now();
        let frame_dt = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;

        if game.update(frame_dt) > 0 || dirty {
            renderer.draw(&game.snapshot(), out)?;
        }
    }

    Ok(())
}
