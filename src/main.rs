//! Terminal falling-block game (default binary).
//!
//! Uses crossterm for input and the framebuffer diff renderer for output.
//! One fixed-rate tick drives gravity; key events are applied as they arrive,
//! always before the next tick is evaluated.

use std::fs::File;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::{terminal, QueueableCommand};
use log::{debug, error, info};

use termtris::config::Config;
use termtris::core::{GameSnapshot, GameState};
use termtris::input::{handle_key_event, should_quit};
use termtris::term::{FrameBuffer, Hud, PlayfieldView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = Config::from_env()?;
    init_logging(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        error!("{err:#}");
    }
    result
}

/// Logs go to a file: stderr shares the screen with the game.
fn init_logging(config: &Config) -> Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn place(term: &mut TerminalRenderer, width: u16, height: u16) {
    let (row, col) = Viewport::new(width, height).playfield_origin();
    term.set_origin(row, col);
}

/// Line clears are worth an info line; plain locks only show at debug.
fn log_lock(game: &mut GameState) {
    if let Some(event) = game.take_last_event() {
        if event.lines_cleared > 0 {
            info!("{event} (score {}, level {})", game.score(), game.level());
        } else {
            debug!("{event}");
        }
    }
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    info!("starting: seed {}, tick {:?}", config.seed, config.tick);

    let mut game = GameState::new(config.seed);
    let view = PlayfieldView;
    let mut hud = Hud::new();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut overlay = Vec::with_capacity(1024);

    let (w, h) = terminal::size().unwrap_or((80, 24));
    place(term, w, h);

    let tick_duration = config.tick;
    let mut last_tick = Instant::now();

    loop {
        // Render.
        game.snapshot_into(&mut snap);
        if term.needs_full_redraw() {
            overlay.queue(terminal::Clear(terminal::ClearType::All))?;
            hud.invalidate();
        }
        hud.encode_into(&snap, term.origin(), &mut overlay)?;
        term.write_raw(&overlay)?;
        overlay.clear();

        view.render_into(&snap, &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        info!("quit (score {}, lines {})", game.score(), game.lines());
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                        log_lock(&mut game);
                    }
                }
                Event::Resize(w, h) => place(term, w, h),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.tick();
            log_lock(&mut game);
        }
    }
}
