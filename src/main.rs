//! Terminal explosion runner (default binary).
//!
//! One thread owns the board. Simulation updates and redraws run on separate
//! cadences inside the same loop; input is polled while waiting for the next
//! deadline.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};

use ascii_blast::config::{Config, Invocation, USAGE};
use ascii_blast::core::{scene, Board, Cadence, TickReport};
use ascii_blast::input::handle_key_event;
use ascii_blast::logging;
use ascii_blast::term::{BoardView, TerminalRenderer, Viewport};
use ascii_blast::types::{ControlAction, RENDER_MS, TICK_MS};

fn main() -> Result<()> {
    let config = match Config::load()? {
        Invocation::Run(config) => config,
        Invocation::Help => {
            print!("{USAGE}");
            return Ok(());
        }
    };

    logging::init(&config)?;
    info!(
        debug = config.debug,
        log_path = %config.log_path.display(),
        "starting run"
    );

    let mut board = scene::standard();
    info!(
        points = board.points().len(),
        barriers = board.barriers().len(),
        "scene ready"
    );

    if config.debug {
        run_headless(&mut board);
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut board);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!(frames = term.frames(), "stopped");
    result
}

fn run(term: &mut TerminalRenderer, board: &mut Board) -> Result<()> {
    let start = Instant::now();
    let now_ms = || start.elapsed().as_millis() as u64;

    let view = BoardView::default();
    let fallback = view.full_viewport();
    let mut updates = Cadence::new(TICK_MS);
    let mut frames = Cadence::new(RENDER_MS);
    let mut tracker = SettleTracker::default();
    let mut paused = false;

    loop {
        if !paused && updates.poll(now_ms()) {
            let report = board.tick();
            tracker.record(&report);
        }

        if frames.poll(now_ms()) {
            let (w, h) = crossterm::terminal::size().unwrap_or((fallback.width, fallback.height));
            let fb = view.render(board, paused, Viewport::new(w, h));
            term.draw(&fb)?;
        }

        let now = now_ms();
        let wait = if paused {
            frames.remaining_ms(now)
        } else {
            frames.remaining_ms(now).min(updates.remaining_ms(now))
        };

        if event::poll(Duration::from_millis(wait))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let Some(action) = handle_key_event(key) else {
                    continue;
                };
                debug!(action = action.as_str(), "control key");
                match action {
                    ControlAction::Quit => return Ok(()),
                    ControlAction::Pause => {
                        paused = !paused;
                        info!(paused, "pause toggled");
                        frames.reset();
                    }
                    ControlAction::Redraw => frames.reset(),
                }
            }
        }
    }
}

/// Debug mode: no terminal takeover, just ticks and log lines until killed.
fn run_headless(board: &mut Board) -> ! {
    let mut tracker = SettleTracker::default();
    loop {
        let report = board.tick();
        tracker.record(&report);
        thread::sleep(Duration::from_millis(TICK_MS));
    }
}

/// Logs each tick and reports once when the last point goes terminal.
#[derive(Default)]
struct SettleTracker {
    ticks: u64,
    settled: bool,
}

impl SettleTracker {
    fn record(&mut self, report: &TickReport) {
        self.ticks += 1;
        debug!(
            tick = self.ticks,
            moved = report.moved,
            blocked = report.blocked,
            exhausted = report.exhausted,
            active = report.active,
            "tick"
        );

        if report.active == 0 && !self.settled {
            self.settled = true;
            info!(ticks = self.ticks, "all points settled");
        }
    }
}
