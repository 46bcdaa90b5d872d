use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event};

use orbmatch::engine::{ResolutionEngine, SwapOutcome};
use orbmatch::input::{handle_key_event, handle_mouse_event, PointerTracker, UiAction};
use orbmatch::term::{BoardView, FrameBuffer, HudState, TerminalRenderer};
use orbmatch::types::{CASCADE_STEP_MS, DEFAULT_COLS, DEFAULT_KIND_COUNT, DEFAULT_ROWS, TICK_MS};

fn main() -> Result<()> {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1);
    let mut engine = ResolutionEngine::with_kinds(seed, DEFAULT_KIND_COUNT);
    let mut board = engine.new_board(DEFAULT_COLS, DEFAULT_ROWS);

    let mut renderer = TerminalRenderer::new()?;
    let (w, h) = renderer.size();
    let mut fb = FrameBuffer::new(w, h);
    let mut view = BoardView::new();
    view.layout(board.cols(), board.rows(), w, h);
    let mut tracker = PointerTracker::new(view.grid_layout(board.cols(), board.rows()));

    let mut snap = board.snapshot();
    let mut next_step = Instant::now();

    loop {
        if event::poll(Duration::from_millis(TICK_MS))? {
            match event::read()? {
                Event::Key(key) => match handle_key_event(key) {
                    Some(UiAction::Quit) => break,
                    Some(UiAction::Restart) => {
                        engine.reset();
                        board = engine.new_board(DEFAULT_COLS, DEFAULT_ROWS);
                    }
                    None => {}
                },
                Event::Mouse(ev) => {
                    if let Some(swipe) = handle_mouse_event(&mut tracker, ev) {
                        match engine.attempt_swap(&mut board, swipe.origin, swipe.dest) {
                            SwapOutcome::CascadeStarted => {
                                next_step = Instant::now() + Duration::from_millis(CASCADE_STEP_MS);
                            }
                            SwapOutcome::Reverted => {}
                            SwapOutcome::Rejected(reason) => {
                                log::debug!("swap rejected: {}", reason.as_str());
                            }
                        }
                    }
                }
                Event::Resize(nw, nh) => {
                    renderer.resize(nw, nh);
                    fb.resize(nw, nh);
                    view.layout(board.cols(), board.rows(), nw, nh);
                    tracker.set_layout(view.grid_layout(board.cols(), board.rows()));
                }
                _ => {}
            }
        }

        if !engine.is_idle() && Instant::now() >= next_step {
            engine.step(&mut board);
            next_step = Instant::now() + Duration::from_millis(CASCADE_STEP_MS);
        }

        board.snapshot_into(&mut snap);
        let hud = HudState {
            score: engine.score(),
            chain: engine.chain(),
            resolving: !engine.is_idle(),
        };
        view.render(&snap, engine.pending_matches(), hud, &mut fb);
        renderer.draw(&fb)?;
    }

    Ok(())
}
