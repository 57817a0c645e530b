//! Background game loop.
//!
//! One thread runs update → render → sleep at a fixed cadence. Input and
//! lifecycle calls arrive from other threads; every access to the game goes
//! through the single mutex in [`GameHandle`], so a trigger is applied either
//! wholly before or wholly after a tick, never in the middle of one.

use crate::core::error::GameError;
use crate::game::{ActionOutcome, FlappyGame, FrameSnapshot, Renderer};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Cloneable, thread-safe access to the one shared game.
#[derive(Debug, Clone)]
pub struct GameHandle {
    game: Arc<Mutex<FlappyGame>>,
}

impl GameHandle {
    pub fn new(game: FlappyGame) -> Self {
        Self {
            game: Arc::new(Mutex::new(game)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, FlappyGame> {
        // Poisoning is ignored: the input thread must keep working.
        self.game.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Deliver one primary action, evaluated against the phase right now.
    pub fn on_primary_action(&self) -> ActionOutcome {
        self.lock().primary_action()
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        self.lock().snapshot()
    }

    /// Run `f` with exclusive access to the game.
    pub fn with_game<T>(&self, f: impl FnOnce(&mut FlappyGame) -> T) -> T {
        f(&mut self.lock())
    }
}

/// Owns the loop thread and the renderer it draws with.
///
/// The renderer moves into the thread on [`GameLoop::start`] and comes back
/// when [`GameLoop::stop`] joins it, so a stopped loop can be started again.
pub struct GameLoop<R: Renderer + Send + 'static> {
    handle: GameHandle,
    tick_interval: Duration,
    running: Arc<AtomicBool>,
    renderer: Option<R>,
    thread: Option<JoinHandle<R>>,
}

impl<R: Renderer + Send + 'static> GameLoop<R> {
    pub fn new(game: FlappyGame, renderer: R, tick_interval: Duration) -> Self {
        Self {
            handle: GameHandle::new(game),
            tick_interval,
            running: Arc::new(AtomicBool::new(false)),
            renderer: Some(renderer),
            thread: None,
        }
    }

    pub fn handle(&self) -> GameHandle {
        self.handle.clone()
    }

    pub fn is_running(&self) -> bool {
        self.thread.is_some()
    }

    /// Spawn the loop thread. Starting a running loop is a no-op; starting
    /// after a panicked run fails with [`GameError::RendererLost`].
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.thread.is_some() {
            log::warn!("Game loop already running");
            return Ok(());
        }
        let renderer = self.renderer.take().ok_or(GameError::RendererLost)?;

        self.running.store(true, Ordering::Release);
        let handle = self.handle.clone();
        let running = Arc::clone(&self.running);
        let interval = self.tick_interval;
        self.thread = Some(thread::spawn(move || {
            run_loop(handle, renderer, running, interval)
        }));
        Ok(())
    }

    /// Ask the loop to stop and wait for the current iteration to finish.
    /// Stopping a stopped loop is a no-op.
    pub fn stop(&mut self) -> Result<(), GameError> {
        let Some(thread) = self.thread.take() else {
            return Ok(());
        };
        self.running.store(false, Ordering::Release);
        // Cut the current sleep short; the flag is checked right after.
        thread.thread().unpark();
        match thread.join() {
            Ok(renderer) => {
                self.renderer = Some(renderer);
                Ok(())
            }
            Err(_) => {
                log::error!("Game loop thread panicked");
                Err(GameError::LoopPanicked)
            }
        }
    }

    /// Deliver one primary action from the input thread.
    pub fn on_primary_action(&self) -> ActionOutcome {
        self.handle.on_primary_action()
    }

    /// Stop the loop and hand back the renderer.
    pub fn into_renderer(mut self) -> Result<R, GameError> {
        self.stop()?;
        self.renderer.take().ok_or(GameError::RendererLost)
    }
}

impl<R: Renderer + Send + 'static> Drop for GameLoop<R> {
    fn drop(&mut self) {
        if let Err(e) = self.stop() {
            log::error!("Failed to stop game loop: {}", e);
        }
    }
}

fn run_loop<R: Renderer>(
    handle: GameHandle,
    mut renderer: R,
    running: Arc<AtomicBool>,
    interval: Duration,
) -> R {
    log::info!("Game loop started ({}ms per tick)", interval.as_millis());
    let mut iterations: u64 = 0;
    while running.load(Ordering::Acquire) {
        let frame = handle.with_game(|game| {
            game.tick();
            game.snapshot()
        });
        if let Err(e) = renderer.render(&frame) {
            log::warn!("Render failed: {}", e);
        }
        iterations += 1;
        // An early wake (stop request or spurious unpark) just moves on.
        thread::park_timeout(interval);
    }
    log::info!("Game loop stopped after {} iterations", iterations);
    renderer
}
