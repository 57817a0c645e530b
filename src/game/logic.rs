//! Game logic: per-tick simulation, collision and scoring, and the phase
//! machine driven by the primary action.

use super::types::{Bird, FlappyGame, GamePhase};

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrashCause {
    Ceiling,
    Ground,
    /// Index of the pipe that was hit.
    Pipe(usize),
}

/// What one call to [`FlappyGame::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not playing; nothing simulated.
    Idle,
    /// Simulated one step. `scored` pipes were passed this tick.
    Advanced { scored: u32, recycled: usize },
    /// The bird crashed and the game is over.
    Crashed(CrashCause),
}

/// What the primary action did, decided by the phase at delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Started,
    Jumped,
    Reset,
}

impl FlappyGame {
    /// Apply one primary action (tap / click / key) against the current
    /// phase. Exactly one transition happens per call.
    pub fn primary_action(&mut self) -> ActionOutcome {
        match self.phase {
            GamePhase::Waiting => {
                self.phase = GamePhase::Playing;
                log::info!("Game started");
                ActionOutcome::Started
            }
            GamePhase::Playing => {
                self.bird.jump();
                ActionOutcome::Jumped
            }
            GamePhase::GameOver => {
                self.reset();
                ActionOutcome::Reset
            }
        }
    }

    /// Run one simulation step. Does nothing unless playing.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != GamePhase::Playing {
            return TickOutcome::Idle;
        }
        self.tick_count += 1;

        self.bird.integrate();
        if let Some(cause) = self.boundary_breach() {
            return self.crash(cause);
        }

        self.pool.advance(self.pipe_speed);
        let recycled = self.pool.recycle_expired(&mut self.rng);

        let mut scored = 0;
        let mut hit = None;
        let bird_x = self.bird.x();
        for (i, pipe) in self.pool.pipes_mut().iter_mut().enumerate() {
            if pipe.collides_with(&self.bird) {
                hit = Some(i);
                break;
            }
            if !pipe.passed() && (pipe.right() as f64) < bird_x {
                pipe.mark_passed();
                scored += 1;
            }
        }
        self.score += scored;
        if let Some(i) = hit {
            return self.crash(CrashCause::Pipe(i));
        }
        if scored > 0 {
            log::debug!("Score: {}", self.score);
        }

        TickOutcome::Advanced { scored, recycled }
    }

    /// Fresh bird, fresh pool, zero score, back to waiting. The session
    /// random generator carries on.
    pub fn reset(&mut self) {
        self.bird = Bird::spawn(&self.viewport);
        self.pool.reset(&mut self.rng);
        self.score = 0;
        self.tick_count = 0;
        self.phase = GamePhase::Waiting;
        log::info!("Game reset");
    }

    /// Final score of the finished run, if the game is over.
    pub fn final_score(&self) -> Option<u32> {
        (self.phase == GamePhase::GameOver).then_some(self.score)
    }

    fn boundary_breach(&self) -> Option<CrashCause> {
        let y = self.bird.y();
        if y <= 0.0 {
            Some(CrashCause::Ceiling)
        } else if y >= self.viewport.height as f64 {
            Some(CrashCause::Ground)
        } else {
            None
        }
    }

    fn crash(&mut self, cause: CrashCause) -> TickOutcome {
        self.phase = GamePhase::GameOver;
        log::info!(
            "Game over ({:?}) after {} ticks, score {}",
            cause,
            self.tick_count,
            self.score
        );
        TickOutcome::Crashed(cause)
    }
}
