//! Read-only view of a game handed to the render collaborator.
//!
//! A [`FrameSnapshot`] is copied out of the game while the state lock is held,
//! so the renderer never touches live game state and never blocks input.

use super::types::{FlappyGame, GamePhase, Rect, Viewport};
use crate::core::constants::{GAME_OVER_TITLE, PIPE_COUNT, RESTART_PROMPT, WAITING_PROMPT};
use std::io;

/// Bird position and size in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirdView {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub velocity: f64,
}

/// Draw rectangles for one pipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipeView {
    pub top: Rect,
    pub bottom: Rect,
}

/// One line of centred overlay text at world height `y`.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayLine {
    pub text: String,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    pub viewport: Viewport,
    pub phase: GamePhase,
    pub score: u32,
    pub bird: BirdView,
    pub pipes: [PipeView; PIPE_COUNT],
    /// Where the running score is drawn: horizontally centred at this height.
    pub score_y: f64,
    /// Phase overlay, top to bottom. Empty while playing.
    pub overlay: Vec<OverlayLine>,
}

impl FrameSnapshot {
    /// Score to show on the game-over overlay.
    pub fn final_score(&self) -> Option<u32> {
        (self.phase == GamePhase::GameOver).then_some(self.score)
    }
}

/// Render collaborator. Called from the loop thread once per iteration,
/// whatever the phase.
pub trait Renderer {
    fn render(&mut self, frame: &FrameSnapshot) -> io::Result<()>;
}

impl FlappyGame {
    pub fn snapshot(&self) -> FrameSnapshot {
        let viewport = self.viewport;
        let pipes = self.pool.pipes();
        FrameSnapshot {
            viewport,
            phase: self.phase,
            score: self.score,
            bird: BirdView {
                x: self.bird.x(),
                y: self.bird.y(),
                radius: self.bird.radius(),
                velocity: self.bird.velocity(),
            },
            pipes: std::array::from_fn(|i| PipeView {
                top: pipes[i].top_rect(),
                bottom: pipes[i].bottom_rect(viewport.height),
            }),
            score_y: viewport.height as f64 / 8.0,
            overlay: overlay_lines(self.phase, self.score, viewport.height as f64),
        }
    }
}

fn overlay_lines(phase: GamePhase, score: u32, height: f64) -> Vec<OverlayLine> {
    let middle = height / 2.0;
    let step = height / 10.0;
    let line = |text: String, y: f64| OverlayLine { text, y };
    match phase {
        GamePhase::Waiting => vec![line(WAITING_PROMPT.to_string(), middle)],
        GamePhase::Playing => Vec::new(),
        GamePhase::GameOver => vec![
            line(format!("Score: {}", score), middle - step),
            line(GAME_OVER_TITLE.to_string(), middle),
            line(RESTART_PROMPT.to_string(), middle + step),
        ],
    }
}
