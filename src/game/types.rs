//! Flappy data structures.
//!
//! The bird and pipes are plain value types owned by [`FlappyGame`]; neither
//! holds a reference back to the game. All geometry is derived from the
//! [`Viewport`] once, at construction.

use super::pool::PipePool;
use crate::core::config::GameConfig;
use crate::core::constants::*;
use crate::core::error::GameError;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Session viewport in world units. Immutable once the game is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Result<Self, GameError> {
        if !(MIN_VIEWPORT_WIDTH..=MAX_VIEWPORT_WIDTH).contains(&width)
            || !(MIN_VIEWPORT_HEIGHT..=MAX_VIEWPORT_HEIGHT).contains(&height)
        {
            return Err(GameError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn pipe_width(&self) -> i32 {
        (self.width / PIPE_WIDTH_DIVISOR) as i32
    }

    pub fn gap_height(&self) -> i32 {
        (self.height / PIPE_GAP_DIVISOR) as i32
    }

    /// Horizontal distance from a recycled pipe to the current farthest one.
    pub fn recycle_spacing(&self) -> i32 {
        (self.width / 2) as i32
    }

    /// Lowest gap top a pipe can be given.
    pub fn gap_top_min(&self) -> i32 {
        (self.height / GAP_TOP_MIN_DIVISOR) as i32
    }

    /// Width of the half-open range gap tops are drawn from.
    pub fn gap_top_spread(&self) -> i32 {
        (self.height / GAP_TOP_SPREAD_DIVISOR) as i32
    }
}

/// The player-controlled body. `x` never changes after construction and
/// `velocity` only changes through [`Bird::integrate`] and [`Bird::jump`].
#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    x: f64,
    y: f64,
    velocity: f64,
    radius: f64,
}

impl Bird {
    pub fn new(x: f64, y: f64, radius: f64) -> Self {
        Self {
            x,
            y,
            velocity: 0.0,
            radius,
        }
    }

    /// Starting bird for a viewport: a quarter in from the left, vertically
    /// centred.
    pub fn spawn(viewport: &Viewport) -> Self {
        Self::new(
            (viewport.width / BIRD_X_DIVISOR) as f64,
            (viewport.height / BIRD_Y_DIVISOR) as f64,
            (viewport.width / BIRD_RADIUS_DIVISOR) as f64,
        )
    }

    /// Apply one tick of gravity, then move by the new velocity.
    pub fn integrate(&mut self) {
        self.velocity += GRAVITY;
        self.y += self.velocity;
    }

    /// Replace the current velocity with the upward impulse.
    pub fn jump(&mut self) {
        self.velocity = JUMP_IMPULSE;
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[cfg(test)]
    pub(crate) fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    #[cfg(test)]
    pub(crate) fn set_velocity(&mut self, velocity: f64) {
        self.velocity = velocity;
    }
}

/// Axis-aligned rectangle as `(left, top, right, bottom)` in world units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Half-open containment: left and top edges are inside, right and bottom
    /// are not.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left as f64
            && x < self.right as f64
            && y >= self.top as f64
            && y < self.bottom as f64
    }
}

/// A top + bottom pipe pair with a vertical gap between them.
///
/// `width` and `gap_height` are fixed for the pipe's lifetime; recycling only
/// moves it and picks a new gap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipe {
    x: i32,
    gap_top: i32,
    width: i32,
    gap_height: i32,
    passed: bool,
}

impl Pipe {
    pub fn new(x: i32, gap_top: i32, width: i32, gap_height: i32) -> Self {
        Self {
            x,
            gap_top,
            width,
            gap_height,
            passed: false,
        }
    }

    pub fn update(&mut self, speed: i32) {
        self.x -= speed;
    }

    pub fn recycle(&mut self, new_x: i32, new_gap_top: i32) {
        self.x = new_x;
        self.gap_top = new_gap_top;
        self.passed = false;
    }

    /// Bounding-box test against the bird. Horizontal overlap uses the bird's
    /// box; vertically the whole box must sit inside the gap. Touching a gap
    /// edge exactly is still inside.
    pub fn collides_with(&self, bird: &Bird) -> bool {
        let r = bird.radius();
        let overlaps_x =
            bird.x() + r > self.x as f64 && bird.x() - r < (self.x + self.width) as f64;
        if !overlaps_x {
            return false;
        }
        bird.y() - r < self.gap_top as f64 || bird.y() + r > self.gap_bottom() as f64
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn gap_top(&self) -> i32 {
        self.gap_top
    }

    pub fn gap_bottom(&self) -> i32 {
        self.gap_top + self.gap_height
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn gap_height(&self) -> i32 {
        self.gap_height
    }

    pub fn passed(&self) -> bool {
        self.passed
    }

    pub(crate) fn mark_passed(&mut self) {
        self.passed = true;
    }

    pub fn top_rect(&self) -> Rect {
        Rect::new(self.x, 0, self.right(), self.gap_top)
    }

    pub fn bottom_rect(&self, viewport_height: u32) -> Rect {
        Rect::new(
            self.x,
            self.gap_bottom(),
            self.right(),
            viewport_height as i32,
        )
    }
}

/// Game phase. The primary action does something different in each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    #[default]
    Waiting,
    Playing,
    GameOver,
}

impl GamePhase {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Waiting => "Waiting",
            Self::Playing => "Playing",
            Self::GameOver => "Game Over",
        }
    }
}

/// Top-level game. Exclusively owns the bird, pipe pool, phase, score and the
/// session random generator.
#[derive(Debug, Clone)]
pub struct FlappyGame {
    pub(crate) viewport: Viewport,
    pub(crate) bird: Bird,
    pub(crate) pool: PipePool,
    pub(crate) phase: GamePhase,
    pub(crate) score: u32,
    pub(crate) pipe_speed: i32,
    /// Ticks simulated while playing since the last reset.
    pub(crate) tick_count: u64,
    pub(crate) rng: StdRng,
}

impl FlappyGame {
    /// Build a game in the `Waiting` phase. Fails fast on a bad config.
    pub fn new(config: &GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let viewport = Viewport::new(config.width, config.height)?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let pool = PipePool::new(viewport, &mut rng);

        log::debug!(
            "New game: viewport {}x{}, pipe speed {}, seed {:?}",
            viewport.width,
            viewport.height,
            config.pipe_speed,
            config.seed
        );

        Ok(Self {
            viewport,
            bird: Bird::spawn(&viewport),
            pool,
            phase: GamePhase::Waiting,
            score: 0,
            pipe_speed: config.pipe_speed,
            tick_count: 0,
            rng,
        })
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn bird(&self) -> &Bird {
        &self.bird
    }

    pub fn pipes(&self) -> &[Pipe] {
        self.pool.pipes()
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}
