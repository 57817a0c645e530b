//! Error type for game construction and loop lifecycle.
//!
//! Collisions and boundary breaches are not errors: they are phase
//! transitions inside the simulation. Only bad construction input and a
//! crashed loop thread surface here.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Viewport is zero or too small to derive non-degenerate geometry.
    InvalidViewport { width: u32, height: u32 },
    /// A non-geometry config value is out of range.
    InvalidConfig(String),
    /// The loop thread panicked and could not be joined cleanly.
    LoopPanicked,
    /// The renderer went down with a panicked loop thread, so the loop cannot
    /// be started again.
    RendererLost,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidViewport { width, height } => {
                write!(f, "invalid viewport {}x{}", width, height)
            }
            GameError::InvalidConfig(msg) => write!(f, "invalid config: {}", msg),
            GameError::LoopPanicked => write!(f, "game loop thread panicked"),
            GameError::RendererLost => write!(f, "renderer lost with a panicked game loop"),
        }
    }
}

impl std::error::Error for GameError {}
