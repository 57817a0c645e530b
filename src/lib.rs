//! Flappy - Terminal Side-Scroller Library
//!
//! This module exposes the game core and loop driver for testing and for
//! hosts other than the bundled terminal UI.

pub mod build_info;
pub mod core;
pub mod game;

pub use crate::core::{GameConfig, GameError, GameHandle, GameLoop};
pub use crate::game::{
    ActionOutcome, Bird, CrashCause, FlappyGame, FrameSnapshot, GamePhase, Pipe, Renderer,
    TickOutcome, Viewport,
};
