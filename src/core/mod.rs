//! Configuration, errors, constants and the background game loop.

pub mod config;
pub mod constants;
pub mod error;
pub mod game_loop;

pub use config::GameConfig;
pub use constants::*;
pub use error::GameError;
pub use game_loop::{GameHandle, GameLoop};
