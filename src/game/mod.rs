//! Flappy game core.
//!
//! A bird falls under gravity and jumps on the primary action while a pool of
//! three pipes scrolls toward it. Passing a gap scores a point; touching a
//! pipe, the ceiling or the ground ends the run.

pub mod logic;
pub mod pool;
pub mod snapshot;
pub mod types;

pub use logic::*;
pub use pool::PipePool;
pub use snapshot::*;
pub use types::*;
