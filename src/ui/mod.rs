//! Terminal UI for the flappy binary.

pub mod flappy_scene;

pub use flappy_scene::TerminalRenderer;
