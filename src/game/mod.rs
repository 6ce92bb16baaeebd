//! Core simulation module for the snake game
//!
//! Everything here is terminal-free and synchronous: the toroidal grid, the
//! snake state machine, food placement, and the engine that runs one tick at
//! a time. The app loop drives it from a timer and hands each resulting
//! state snapshot to the renderer.

pub mod config;
pub mod direction;
pub mod engine;
pub mod food;
pub mod grid;
pub mod snake;

// Re-export commonly used types
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{GameEngine, GameState, TickOutcome};
pub use food::{Food, GameError};
pub use grid::{Cell, Grid};
pub use snake::Snake;
