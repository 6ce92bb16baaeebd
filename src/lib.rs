//! Torus Snake - a terminal snake game on a wrap-around grid
//!
//! The snake never dies at a wall; leaving one edge re-enters at the
//! opposite edge, and only biting itself ends a run (which resets in place).
//!
//! This library provides:
//! - Core simulation logic (game module): grid, snake, food, tick engine
//! - Keyboard input mapping (input module)
//! - TUI rendering (render module)
//! - Per-session run metrics (metrics module)
//! - The interactive loop tying them together (app module)

pub mod app;
pub mod game;
pub mod input;
pub mod metrics;
pub mod render;
