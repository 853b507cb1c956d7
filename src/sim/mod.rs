//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per displayed frame
//! - Integer-exact positions and velocities
//! - Stable brick iteration order (row-major grid order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::Rect;
pub use state::{Ball, BallState, Brick, BrickField, GamePhase, GameState, Paddle, Scoreboard};
pub use tick::tick;
