//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only (autopilot)
//! - Stable iteration order (bricks row-major)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod state;
pub mod tick;

pub use autopilot::Autopilot;
pub use collision::{Aabb, paddle_bounce, paddle_contact};
pub use state::{
    Ball, Brick, BrickGrid, BrickStatus, EndReason, GameEvent, GameState, GameStatus, Paddle,
};
pub use tick::{TickInput, tick};
