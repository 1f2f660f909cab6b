//! Brick Breaker - A single-screen ball-and-paddle arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, game status)
//! - `input`: Keyboard/pointer/touch events to per-tick paddle intent
//! - `renderer`: Draw command generation and the WebGPU pipeline
//! - `config`: Surface size and tuning, loadable from JSON

pub mod config;
pub mod input;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use input::{InputAdapter, Key};

/// Game configuration constants (defaults for `GameConfig`)
pub mod consts {
    /// Fixed simulation timestep (one tick per 60 Hz frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Surface dimensions
    pub const SURFACE_WIDTH: f32 = 500.0;
    pub const SURFACE_HEIGHT: f32 = 600.0;

    /// Ball defaults (velocities are in pixels per tick)
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BALL_SPEED: f32 = 3.0;
    /// Spawn height above the baseline
    pub const BALL_SPAWN_OFFSET: f32 = 60.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 80.0;
    pub const PADDLE_HEIGHT: f32 = 12.0;
    pub const PADDLE_SPEED: f32 = 6.0;
    /// Distance from the paddle's top edge to the baseline
    pub const PADDLE_BOTTOM_OFFSET: f32 = 40.0;
    /// Smallest horizontal speed after a paddle bounce
    pub const MIN_BOUNCE_DX: f32 = 1.0;

    /// Brick grid layout
    pub const BRICK_ROWS: usize = 6;
    pub const BRICK_COLS: usize = 8;
    pub const BRICK_WIDTH: f32 = 55.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_PADDING: f32 = 5.0;
    pub const BRICK_OFFSET_TOP: f32 = 60.0;
    pub const BRICK_OFFSET_LEFT: f32 = 15.0;

    /// Scoring
    pub const POINTS_PER_BRICK: u64 = 10;
    pub const INITIAL_LIVES: u8 = 3;

    /// Per-row brick colors (repeats when there are more rows)
    pub const BRICK_PALETTE: [&str; 6] = [
        "#FF6B6B", "#FFA500", "#FFD93D", "#6BCF7F", "#4ECDC4", "#4D96FF",
    ];
}
