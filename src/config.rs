//! Game configuration
//!
//! Surface size and gameplay tuning. Every field has a default matching the
//! classic layout, so a JSON file only needs the values it overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::renderer::colors;

/// Errors raised while loading or validating a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Play surface size (same units as every position field)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: SURFACE_WIDTH,
            height: SURFACE_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallConfig {
    pub radius: f32,
    /// Base speed per axis, in pixels per tick
    pub speed: f32,
    /// Spawn height above the baseline
    pub spawn_offset: f32,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            radius: BALL_RADIUS,
            speed: BALL_SPEED,
            spawn_offset: BALL_SPAWN_OFFSET,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleConfig {
    pub width: f32,
    pub height: f32,
    /// Keyboard speed, in pixels per tick
    pub speed: f32,
    /// Distance from the paddle's top edge to the baseline
    pub bottom_offset: f32,
}

impl Default for PaddleConfig {
    fn default() -> Self {
        Self {
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            speed: PADDLE_SPEED,
            bottom_offset: PADDLE_BOTTOM_OFFSET,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrickConfig {
    pub rows: usize,
    pub cols: usize,
    pub width: f32,
    pub height: f32,
    pub padding: f32,
    pub offset_top: f32,
    pub offset_left: f32,
    /// Per-row colors as `#RRGGBB`, repeated when there are more rows
    pub palette: Vec<String>,
}

impl Default for BrickConfig {
    fn default() -> Self {
        Self {
            rows: BRICK_ROWS,
            cols: BRICK_COLS,
            width: BRICK_WIDTH,
            height: BRICK_HEIGHT,
            padding: BRICK_PADDING,
            offset_top: BRICK_OFFSET_TOP,
            offset_left: BRICK_OFFSET_LEFT,
            palette: BRICK_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl BrickConfig {
    /// Right edge of the last column
    pub fn grid_right(&self) -> f32 {
        self.offset_left + self.cols as f32 * (self.width + self.padding) - self.padding
    }

    /// Bottom edge of the last row
    pub fn grid_bottom(&self) -> f32 {
        self.offset_top + self.rows as f32 * (self.height + self.padding) - self.padding
    }
}

/// Complete game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub surface: SurfaceConfig,
    pub ball: BallConfig,
    pub paddle: PaddleConfig,
    pub bricks: BrickConfig,

    // === Scoring ===
    pub points_per_brick: u64,
    pub initial_lives: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            surface: SurfaceConfig::default(),
            ball: BallConfig::default(),
            paddle: PaddleConfig::default(),
            bricks: BrickConfig::default(),
            points_per_brick: POINTS_PER_BRICK,
            initial_lives: INITIAL_LIVES,
        }
    }
}

impl GameConfig {
    /// Default layout on a custom surface size
    pub fn with_surface(width: f32, height: f32) -> Self {
        Self {
            surface: SurfaceConfig { width, height },
            ..Self::default()
        }
    }

    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Check that every size is usable and the layout fits the surface
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("surface.width", self.surface.width),
            ("surface.height", self.surface.height),
            ("ball.radius", self.ball.radius),
            ("ball.speed", self.ball.speed),
            ("paddle.width", self.paddle.width),
            ("paddle.height", self.paddle.height),
            ("paddle.speed", self.paddle.speed),
            ("bricks.width", self.bricks.width),
            ("bricks.height", self.bricks.height),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(format!("{name} must be positive, got {value}")));
            }
        }

        if self.bricks.rows == 0 || self.bricks.cols == 0 {
            return Err(invalid("brick grid needs at least one row and one column"));
        }
        if self.initial_lives == 0 {
            return Err(invalid("initial_lives must be at least 1"));
        }
        if self.points_per_brick == 0 {
            return Err(invalid("points_per_brick must be at least 1"));
        }

        if self.bricks.palette.is_empty() {
            return Err(invalid("bricks.palette must not be empty"));
        }
        if let Some(bad) = self
            .bricks
            .palette
            .iter()
            .find(|c| colors::parse_hex(c).is_none())
        {
            return Err(invalid(format!("bricks.palette has bad color {bad:?}")));
        }

        if self.paddle.width > self.surface.width {
            return Err(invalid("paddle is wider than the surface"));
        }
        if self.paddle.bottom_offset <= 0.0 || self.paddle.bottom_offset >= self.surface.height {
            return Err(invalid("paddle.bottom_offset must lie inside the surface"));
        }
        if self.ball.spawn_offset <= self.ball.radius
            || self.ball.spawn_offset >= self.surface.height
        {
            return Err(invalid("ball.spawn_offset must lie inside the surface"));
        }
        if self.bricks.grid_right() > self.surface.width
            || self.bricks.grid_bottom() > self.surface.height
        {
            return Err(invalid("brick grid does not fit the surface"));
        }

        Ok(())
    }

    /// Score reached once every brick is destroyed
    pub fn total_points(&self) -> u64 {
        (self.bricks.rows * self.bricks.cols) as u64 * self.points_per_brick
    }
}

fn invalid(msg: impl Into<String>) -> ConfigError {
    ConfigError::Invalid(msg.into())
}
