//! Game state and core simulation types
//!
//! Everything the update step mutates lives in `GameState`. The renderer and
//! input adapter only ever read it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// Every brick destroyed
    Won,
    /// Last life lost
    Lost,
}

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Waiting for the start trigger (ball parked at spawn)
    NotStarted,
    /// Active gameplay
    Running,
    /// Terminal until an explicit restart
    Ended(EndReason),
}

impl GameStatus {
    pub fn is_ended(&self) -> bool {
        matches!(self, GameStatus::Ended(_))
    }
}

/// Something that happened during a tick (for logging and tests)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    WallBounce,
    CeilingBounce,
    /// `hit_pos` is the fraction across the paddle width (0 = left edge)
    PaddleHit { hit_pos: f32 },
    BrickDestroyed { row: usize, col: usize },
    LifeLost { remaining: u8 },
    Won,
    Lost,
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    pub radius: f32,
    /// Base speed used when serving
    pub speed: f32,
}

impl Ball {
    /// Ball parked at its spawn point with the serve velocity
    pub fn spawn(config: &GameConfig) -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: config.ball.radius,
            speed: config.ball.speed,
        };
        ball.respawn(config);
        ball
    }

    /// Move back to spawn: centered, above the baseline, heading up-right
    pub fn respawn(&mut self, config: &GameConfig) {
        self.pos = Vec2::new(
            config.surface.width / 2.0,
            config.surface.height - config.ball.spawn_offset,
        );
        self.vel = Vec2::new(self.speed, -self.speed);
    }

    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner; y never changes
    pub pos: Vec2,
    pub size: Vec2,
    /// Keyboard speed per tick
    pub speed: f32,
}

impl Paddle {
    pub fn new(config: &GameConfig) -> Self {
        let mut paddle = Self {
            pos: Vec2::new(0.0, config.surface.height - config.paddle.bottom_offset),
            size: Vec2::new(config.paddle.width, config.paddle.height),
            speed: config.paddle.speed,
        };
        paddle.center(config.surface.width);
        paddle
    }

    /// Put the paddle in the horizontal middle of the surface
    pub fn center(&mut self, surface_width: f32) {
        self.pos.x = surface_width / 2.0 - self.size.x / 2.0;
    }

    /// Keep the paddle fully on the surface
    pub fn clamp_to(&mut self, surface_width: f32) {
        let max_x = (surface_width - self.size.x).max(0.0);
        self.pos.x = self.pos.x.clamp(0.0, max_x);
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrickStatus {
    Alive,
    Destroyed,
}

/// One cell of the brick grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub row: usize,
    pub col: usize,
    /// Top-left corner on the surface
    pub origin: Vec2,
    pub status: BrickStatus,
}

impl Brick {
    pub fn is_alive(&self) -> bool {
        self.status == BrickStatus::Alive
    }
}

/// Fixed rows × cols grid of bricks, stored row-major
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrickGrid {
    pub rows: usize,
    pub cols: usize,
    /// Size shared by every brick
    pub brick_size: Vec2,
    cells: Vec<Brick>,
}

impl BrickGrid {
    /// Fresh grid with every brick alive and laid out from the config
    pub fn new(config: &GameConfig) -> Self {
        let layout = &config.bricks;
        let mut cells = Vec::with_capacity(layout.rows * layout.cols);
        for row in 0..layout.rows {
            for col in 0..layout.cols {
                let origin = Vec2::new(
                    col as f32 * (layout.width + layout.padding) + layout.offset_left,
                    row as f32 * (layout.height + layout.padding) + layout.offset_top,
                );
                cells.push(Brick {
                    row,
                    col,
                    origin,
                    status: BrickStatus::Alive,
                });
            }
        }
        Self {
            rows: layout.rows,
            cols: layout.cols,
            brick_size: Vec2::new(layout.width, layout.height),
            cells,
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Brick> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells.get(row * self.cols + col)
    }

    /// All bricks in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.cells.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Brick> {
        self.cells.iter_mut()
    }

    pub fn alive(&self) -> impl Iterator<Item = &Brick> {
        self.cells.iter().filter(|b| b.is_alive())
    }

    pub fn alive_count(&self) -> usize {
        self.alive().count()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Complete world state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: GameConfig,
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: BrickGrid,
    pub score: u64,
    pub lives: u8,
    pub status: GameStatus,
    /// Simulation tick counter (ticks spent Running)
    pub time_ticks: u64,
}

impl GameState {
    /// Create a fresh game, waiting for the start trigger
    pub fn new(config: GameConfig) -> Self {
        Self {
            ball: Ball::spawn(&config),
            paddle: Paddle::new(&config),
            bricks: BrickGrid::new(&config),
            score: 0,
            lives: config.initial_lives,
            status: GameStatus::NotStarted,
            time_ticks: 0,
            config,
        }
    }

    /// Repopulate the brick grid, every cell alive
    pub fn init_bricks(&mut self) {
        self.bricks = BrickGrid::new(&self.config);
    }

    /// Put the ball back at spawn with the serve velocity
    pub fn reset_ball(&mut self) {
        self.ball.respawn(&self.config);
    }

    /// Restart from scratch: score, lives, status, entities
    pub fn reset(&mut self) {
        self.score = 0;
        self.lives = self.config.initial_lives;
        self.status = GameStatus::NotStarted;
        self.time_ticks = 0;
        self.reset_ball();
        self.paddle.center(self.config.surface.width);
        self.init_bricks();
        log::info!("Game reset");
    }

    /// Start trigger: NotStarted -> Running. Returns whether it took effect.
    pub fn start(&mut self) -> bool {
        if self.status == GameStatus::NotStarted {
            self.status = GameStatus::Running;
            log::info!("Game started ({} lives, score {})", self.lives, self.score);
            true
        } else {
            false
        }
    }

    /// Score reached once every brick is destroyed
    pub fn total_points(&self) -> u64 {
        self.config.total_points()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
