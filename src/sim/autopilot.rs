//! Demo player
//!
//! Tracks the ball with the paddle and serves automatically. Each time the
//! ball comes off the paddle a new aim offset is rolled, so rallies spread
//! across the grid instead of repeating one trajectory. The RNG is seeded,
//! so a given seed always plays the same game.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::{GameState, GameStatus};
use super::tick::TickInput;

/// Largest aim offset as a fraction of the paddle width
const MAX_AIM_FRACTION: f32 = 0.35;

pub struct Autopilot {
    rng: Pcg32,
    /// Where on the paddle (from its center) the ball should land
    aim_offset: f32,
    /// Vertical direction seen last tick, to spot bounces
    last_dy: f32,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            aim_offset: 0.0,
            last_dy: 0.0,
        }
    }

    /// Input for the next tick
    pub fn input(&mut self, state: &GameState) -> TickInput {
        let ball = &state.ball;
        let paddle = &state.paddle;

        // Moving up after moving down: it just left the paddle
        if self.last_dy > 0.0 && ball.vel.y < 0.0 {
            let max = paddle.size.x * MAX_AIM_FRACTION;
            self.aim_offset = self.rng.random_range(-max..=max);
        }
        self.last_dy = ball.vel.y;

        let paddle_center = paddle.pos.x + paddle.size.x / 2.0;
        let target = ball.pos.x - self.aim_offset;
        let paddle_dx = (target - paddle_center).clamp(-paddle.speed, paddle.speed);

        TickInput {
            paddle_dx,
            pointer_x: None,
            start: state.status == GameStatus::NotStarted,
        }
    }
}
