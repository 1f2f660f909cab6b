//! Fixed timestep simulation tick
//!
//! Core game loop that advances the world by exactly one frame. Velocities
//! are per-tick displacements, so the step takes no `dt`; the driver is
//! responsible for calling it at `SIM_DT` intervals.

use super::collision::{
    Aabb, crossed_baseline, hits_ceiling, hits_side_wall, paddle_bounce, paddle_contact,
};
use super::state::{BrickStatus, EndReason, GameEvent, GameState, GameStatus};

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Held keyboard direction: -speed, 0 or +speed
    pub paddle_dx: f32,
    /// Absolute pointer/touch x; the paddle centers under it
    pub pointer_x: Option<f32>,
    /// Start trigger (space, click, tap)
    pub start: bool,
}

/// Advance the game state by one tick
///
/// Ball, bricks, score and lives only change while `Running`. The paddle
/// keeps following input before the serve. Once `Ended`, nothing changes
/// until `GameState::reset`.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.status.is_ended() {
        return events;
    }

    if input.start && state.start() {
        events.push(GameEvent::Started);
    }

    if state.status == GameStatus::Running {
        state.time_ticks += 1;
        advance_ball(state, &mut events);
        collide_bricks(state, &mut events);
    }

    move_paddle(state, input);

    events
}

/// Integrate the ball and resolve walls, paddle and baseline
fn advance_ball(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let surface = state.config.surface;
    let ball = &mut state.ball;

    ball.pos += ball.vel;

    // No position correction: a fast ball may overlap the wall for a frame
    if hits_side_wall(ball, surface.width) {
        ball.vel.x = -ball.vel.x;
        events.push(GameEvent::WallBounce);
    }

    if hits_ceiling(ball) {
        ball.vel.y = -ball.vel.y;
        events.push(GameEvent::CeilingBounce);
    }

    if let Some(hit_pos) = paddle_contact(ball, &state.paddle) {
        ball.vel = paddle_bounce(ball.vel, hit_pos, ball.speed);
        log::debug!("Paddle hit at {:.2}, vel now {:?}", hit_pos, ball.vel);
        events.push(GameEvent::PaddleHit { hit_pos });
    }

    if crossed_baseline(ball, surface.height) {
        state.lives = state.lives.saturating_sub(1);
        events.push(GameEvent::LifeLost {
            remaining: state.lives,
        });

        if state.lives == 0 {
            state.status = GameStatus::Ended(EndReason::Lost);
            events.push(GameEvent::Lost);
            log::info!("Game over, final score {}", state.score);
        } else {
            state.reset_ball();
            state.status = GameStatus::NotStarted;
            log::info!("Life lost, {} remaining", state.lives);
        }
    }
}

/// Destroy every alive brick the ball's bounding box overlaps
///
/// Each overlapping brick flips the vertical direction on its own, so two
/// bricks hit on the same tick cancel out.
fn collide_bricks(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let ball_box = Aabb::around_circle(state.ball.pos, state.ball.radius);
    let brick_size = state.bricks.brick_size;
    let total = state.config.total_points();

    for brick in state.bricks.iter_mut() {
        if !brick.is_alive() {
            continue;
        }
        if !ball_box.overlaps(&Aabb::from_origin_size(brick.origin, brick_size)) {
            continue;
        }

        state.ball.vel.y = -state.ball.vel.y;
        brick.status = BrickStatus::Destroyed;
        state.score += state.config.points_per_brick;
        log::debug!(
            "Brick ({}, {}) destroyed, score {}",
            brick.row,
            brick.col,
            state.score
        );
        events.push(GameEvent::BrickDestroyed {
            row: brick.row,
            col: brick.col,
        });

        if state.score == total && !state.status.is_ended() {
            state.status = GameStatus::Ended(EndReason::Won);
            events.push(GameEvent::Won);
            log::info!("All bricks cleared, final score {}", state.score);
        }
    }
}

/// Apply pointer target and keyboard intent, then clamp to the surface
fn move_paddle(state: &mut GameState, input: &TickInput) {
    let width = state.config.surface.width;
    let paddle = &mut state.paddle;

    if let Some(x) = input.pointer_x {
        paddle.pos.x = x - paddle.size.x / 2.0;
    }
    paddle.pos.x += input.paddle_dx;
    paddle.clamp_to(width);
}
