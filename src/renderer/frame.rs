//! Frame description
//!
//! `render` turns the world into a flat list of draw commands. It reads the
//! state and nothing else, so it can be checked without a GPU.

use glam::Vec2;

use super::vertex::{Color, colors};
use crate::sim::{EndReason, GameState, GameStatus};

/// Fallback when a palette entry fails to parse
const FALLBACK_BRICK: Color = [0.5, 0.5, 0.5, 1.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    /// Name used by the canvas `textAlign` property
    pub fn as_css(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// One primitive to draw, in surface coordinates (origin top-left, y down)
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Rect {
        origin: Vec2,
        size: Vec2,
        color: Color,
    },
    Text {
        text: String,
        /// Baseline anchor
        pos: Vec2,
        size: f32,
        color: Color,
        align: TextAlign,
    },
}

/// Build the draw list for the current state
///
/// Bricks first, then ball and paddle, then HUD and overlay text.
pub fn render(state: &GameState) -> Vec<DrawCommand> {
    let palette: Vec<Color> = state
        .config
        .bricks
        .palette
        .iter()
        .map(|hex| colors::parse_hex(hex).unwrap_or(FALLBACK_BRICK))
        .collect();

    let mut commands = Vec::with_capacity(state.bricks.len() + 6);

    for brick in state.bricks.alive() {
        let color = if palette.is_empty() {
            FALLBACK_BRICK
        } else {
            palette[brick.row % palette.len()]
        };
        commands.push(DrawCommand::Rect {
            origin: brick.origin,
            size: state.bricks.brick_size,
            color,
        });
    }

    commands.push(DrawCommand::Circle {
        center: state.ball.pos,
        radius: state.ball.radius,
        color: colors::BALL,
    });
    commands.push(DrawCommand::Rect {
        origin: state.paddle.pos,
        size: state.paddle.size,
        color: colors::PADDLE,
    });

    let width = state.config.surface.width;
    let center = Vec2::new(width / 2.0, state.config.surface.height / 2.0);

    commands.push(DrawCommand::Text {
        text: format!("Score: {}", state.score),
        pos: Vec2::new(8.0, 24.0),
        size: 16.0,
        color: colors::TEXT,
        align: TextAlign::Left,
    });
    commands.push(DrawCommand::Text {
        text: format!("Lives: {}", state.lives),
        pos: Vec2::new(width - 8.0, 24.0),
        size: 16.0,
        color: colors::TEXT,
        align: TextAlign::Right,
    });

    match state.status {
        GameStatus::NotStarted => {
            commands.push(DrawCommand::Text {
                text: "Press Space or tap to start".to_string(),
                pos: center,
                size: 20.0,
                color: colors::TEXT,
                align: TextAlign::Center,
            });
        }
        GameStatus::Ended(reason) => {
            let (title, color) = match reason {
                EndReason::Won => ("Cleared!", colors::WIN_TEXT),
                EndReason::Lost => ("Game Over", colors::LOSE_TEXT),
            };
            commands.push(DrawCommand::Text {
                text: title.to_string(),
                pos: center,
                size: 40.0,
                color,
                align: TextAlign::Center,
            });
            commands.push(DrawCommand::Text {
                text: format!("Score: {}", state.score),
                pos: center + Vec2::new(0.0, 40.0),
                size: 20.0,
                color: colors::TEXT,
                align: TextAlign::Center,
            });
        }
        GameStatus::Running => {}
    }

    commands
}
