//! Input adapter
//!
//! Turns keyboard, pointer and touch events into the `TickInput` the
//! simulation consumes. Event handlers only ever write here; the game state
//! is left to the update step.

use crate::sim::TickInput;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Start,
    /// Toggle the demo player
    Autopilot,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "Left" => Some(Key::Left),
            "ArrowRight" | "Right" => Some(Key::Right),
            " " | "Spacebar" => Some(Key::Start),
            "i" | "I" => Some(Key::Autopilot),
            _ => None,
        }
    }
}

/// Accumulates input between ticks
#[derive(Debug, Clone)]
pub struct InputAdapter {
    surface_width: f32,
    paddle_speed: f32,
    paddle_dx: f32,
    pointer_x: Option<f32>,
    start: bool,
    autopilot: bool,
}

impl InputAdapter {
    pub fn new(surface_width: f32, paddle_speed: f32) -> Self {
        Self {
            surface_width,
            paddle_speed,
            paddle_dx: 0.0,
            pointer_x: None,
            start: false,
            autopilot: false,
        }
    }

    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::Left => self.paddle_dx = -self.paddle_speed,
            Key::Right => self.paddle_dx = self.paddle_speed,
            Key::Start => self.start = true,
            Key::Autopilot => self.toggle_autopilot(),
        }
    }

    /// Releasing either direction stops the paddle
    pub fn key_up(&mut self, key: Key) {
        if matches!(key, Key::Left | Key::Right) {
            self.paddle_dx = 0.0;
        }
    }

    /// Pointer position relative to the surface's left edge
    ///
    /// Positions outside the surface are ignored.
    pub fn pointer_move(&mut self, x: f32) {
        if x > 0.0 && x < self.surface_width {
            self.pointer_x = Some(x);
        }
    }

    pub fn touch_move(&mut self, x: f32) {
        self.pointer_move(x);
    }

    pub fn click(&mut self) {
        self.start = true;
    }

    pub fn touch_start(&mut self) {
        self.start = true;
    }

    pub fn toggle_autopilot(&mut self) {
        self.autopilot = !self.autopilot;
        log::info!("Autopilot: {}", self.autopilot);
    }

    pub fn autopilot(&self) -> bool {
        self.autopilot
    }

    /// Drop everything, e.g. on restart
    pub fn clear(&mut self) {
        self.paddle_dx = 0.0;
        self.pointer_x = None;
        self.start = false;
    }

    /// Input for the next tick; one-shot triggers are consumed
    pub fn take_tick_input(&mut self) -> TickInput {
        TickInput {
            paddle_dx: self.paddle_dx,
            pointer_x: self.pointer_x.take(),
            start: std::mem::take(&mut self.start),
        }
    }
}
