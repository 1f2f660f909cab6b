//! Text back end: draws `Text` commands on a 2D canvas layered over the
//! WebGPU canvas.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::frame::DrawCommand;
use super::vertex::colors;

pub struct TextOverlay {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl TextOverlay {
    /// Wrap an overlay canvas sized to the play surface
    pub fn new(canvas: HtmlCanvasElement, width: u32, height: u32) -> Result<Self, JsValue> {
        canvas.set_width(width);
        canvas.set_height(height);
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    /// Clear and draw every text command of the frame
    pub fn draw(&self, commands: &[DrawCommand]) -> Result<(), JsValue> {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );

        for command in commands {
            if let DrawCommand::Text {
                text,
                pos,
                size,
                color,
                align,
            } = command
            {
                self.ctx.set_font(&format!("{}px Arial", size));
                self.ctx.set_fill_style_str(&colors::to_css(*color));
                self.ctx.set_text_align(align.as_css());
                self.ctx.fill_text(text, pos.x as f64, pos.y as f64)?;
            }
        }

        Ok(())
    }
}
